//! Tests for the contact-form submission cycle.

use std::time::Duration;

use pageflow_core::form::{FormConfig, FormMachine, FormPhase};

#[test]
fn submit_enters_sending_with_configured_effects() {
    let config = FormConfig::default();
    let mut form = FormMachine::new();

    let outcome = form.submit("Send Message", &config).expect("first submit");
    assert_eq!(outcome.confirm_label, "Message Sent!");
    assert_eq!(outcome.reset_delay, Duration::from_millis(2500));
    assert!(form.is_sending());
}

#[test]
fn confirm_label_and_delay_are_configurable() {
    let config = FormConfig {
        confirm_label: "Sent!".to_string(),
        reset_delay_ms: 1000,
    };
    let mut form = FormMachine::new();

    let outcome = form.submit("Submit", &config).expect("submit");
    assert_eq!(outcome.confirm_label, "Sent!");
    assert_eq!(outcome.reset_delay, Duration::from_millis(1000));
}

#[test]
fn reset_restores_captured_label_exactly() {
    let config = FormConfig::default();
    let mut form = FormMachine::new();

    let outcome = form.submit("Fire Away 🚀", &config).expect("submit");
    let reset = form.reset(outcome.cycle).expect("matching reset");

    assert_eq!(reset.restored_label, "Fire Away 🚀");
    assert_eq!(*form.phase(), FormPhase::Idle);
}

#[test]
fn resubmission_while_sending_is_rejected() {
    let config = FormConfig::default();
    let mut form = FormMachine::new();

    form.submit("Send", &config).expect("first submit");
    assert!(form.submit("Send", &config).is_none());
    assert!(form.is_sending());
}

#[test]
fn stale_reset_from_earlier_cycle_is_ignored() {
    let config = FormConfig::default();
    let mut form = FormMachine::new();

    let first = form.submit("Send", &config).expect("first cycle");
    form.reset(first.cycle).expect("first reset");

    let second = form.submit("Send", &config).expect("second cycle");

    // The first cycle's timer fires late: must not touch the live cycle.
    assert!(form.reset(first.cycle).is_none());
    assert!(form.is_sending());

    form.reset(second.cycle).expect("second reset");
    assert!(!form.is_sending());
}

#[test]
fn reset_while_idle_is_a_no_op() {
    let mut form = FormMachine::new();
    assert!(form.reset(0).is_none());

    let config = FormConfig::default();
    let outcome = form.submit("Send", &config).expect("submit");
    form.reset(outcome.cycle).expect("reset");
    assert!(form.reset(outcome.cycle).is_none(), "double reset");
}

#[test]
fn machine_is_reentrant_across_cycles() {
    let config = FormConfig::default();
    let mut form = FormMachine::new();

    for _ in 0..3 {
        let outcome = form.submit("Send Message", &config).expect("submit");
        assert!(form.is_sending());
        let reset = form.reset(outcome.cycle).expect("reset");
        assert_eq!(reset.restored_label, "Send Message");
        assert!(!form.is_sending());
    }
}
