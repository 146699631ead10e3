//! Application settings - persisted interaction tunables.
//!
//! Every timing parameter the page controllers use is configuration, not a
//! literal: the nav compaction threshold, the reveal threshold offset, the
//! form confirmation label and reset delay, and the scroll tween duration.
//! Settings are loaded from a TOML file in the platform config directory at
//! startup; a missing or unreadable file falls back to defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use pageflow_core::anchor::TweenConfig;
use pageflow_core::form::FormConfig;
use pageflow_core::nav::NavConfig;
use pageflow_core::reveal::RevealConfig;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Navigation bar tunables.
    pub nav: NavConfig,

    /// Reveal-on-scroll tunables.
    pub reveal: RevealConfig,

    /// Contact form simulation tunables.
    pub form: FormConfig,

    /// Smooth-scroll tween tunables.
    pub tween: TweenConfig,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path, falling back to defaults on any
    /// read or parse failure.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path, creating parent directories as
    /// needed.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing settings to {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "PageflowStudio", "Pageflow")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
