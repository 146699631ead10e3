//! Theme constants and shared styling helpers.
//!
//! Spacing follows a small fixed scale; colors are a muted editorial
//! palette. Reveal and disabled states are expressed by fading a color's
//! alpha channel, so every component takes plain colors and applies
//! [`faded`] itself.

use iced::Color;

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

/// Double extra large spacing - hero sections, major divisions
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Large radius - overlays
pub const BORDER_RADIUS_LG: f32 = 8.0;

// =============================================================================
// PALETTE
// =============================================================================

/// Near-black body text.
pub const INK: Color = Color::from_rgb(0.13, 0.15, 0.18);

/// Secondary text.
pub const INK_SOFT: Color = Color::from_rgb(0.38, 0.41, 0.45);

/// Page background.
pub const PAPER: Color = Color::from_rgb(0.98, 0.97, 0.95);

/// Card and panel surfaces.
pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Hairline borders.
pub const HAIRLINE: Color = Color::from_rgb(0.88, 0.87, 0.84);

/// Accent - burnt orange, used for actions and the brand mark.
pub const ACCENT: Color = Color::from_rgb(0.80, 0.48, 0.16);

/// Accent hover shade.
pub const ACCENT_HOVER: Color = Color::from_rgb(0.70, 0.41, 0.12);

/// Deep slate used for the hero backdrop.
pub const SLATE: Color = Color::from_rgb(0.18, 0.23, 0.30);

/// Text placed over the slate backdrop.
pub const ON_SLATE: Color = Color::from_rgb(0.96, 0.95, 0.92);

// =============================================================================
// HELPERS
// =============================================================================

/// Scale a color's alpha. `alpha` of 0.0 hides, 1.0 leaves unchanged.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Alpha for a reveal candidate's content: invisible while pending, full
/// once revealed.
pub fn reveal_alpha(revealed: bool) -> f32 {
    if revealed { 1.0 } else { 0.0 }
}

/// Opacity applied to the submit control while a submission cycle is in
/// flight.
pub const SENDING_OPACITY: f32 = 0.65;
