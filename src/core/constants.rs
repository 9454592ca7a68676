//! Shared constants for the settings model and the preferences dialog

/// Maximum spacing, in pixels, between app icons in the dock
pub const APP_SPACING_MAX: u32 = 7;

/// Smallest number of app icons a fixed-size dock may be configured for
pub const FIXED_ICON_COUNT_MIN: u32 = 2;

/// Largest number of app icons a fixed-size dock may be configured for
pub const FIXED_ICON_COUNT_MAX: u32 = 64;

/// Shortest configurable popup delay, in milliseconds
pub const POPUP_DELAY_MIN_MS: u32 = 100;

/// Longest configurable popup delay, in milliseconds
pub const POPUP_DELAY_MAX_MS: u32 = 5000;

/// The popup delay spin button edits seconds in steps of this size
pub const POPUP_DELAY_STEP_SECS: f64 = 0.1;

/// Bar indicator colour used when the GTK theme does not provide one
pub const DEFAULT_FALLBACK_BAR_COLOR: [u8; 3] = [192, 128, 0];

/// The preview canvas is this many icon-widths wide; the icon cell is
/// composited one icon-width in and the rest stays panel-coloured
pub const PREVIEW_CANVAS_FACTOR: i32 = 3;

/// Icon cell size used by the demo binary when the owner supplies none
pub const DEFAULT_ICON_SIZE: i32 = 48;
