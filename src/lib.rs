//! dock-prefs: preferences dialog for a panel dock applet
//!
//! This library provides:
//! - The settings domain model the applet seeds and reads back
//! - The cairo drawers for icon backgrounds and running-window indicators
//! - The appearance preview renderer composing the two
//! - The GTK4 preferences dialog wiring them to an accessor surface

pub mod core;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use crate::core::settings::{
    resolve_theme, AttentionType, ClickActionType, DockSettings, DockSizeMode, IconBgType,
    IndicatorType, ThemeType,
};
pub use crate::render::preview::PreviewSource;
pub use crate::ui::PrefsDialog;
