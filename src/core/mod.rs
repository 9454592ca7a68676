//! Domain types shared by the dialog, the renderer and the owning applet

pub mod constants;
pub mod settings;

pub use settings::{
    resolve_theme, AttentionType, ClickActionType, DockSettings, DockSizeMode, IconBgType,
    IndicatorType, ThemeType,
};
