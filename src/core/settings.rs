//! Dock settings domain model
//!
//! The enumerated option types edited by the preferences dialog, the
//! `DockSettings` aggregate the owning applet seeds and reads back, the
//! theme resolver, and the numeric conversions shared between the dialog
//! and the applet.
//!
//! Each combo-backed enum carries an ordered `OPTIONS` table plus
//! `index`/`from_index`, so widget state maps to domain values by position
//! rather than by display label. Unknown indices resolve to a fixed
//! fallback variant instead of failing.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    APP_SPACING_MAX, DEFAULT_FALLBACK_BAR_COLOR, FIXED_ICON_COUNT_MAX, FIXED_ICON_COUNT_MIN,
};

/// Named appearance bundle selecting an (indicator, background) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeType {
    #[default]
    Default,
    Unity,
    UnityFlat,
    Subway,
    Custom,
}

impl ThemeType {
    /// Combo options in display order
    pub const OPTIONS: [ThemeType; 5] = [
        ThemeType::Default,
        ThemeType::Unity,
        ThemeType::UnityFlat,
        ThemeType::Subway,
        ThemeType::Custom,
    ];

    /// Display label for UI
    pub fn label(self) -> &'static str {
        match self {
            ThemeType::Default => "Default",
            ThemeType::Unity => "Unity",
            ThemeType::UnityFlat => "Unity Flat",
            ThemeType::Subway => "Subway",
            ThemeType::Custom => "Custom",
        }
    }

    /// Combo labels in display order
    pub fn labels() -> [&'static str; 5] {
        Self::OPTIONS.map(Self::label)
    }

    /// Position of this variant in [`Self::OPTIONS`]
    pub fn index(self) -> u32 {
        Self::OPTIONS.iter().position(|t| *t == self).unwrap_or(0) as u32
    }

    /// Variant at a combo index; out-of-range selections read as Custom
    pub fn from_index(index: u32) -> Self {
        Self::OPTIONS
            .get(index as usize)
            .copied()
            .unwrap_or(ThemeType::Custom)
    }
}

/// Visual marker style denoting an app's running-window state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorType {
    #[default]
    Light,
    Dark,
    Bar,
    Circle,
    Square,
    Triangle,
    Diamond,
    Subway,
    None,
}

impl IndicatorType {
    /// Combo options in display order
    pub const OPTIONS: [IndicatorType; 9] = [
        IndicatorType::Light,
        IndicatorType::Dark,
        IndicatorType::Bar,
        IndicatorType::Circle,
        IndicatorType::Square,
        IndicatorType::Triangle,
        IndicatorType::Diamond,
        IndicatorType::Subway,
        IndicatorType::None,
    ];

    /// Display label for UI
    pub fn label(self) -> &'static str {
        match self {
            IndicatorType::Light => "Default light",
            IndicatorType::Dark => "Default dark",
            IndicatorType::Bar => "Single bar",
            IndicatorType::Circle => "Circle",
            IndicatorType::Square => "Square",
            IndicatorType::Triangle => "Triangle",
            IndicatorType::Diamond => "Diamond",
            IndicatorType::Subway => "Subway",
            IndicatorType::None => "None",
        }
    }

    /// Combo labels in display order
    pub fn labels() -> [&'static str; 9] {
        Self::OPTIONS.map(Self::label)
    }

    /// Position of this variant in [`Self::OPTIONS`]
    pub fn index(self) -> u32 {
        Self::OPTIONS.iter().position(|i| *i == self).unwrap_or(0) as u32
    }

    /// Variant at a combo index; out-of-range selections read as None
    pub fn from_index(index: u32) -> Self {
        Self::OPTIONS
            .get(index as usize)
            .copied()
            .unwrap_or(IndicatorType::None)
    }
}

/// Background drawn behind a running app's icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconBgType {
    #[default]
    Gradient,
    AlphaFill,
    Unity,
    UnityFlat,
}

impl IconBgType {
    /// Combo options in display order
    pub const OPTIONS: [IconBgType; 4] = [
        IconBgType::Gradient,
        IconBgType::AlphaFill,
        IconBgType::Unity,
        IconBgType::UnityFlat,
    ];

    /// Display label for UI
    pub fn label(self) -> &'static str {
        match self {
            IconBgType::Gradient => "Gradient fill",
            IconBgType::AlphaFill => "Solid fill",
            IconBgType::Unity => "Unity",
            IconBgType::UnityFlat => "Unity Flat",
        }
    }

    /// Combo labels in display order
    pub fn labels() -> [&'static str; 4] {
        Self::OPTIONS.map(Self::label)
    }

    /// Position of this variant in [`Self::OPTIONS`]
    pub fn index(self) -> u32 {
        Self::OPTIONS.iter().position(|b| *b == self).unwrap_or(0) as u32
    }

    /// Variant at a combo index; out-of-range selections read as Unity Flat
    pub fn from_index(index: u32) -> Self {
        Self::OPTIONS
            .get(index as usize)
            .copied()
            .unwrap_or(IconBgType::UnityFlat)
    }

    /// Whether this background gets a shine overlay after the icon is drawn
    pub fn has_shine(self) -> bool {
        matches!(self, IconBgType::Unity | IconBgType::UnityFlat)
    }
}

/// What left-clicking a running app's dock icon does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClickActionType {
    #[default]
    WindowList,
    CompizSpread,
    MinMax,
}

/// How a docked app signals that it needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttentionType {
    #[default]
    Blink,
    ShowBadge,
}

/// Dock sizing policy
///
/// `ForcedVariable` is imposed by an external panel layout (the Mutiny
/// layout); while it is in effect the fixed-size controls are permanently
/// non-interactive and the dock always reports variable sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DockSizeMode {
    #[default]
    Variable,
    Fixed,
    ForcedVariable,
}

/// Map a theme to its (indicator, background) pair
///
/// Custom returns None: the current indicator and background are kept and
/// their edit controls become user-editable.
pub fn resolve_theme(theme: ThemeType) -> Option<(IndicatorType, IconBgType)> {
    match theme {
        ThemeType::Default => Some((IndicatorType::Light, IconBgType::Gradient)),
        ThemeType::Unity => Some((IndicatorType::Triangle, IconBgType::Unity)),
        ThemeType::UnityFlat => Some((IndicatorType::Triangle, IconBgType::UnityFlat)),
        ThemeType::Subway => Some((IndicatorType::Subway, IconBgType::AlphaFill)),
        ThemeType::Custom => None,
    }
}

/// Every value editable through the preferences dialog
///
/// The owning applet is the source of truth: it seeds the dialog from this
/// aggregate, and reads a fresh copy back when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockSettings {
    pub theme: ThemeType,
    pub indicator: IndicatorType,
    /// Display an indicator per open window (max 4) instead of one
    pub multi_ind: bool,
    pub icon_bg: IconBgType,
    /// Pinned app icons appear on all workspaces, not just the pin workspace
    pub pinned_on_all_workspaces: bool,
    /// Unpinned app icons appear for apps on all workspaces
    pub unpinned_on_all_workspaces: bool,
    /// Indicators and window-list entries cover the current workspace only
    pub current_workspace_only: bool,
    pub click_action: ClickActionType,
    /// Recolour the MATE panel to match the wallpaper's dominant colour
    pub change_panel_color: bool,
    /// Restrict panel recolouring to the panel containing the dock
    pub change_dock_color_only: bool,
    pub dock_size: DockSizeMode,
    /// App icon capacity when `dock_size` is Fixed
    pub fixed_icon_count: u32,
    /// Suppress the popup action list; show app actions on the panel menu
    pub panel_actions_only: bool,
    /// Bar indicator colour when the GTK theme colour cannot be determined
    pub fallback_bar_color: [u8; 3],
    /// Pixels between app icons, 0..=7
    pub app_spacing: u32,
    pub attention: AttentionType,
    /// Window-list popup delay in milliseconds, 100..=5000
    pub popup_delay_ms: u32,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            theme: ThemeType::Default,
            indicator: IndicatorType::Light,
            multi_ind: false,
            icon_bg: IconBgType::Gradient,
            pinned_on_all_workspaces: true,
            unpinned_on_all_workspaces: true,
            current_workspace_only: false,
            click_action: ClickActionType::WindowList,
            change_panel_color: false,
            change_dock_color_only: false,
            dock_size: DockSizeMode::Variable,
            fixed_icon_count: 10,
            panel_actions_only: false,
            fallback_bar_color: DEFAULT_FALLBACK_BAR_COLOR,
            app_spacing: 0,
            attention: AttentionType::Blink,
            popup_delay_ms: 1000,
        }
    }
}

/// Popup delay as the seconds value shown in the dialog's spin button
pub fn popup_delay_secs(delay_ms: u32) -> f64 {
    f64::from(delay_ms) / 1000.0
}

/// Popup delay in milliseconds from the spin button's seconds value,
/// rounded to the nearest 100ms to match the 0.1s edit granularity
pub fn popup_delay_ms(secs: f64) -> u32 {
    ((secs * 10.0).round().max(0.0) as u32) * 100
}

/// Clamp an app spacing value to the configurable range
pub fn clamp_app_spacing(spacing: u32) -> u32 {
    spacing.min(APP_SPACING_MAX)
}

/// Clamp a fixed-dock icon count to the configurable range
pub fn clamp_fixed_icon_count(count: u32) -> u32 {
    count.clamp(FIXED_ICON_COUNT_MIN, FIXED_ICON_COUNT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{POPUP_DELAY_MAX_MS, POPUP_DELAY_MIN_MS};

    #[test]
    fn test_theme_resolver_table() {
        assert_eq!(
            resolve_theme(ThemeType::Default),
            Some((IndicatorType::Light, IconBgType::Gradient))
        );
        assert_eq!(
            resolve_theme(ThemeType::Unity),
            Some((IndicatorType::Triangle, IconBgType::Unity))
        );
        assert_eq!(
            resolve_theme(ThemeType::UnityFlat),
            Some((IndicatorType::Triangle, IconBgType::UnityFlat))
        );
        assert_eq!(
            resolve_theme(ThemeType::Subway),
            Some((IndicatorType::Subway, IconBgType::AlphaFill))
        );
        assert_eq!(resolve_theme(ThemeType::Custom), None);
    }

    #[test]
    fn test_combo_index_round_trip() {
        for theme in ThemeType::OPTIONS {
            assert_eq!(ThemeType::from_index(theme.index()), theme);
        }
        for ind in IndicatorType::OPTIONS {
            assert_eq!(IndicatorType::from_index(ind.index()), ind);
        }
        for bg in IconBgType::OPTIONS {
            assert_eq!(IconBgType::from_index(bg.index()), bg);
        }
    }

    #[test]
    fn test_unknown_index_falls_back() {
        assert_eq!(ThemeType::from_index(99), ThemeType::Custom);
        assert_eq!(IndicatorType::from_index(99), IndicatorType::None);
        assert_eq!(IconBgType::from_index(99), IconBgType::UnityFlat);
    }

    #[test]
    fn test_labels_match_option_order() {
        assert_eq!(ThemeType::labels()[2], "Unity Flat");
        assert_eq!(IndicatorType::labels()[0], "Default light");
        assert_eq!(IndicatorType::labels()[8], "None");
        assert_eq!(IconBgType::labels()[1], "Solid fill");
    }

    #[test]
    fn test_popup_delay_round_trip() {
        let mut delay = POPUP_DELAY_MIN_MS;
        while delay <= POPUP_DELAY_MAX_MS {
            assert_eq!(popup_delay_ms(popup_delay_secs(delay)), delay);
            delay += 100;
        }
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_app_spacing(3), 3);
        assert_eq!(clamp_app_spacing(99), APP_SPACING_MAX);
        assert_eq!(clamp_fixed_icon_count(0), FIXED_ICON_COUNT_MIN);
        assert_eq!(clamp_fixed_icon_count(10), 10);
        assert_eq!(clamp_fixed_icon_count(1000), FIXED_ICON_COUNT_MAX);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = DockSettings {
            theme: ThemeType::Subway,
            indicator: IndicatorType::Subway,
            icon_bg: IconBgType::AlphaFill,
            dock_size: DockSizeMode::ForcedVariable,
            ..DockSettings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"theme\":\"subway\""));
        assert!(json.contains("\"dock_size\":\"forced_variable\""));

        let deserialized: DockSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, settings);
    }
}
