//! Preferences dialog for the dock applet
//!
//! Owns the widget tree and exposes the accessor surface the applet uses
//! to seed and read back settings. The dialog never destroys itself: the
//! window-manager close request and the Cancel button both hide it, and
//! Ok invokes the caller's confirm callback with no payload — the applet
//! pulls the final values through the accessors afterwards.

use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, CheckButton, ColorDialog, ColorDialogButton, DrawingArea, DropDown,
    Frame, Label, Notebook, Orientation, SpinButton, StringList, TextView, Window, WrapMode,
};
use log::warn;
use std::cell::Cell;
use std::rc::Rc;

use crate::core::constants::{
    APP_SPACING_MAX, FIXED_ICON_COUNT_MAX, FIXED_ICON_COUNT_MIN, POPUP_DELAY_MAX_MS,
    POPUP_DELAY_MIN_MS, POPUP_DELAY_STEP_SECS,
};
use crate::core::settings::{
    clamp_app_spacing, clamp_fixed_icon_count, popup_delay_ms, popup_delay_secs, resolve_theme,
    AttentionType, ClickActionType, DockSettings, DockSizeMode, IconBgType, IndicatorType,
    ThemeType,
};
use crate::render::color::Color;
use crate::render::indicator::theme_bar_color;
use crate::render::preview::{render_preview, PreviewSource};

/// Fixed-size dock controls grouped for sensitivity handling
struct DockSizeControls {
    frame: Frame,
    rb_variable: CheckButton,
    rb_fixed: CheckButton,
    lbl_prefix: Label,
    spin: SpinButton,
    lbl_suffix: Label,
}

/// The preferences window and its accessor surface
pub struct PrefsDialog {
    window: Window,
    preview: DrawingArea,
    cbt_theme: DropDown,
    cbt_indicator: DropDown,
    cbt_icon_bg: DropDown,
    cb_multi_ind: CheckButton,
    rb_pinned_all_ws: CheckButton,
    rb_pinned_pin_ws: CheckButton,
    rb_unpinned_all_ws: CheckButton,
    rb_unpinned_cur_ws: CheckButton,
    cb_win_cur_ws: CheckButton,
    rb_win_list: CheckButton,
    rb_win_thumb: CheckButton,
    rb_win_minmax: CheckButton,
    sb_app_spacing: SpinButton,
    cb_panel_color_change: CheckButton,
    cb_dock_panel_only: CheckButton,
    dock_size: DockSizeControls,
    forced_variable: Rc<Cell<bool>>,
    cb_panel_actions: CheckButton,
    btn_fallback_col: ColorDialogButton,
    rb_attention_blink: CheckButton,
    rb_attention_badge: CheckButton,
    sb_popup_delay: SpinButton,
}

impl PrefsDialog {
    /// Build the dialog, seed it with defaults and show it
    ///
    /// `source` supplies the reference icon, highlight colour and icon cell
    /// size for the appearance preview; `on_confirm` runs when the user
    /// presses Ok. Hiding after confirm is the caller's decision.
    pub fn new<F: Fn() + 'static>(source: PreviewSource, on_confirm: F) -> Self {
        let window = Window::builder().title("Preferences").build();
        window.set_hide_on_close(true);

        let vbox = GtkBox::new(Orientation::Vertical, 2);
        vbox.set_margin_start(6);
        vbox.set_margin_end(6);
        vbox.set_margin_top(6);
        vbox.set_margin_bottom(6);

        let notebook = Notebook::new();
        notebook.set_vexpand(true);

        let (appearance_page, preview, cbt_theme, cbt_indicator, cbt_icon_bg, cb_multi_ind) =
            Self::build_appearance_page(&source);
        notebook.append_page(&appearance_page, Some(&Label::new(Some("Appearance"))));

        let (
            workspaces_page,
            rb_pinned_all_ws,
            rb_pinned_pin_ws,
            rb_unpinned_all_ws,
            rb_unpinned_cur_ws,
            cb_win_cur_ws,
        ) = Self::build_workspaces_page();
        notebook.append_page(&workspaces_page, Some(&Label::new(Some("Workspaces"))));

        let (behaviour_page, rb_win_list, rb_win_thumb, rb_win_minmax) =
            Self::build_behaviour_page();
        notebook.append_page(&behaviour_page, Some(&Label::new(Some("Behaviour"))));

        let (
            panel_page,
            sb_app_spacing,
            cb_panel_color_change,
            cb_dock_panel_only,
            dock_size,
            cb_panel_actions,
        ) = Self::build_panel_page();
        notebook.append_page(&panel_page, Some(&Label::new(Some("Panel Options"))));

        let (misc_page, btn_fallback_col, rb_attention_blink, rb_attention_badge, sb_popup_delay) =
            Self::build_misc_page();
        notebook.append_page(&misc_page, Some(&Label::new(Some("Misc"))));

        vbox.append(&notebook);

        // Ok / Cancel
        let button_box = GtkBox::new(Orientation::Horizontal, 4);
        button_box.set_halign(gtk4::Align::End);
        button_box.set_margin_top(6);

        let ok_button = Button::with_label("Ok");
        ok_button.add_css_class("suggested-action");
        let cancel_button = Button::with_label("Cancel");

        ok_button.connect_clicked(move |_| {
            on_confirm();
        });

        let window_clone = window.clone();
        cancel_button.connect_clicked(move |_| {
            window_clone.set_visible(false);
        });

        button_box.append(&ok_button);
        button_box.append(&cancel_button);
        vbox.append(&button_box);

        // theme selection drives the indicator/background combos before any
        // preview redraw
        {
            let ind_dd = cbt_indicator.clone();
            let bg_dd = cbt_icon_bg.clone();
            let preview_clone = preview.clone();
            cbt_theme.connect_selected_notify(move |dd| {
                Self::apply_theme_selection(dd, &ind_dd, &bg_dd);
                preview_clone.queue_draw();
            });
        }

        // appearance changes redraw the preview; nothing else does
        {
            let preview_clone = preview.clone();
            cbt_indicator.connect_selected_notify(move |_| preview_clone.queue_draw());
        }
        {
            let preview_clone = preview.clone();
            cbt_icon_bg.connect_selected_notify(move |_| preview_clone.queue_draw());
        }
        {
            let preview_clone = preview.clone();
            cb_multi_ind.connect_toggled(move |_| preview_clone.queue_draw());
        }

        // the dock-panel-only option is meaningful only while panel
        // recolouring is on
        {
            let dock_only = cb_dock_panel_only.clone();
            cb_panel_color_change.connect_toggled(move |check| {
                dock_only.set_sensitive(check.is_active());
            });
        }
        cb_dock_panel_only.set_sensitive(cb_panel_color_change.is_active());

        let forced_variable = Rc::new(Cell::new(false));
        {
            let forced = forced_variable.clone();
            let lbl_prefix = dock_size.lbl_prefix.clone();
            let spin = dock_size.spin.clone();
            let lbl_suffix = dock_size.lbl_suffix.clone();
            dock_size.rb_fixed.connect_toggled(move |rb| {
                let editable = rb.is_active() && !forced.get();
                lbl_prefix.set_sensitive(editable);
                spin.set_sensitive(editable);
                lbl_suffix.set_sensitive(editable);
            });
        }

        {
            let cbt_indicator = cbt_indicator.clone();
            let cbt_icon_bg = cbt_icon_bg.clone();
            let cb_multi_ind = cb_multi_ind.clone();
            let btn_fallback_col = btn_fallback_col.clone();
            preview.set_draw_func(move |area, cr, _width, _height| {
                let settings = DockSettings {
                    indicator: IndicatorType::from_index(cbt_indicator.selected()),
                    icon_bg: IconBgType::from_index(cbt_icon_bg.selected()),
                    multi_ind: cb_multi_ind.is_active(),
                    ..DockSettings::default()
                };
                let fallback = Color::from_gdk_rgba(&btn_fallback_col.rgba());
                let bar_color = theme_bar_color(area).unwrap_or(fallback);
                if let Err(e) = render_preview(cr, &settings, &source, bar_color) {
                    warn!("Failed to render appearance preview: {}", e);
                }
            });
        }

        window.set_child(Some(&vbox));

        let dialog = Self {
            window,
            preview,
            cbt_theme,
            cbt_indicator,
            cbt_icon_bg,
            cb_multi_ind,
            rb_pinned_all_ws,
            rb_pinned_pin_ws,
            rb_unpinned_all_ws,
            rb_unpinned_cur_ws,
            cb_win_cur_ws,
            rb_win_list,
            rb_win_thumb,
            rb_win_minmax,
            sb_app_spacing,
            cb_panel_color_change,
            cb_dock_panel_only,
            dock_size,
            forced_variable,
            cb_panel_actions,
            btn_fallback_col,
            rb_attention_blink,
            rb_attention_badge,
            sb_popup_delay,
        };

        dialog.set_settings(&DockSettings::default());
        dialog.window.present();
        dialog
    }

    fn build_appearance_page(
        source: &PreviewSource,
    ) -> (GtkBox, DrawingArea, DropDown, DropDown, DropDown, CheckButton) {
        let page = GtkBox::new(Orientation::Vertical, 4);

        let frame_preview = create_frame("Preview");
        let preview = DrawingArea::new();
        preview.set_content_width(source.canvas_width());
        preview.set_content_height(source.icon_size);
        preview.set_halign(gtk4::Align::Start);
        frame_preview.set_child(Some(&indented(&preview)));
        page.append(&frame_preview);

        let frame_theme = create_frame("Theme");
        let cbt_theme = create_dropdown(&ThemeType::labels());
        frame_theme.set_child(Some(&indented(&cbt_theme)));
        page.append(&frame_theme);

        let frame_indicator = create_frame("Indicator Type");
        let cbt_indicator = create_dropdown(&IndicatorType::labels());
        frame_indicator.set_child(Some(&indented(&cbt_indicator)));
        page.append(&frame_indicator);

        let cb_multi_ind = CheckButton::with_label("Display an indicator for each open window");
        cb_multi_ind.set_tooltip_text(Some("Display an indicator (max 4) for each open window"));
        cb_multi_ind.set_margin_start(4);
        page.append(&cb_multi_ind);

        let frame_bg = create_frame("Icon Background");
        let cbt_icon_bg = create_dropdown(&IconBgType::labels());
        frame_bg.set_child(Some(&indented(&cbt_icon_bg)));
        page.append(&frame_bg);

        (page, preview, cbt_theme, cbt_indicator, cbt_icon_bg, cb_multi_ind)
    }

    fn build_workspaces_page() -> (
        GtkBox,
        CheckButton,
        CheckButton,
        CheckButton,
        CheckButton,
        CheckButton,
    ) {
        let page = GtkBox::new(Orientation::Vertical, 4);

        let frame_pinned = create_frame("Pinned application dock icons");
        let rb_pinned_all_ws = CheckButton::with_label("Display on all workspaces");
        let rb_pinned_pin_ws =
            CheckButton::with_label("Display only on the workspace the app was pinned");
        rb_pinned_pin_ws.set_group(Some(&rb_pinned_all_ws));
        frame_pinned.set_child(Some(&indented(&radio_column(&[
            &rb_pinned_all_ws,
            &rb_pinned_pin_ws,
        ]))));
        page.append(&frame_pinned);

        let frame_unpinned = create_frame("Unpinned application dock icons");
        let rb_unpinned_all_ws =
            CheckButton::with_label("Display unpinned apps from all workspaces");
        let rb_unpinned_cur_ws =
            CheckButton::with_label("Display unpinned apps only from current workspace");
        rb_unpinned_cur_ws.set_group(Some(&rb_unpinned_all_ws));
        frame_unpinned.set_child(Some(&indented(&radio_column(&[
            &rb_unpinned_all_ws,
            &rb_unpinned_cur_ws,
        ]))));
        page.append(&frame_unpinned);

        let cb_win_cur_ws = CheckButton::with_label(
            "Display indicators/window list items for current workspace only",
        );
        cb_win_cur_ws.set_margin_start(4);
        page.append(&cb_win_cur_ws);

        let notes = create_note(
            "Note: when displaying pinned apps only on the workspace where they were \
             created, it is a good idea to also select the 'Display unpinned apps' and \
             'Display indicators/window list' items for the current workspace only options.",
        );
        page.append(&notes);

        (
            page,
            rb_pinned_all_ws,
            rb_pinned_pin_ws,
            rb_unpinned_all_ws,
            rb_unpinned_cur_ws,
            cb_win_cur_ws,
        )
    }

    fn build_behaviour_page() -> (GtkBox, CheckButton, CheckButton, CheckButton) {
        let page = GtkBox::new(Orientation::Vertical, 4);

        let frame = create_frame("Left clicking a running app's icon will:");
        let rb_win_list = CheckButton::with_label("Display a list of the app's windows");
        let rb_win_thumb =
            CheckButton::with_label("Show thumbnail previews of the app's windows");
        rb_win_thumb.set_group(Some(&rb_win_list));
        let rb_win_minmax =
            CheckButton::with_label("Minimize/restore all of the app's windows");
        rb_win_minmax.set_group(Some(&rb_win_list));
        frame.set_child(Some(&indented(&radio_column(&[
            &rb_win_list,
            &rb_win_thumb,
            &rb_win_minmax,
        ]))));
        page.append(&frame);

        let notes = create_note(
            "Notes:\nIf an app has only a single window open, a window list will not be \
             displayed. Instead the window will be minimized/restored.\n\
             Window thumbnail previews require Compiz",
        );
        page.append(&notes);

        (page, rb_win_list, rb_win_thumb, rb_win_minmax)
    }

    fn build_panel_page() -> (
        GtkBox,
        SpinButton,
        CheckButton,
        CheckButton,
        DockSizeControls,
        CheckButton,
    ) {
        let page = GtkBox::new(Orientation::Vertical, 4);

        let frame_spacing = create_frame("App spacing");
        let sb_app_spacing = SpinButton::with_range(0.0, f64::from(APP_SPACING_MAX), 1.0);
        sb_app_spacing.set_numeric(true);
        sb_app_spacing.set_snap_to_ticks(true);
        sb_app_spacing.set_halign(gtk4::Align::Start);
        frame_spacing.set_child(Some(&indented(&sb_app_spacing)));
        page.append(&frame_spacing);

        let frame_color = create_frame("Panel colour");
        let cb_panel_color_change =
            CheckButton::with_label("Change panel colour to match wallpaper");
        let cb_dock_panel_only = CheckButton::with_label("Change colour of dock's panel only");
        frame_color.set_child(Some(&indented(&radio_column(&[
            &cb_panel_color_change,
            &cb_dock_panel_only,
        ]))));
        page.append(&frame_color);

        let frame_dock_size = create_frame("Dock size");
        let rb_variable =
            CheckButton::with_label("Variable - expand or contract as necessary");
        let rb_fixed = CheckButton::with_label("Fixed");
        rb_fixed.set_group(Some(&rb_variable));

        let lbl_prefix = Label::new(Some("Display up to "));
        let spin = SpinButton::with_range(
            f64::from(FIXED_ICON_COUNT_MIN),
            f64::from(FIXED_ICON_COUNT_MAX),
            1.0,
        );
        spin.set_numeric(true);
        spin.set_snap_to_ticks(true);
        let lbl_suffix = Label::new(Some(" app icons"));

        let count_row = GtkBox::new(Orientation::Horizontal, 2);
        count_row.append(&lbl_prefix);
        count_row.append(&spin);
        count_row.append(&lbl_suffix);

        let size_column = GtkBox::new(Orientation::Vertical, 2);
        size_column.append(&rb_variable);
        size_column.append(&rb_fixed);
        size_column.append(&count_row);
        frame_dock_size.set_child(Some(&indented(&size_column)));
        page.append(&frame_dock_size);

        let cb_panel_actions = CheckButton::with_label(
            "Disable popup action list and show app actions\non panel right click menu only",
        );
        cb_panel_actions.set_margin_start(4);
        page.append(&cb_panel_actions);

        let dock_size = DockSizeControls {
            frame: frame_dock_size,
            rb_variable,
            rb_fixed,
            lbl_prefix,
            spin,
            lbl_suffix,
        };

        (
            page,
            sb_app_spacing,
            cb_panel_color_change,
            cb_dock_panel_only,
            dock_size,
            cb_panel_actions,
        )
    }

    fn build_misc_page() -> (GtkBox, ColorDialogButton, CheckButton, CheckButton, SpinButton) {
        let page = GtkBox::new(Orientation::Vertical, 4);

        let frame_color = create_frame("Fallback bar indicator colour");
        let color_row = GtkBox::new(Orientation::Horizontal, 4);
        color_row.append(&Label::new(Some("Colour")));

        let color_dialog = ColorDialog::builder().with_alpha(false).build();
        let btn_fallback_col = ColorDialogButton::new(Some(color_dialog));
        btn_fallback_col.set_tooltip_text(Some(
            "Colour used for drawing bar indicators when the theme colour cannot be determined",
        ));
        color_row.append(&btn_fallback_col);
        frame_color.set_child(Some(&indented(&color_row)));
        page.append(&frame_color);

        let frame_attention = create_frame("Action when apps need attention");
        let rb_attention_blink = CheckButton::with_label("Blink the app icon");
        let rb_attention_badge = CheckButton::with_label("Show a badge on the app icon");
        rb_attention_badge.set_group(Some(&rb_attention_blink));
        frame_attention.set_child(Some(&indented(&radio_column(&[
            &rb_attention_blink,
            &rb_attention_badge,
        ]))));
        page.append(&frame_attention);

        let frame_delay = create_frame("Popup Delay(s)");
        let sb_popup_delay = SpinButton::with_range(
            popup_delay_secs(POPUP_DELAY_MIN_MS),
            popup_delay_secs(POPUP_DELAY_MAX_MS),
            POPUP_DELAY_STEP_SECS,
        );
        sb_popup_delay.set_digits(1);
        sb_popup_delay.set_numeric(true);
        sb_popup_delay.set_snap_to_ticks(true);
        sb_popup_delay.set_halign(gtk4::Align::Start);
        frame_delay.set_child(Some(&indented(&sb_popup_delay)));
        page.append(&frame_delay);

        (
            page,
            btn_fallback_col,
            rb_attention_blink,
            rb_attention_badge,
            sb_popup_delay,
        )
    }

    /// Apply the theme's (indicator, background) pair and combo sensitivity
    fn apply_theme_selection(theme_dd: &DropDown, ind_dd: &DropDown, bg_dd: &DropDown) {
        let theme = ThemeType::from_index(theme_dd.selected());
        match resolve_theme(theme) {
            Some((indicator, bg)) => {
                ind_dd.set_selected(indicator.index());
                bg_dd.set_selected(bg.index());
                ind_dd.set_sensitive(false);
                bg_dd.set_sensitive(false);
            }
            None => {
                ind_dd.set_sensitive(true);
                bg_dd.set_sensitive(true);
            }
        }
    }

    /// The selected theme
    pub fn theme(&self) -> ThemeType {
        ThemeType::from_index(self.cbt_theme.selected())
    }

    /// Select a theme; non-Custom themes overwrite the indicator and
    /// background and lock their combos
    pub fn set_theme(&self, theme: ThemeType) {
        self.cbt_theme.set_selected(theme.index());
        // re-apply even when the index did not change, so a programmatic
        // indicator/background override is corrected
        Self::apply_theme_selection(&self.cbt_theme, &self.cbt_indicator, &self.cbt_icon_bg);
        self.preview.queue_draw();
    }

    /// The selected indicator type
    pub fn indicator_type(&self) -> IndicatorType {
        IndicatorType::from_index(self.cbt_indicator.selected())
    }

    pub fn set_indicator_type(&self, indicator: IndicatorType) {
        self.cbt_indicator.set_selected(indicator.index());
    }

    /// The selected icon background type
    pub fn icon_bg(&self) -> IconBgType {
        IconBgType::from_index(self.cbt_icon_bg.selected())
    }

    pub fn set_icon_bg(&self, bg: IconBgType) {
        self.cbt_icon_bg.set_selected(bg.index());
    }

    /// Whether an indicator is shown per open window
    pub fn multi_ind(&self) -> bool {
        self.cb_multi_ind.is_active()
    }

    pub fn set_multi_ind(&self, multi: bool) {
        self.cb_multi_ind.set_active(multi);
    }

    /// Whether pinned apps are displayed on all workspaces
    pub fn show_pinned_apps_on_all_ws(&self) -> bool {
        self.rb_pinned_all_ws.is_active()
    }

    pub fn set_show_pinned_apps_on_all_ws(&self, show_on_all: bool) {
        if show_on_all {
            self.rb_pinned_all_ws.set_active(true);
        } else {
            self.rb_pinned_pin_ws.set_active(true);
        }
    }

    /// Whether unpinned apps are displayed on all workspaces
    pub fn show_unpinned_apps_on_all_ws(&self) -> bool {
        self.rb_unpinned_all_ws.is_active()
    }

    pub fn set_show_unpinned_apps_on_all_ws(&self, show_on_all: bool) {
        if show_on_all {
            self.rb_unpinned_all_ws.set_active(true);
        } else {
            self.rb_unpinned_cur_ws.set_active(true);
        }
    }

    /// Whether indicators and window lists cover the current workspace only
    pub fn win_cur_ws_only(&self) -> bool {
        self.cb_win_cur_ws.is_active()
    }

    pub fn set_win_cur_ws_only(&self, current_only: bool) {
        self.cb_win_cur_ws.set_active(current_only);
    }

    /// The action for left-clicking a running app's icon
    pub fn click_action(&self) -> ClickActionType {
        if self.rb_win_list.is_active() {
            ClickActionType::WindowList
        } else if self.rb_win_thumb.is_active() {
            ClickActionType::CompizSpread
        } else {
            ClickActionType::MinMax
        }
    }

    pub fn set_click_action(&self, action: ClickActionType) {
        match action {
            ClickActionType::WindowList => self.rb_win_list.set_active(true),
            ClickActionType::CompizSpread => self.rb_win_thumb.set_active(true),
            ClickActionType::MinMax => self.rb_win_minmax.set_active(true),
        }
    }

    /// Whether the panel colour follows the wallpaper
    pub fn change_panel_color(&self) -> bool {
        self.cb_panel_color_change.is_active()
    }

    pub fn set_change_panel_color(&self, change: bool) {
        self.cb_panel_color_change.set_active(change);
        self.cb_dock_panel_only.set_sensitive(change);
    }

    /// Whether recolouring is limited to the dock's own panel
    pub fn change_dock_color_only(&self) -> bool {
        self.cb_dock_panel_only.is_active()
    }

    pub fn set_change_dock_color_only(&self, dock_only: bool) {
        self.cb_dock_panel_only.set_active(dock_only);
    }

    /// Whether app actions appear only on the panel right-click menu
    pub fn panel_actions_only(&self) -> bool {
        self.cb_panel_actions.is_active()
    }

    pub fn set_panel_actions_only(&self, panel_only: bool) {
        self.cb_panel_actions.set_active(panel_only);
    }

    /// Fallback bar indicator colour as 0-255 RGB
    pub fn fallback_bar_col(&self) -> [u8; 3] {
        Color::from_gdk_rgba(&self.btn_fallback_col.rgba()).to_rgb8()
    }

    pub fn set_fallback_bar_col(&self, rgb: [u8; 3]) {
        self.btn_fallback_col
            .set_rgba(&Color::from_rgb8(rgb).to_gdk_rgba());
    }

    /// Spacing between dock icons, in pixels
    pub fn app_spacing(&self) -> u32 {
        self.sb_app_spacing.update();
        self.sb_app_spacing.value() as u32
    }

    pub fn set_app_spacing(&self, spacing: u32) {
        self.sb_app_spacing
            .set_value(f64::from(clamp_app_spacing(spacing)));
    }

    /// How apps signal that they need attention
    pub fn attention_type(&self) -> AttentionType {
        if self.rb_attention_blink.is_active() {
            AttentionType::Blink
        } else {
            AttentionType::ShowBadge
        }
    }

    pub fn set_attention_type(&self, attention: AttentionType) {
        match attention {
            AttentionType::Blink => self.rb_attention_blink.set_active(true),
            AttentionType::ShowBadge => self.rb_attention_badge.set_active(true),
        }
    }

    /// Popup delay in milliseconds
    pub fn popup_delay(&self) -> u32 {
        self.sb_popup_delay.update();
        popup_delay_ms(self.sb_popup_delay.value())
    }

    pub fn set_popup_delay(&self, delay_ms: u32) {
        self.sb_popup_delay.set_value(popup_delay_secs(delay_ms));
    }

    /// Configure dock sizing
    ///
    /// With `forced_variable` the panel layout imposes variable sizing: the
    /// whole control group becomes non-interactive and stays that way until
    /// a later call clears the override.
    pub fn set_fixed_size(&self, fixed_size: bool, num_icons: u32, forced_variable: bool) {
        let ds = &self.dock_size;
        self.forced_variable.set(forced_variable);

        if forced_variable {
            ds.rb_variable.set_active(true);
            ds.rb_variable.set_sensitive(false);
            ds.rb_fixed.set_sensitive(false);
            ds.lbl_prefix.set_sensitive(false);
            ds.spin.set_sensitive(false);
            ds.lbl_suffix.set_sensitive(false);
        } else {
            ds.rb_variable.set_sensitive(true);
            ds.rb_fixed.set_sensitive(true);
            ds.spin
                .set_value(f64::from(clamp_fixed_icon_count(num_icons)));
            if fixed_size {
                ds.rb_fixed.set_active(true);
            } else {
                ds.rb_variable.set_active(true);
            }
            let editable = ds.rb_fixed.is_active();
            ds.lbl_prefix.set_sensitive(editable);
            ds.spin.set_sensitive(editable);
            ds.lbl_suffix.set_sensitive(editable);
        }
    }

    /// Dock sizing as (is fixed, icon count); always variable while the
    /// forced override is in effect
    pub fn fixed_size(&self) -> (bool, u32) {
        let ds = &self.dock_size;
        ds.spin.update();
        let fixed = !self.forced_variable.get() && ds.rb_fixed.is_active();
        (fixed, ds.spin.value() as u32)
    }

    /// Show or hide the whole dock size control group
    pub fn set_dock_size_visible(&self, visible: bool) {
        self.dock_size.frame.set_visible(visible);
    }

    /// Whether the fixed-size controls accept input
    pub fn fixed_size_interactive(&self) -> bool {
        self.dock_size.rb_fixed.is_sensitive()
    }

    /// Seed every control from a settings aggregate
    ///
    /// The indicator and background are applied before the theme so that a
    /// non-Custom theme establishes its own pair, matching the resolver
    /// invariant.
    pub fn set_settings(&self, settings: &DockSettings) {
        self.set_indicator_type(settings.indicator);
        self.set_icon_bg(settings.icon_bg);
        self.set_multi_ind(settings.multi_ind);
        self.set_theme(settings.theme);
        self.set_show_pinned_apps_on_all_ws(settings.pinned_on_all_workspaces);
        self.set_show_unpinned_apps_on_all_ws(settings.unpinned_on_all_workspaces);
        self.set_win_cur_ws_only(settings.current_workspace_only);
        self.set_click_action(settings.click_action);
        self.set_change_panel_color(settings.change_panel_color);
        self.set_change_dock_color_only(settings.change_dock_color_only);
        self.set_fixed_size(
            settings.dock_size == DockSizeMode::Fixed,
            settings.fixed_icon_count,
            settings.dock_size == DockSizeMode::ForcedVariable,
        );
        self.set_panel_actions_only(settings.panel_actions_only);
        self.set_fallback_bar_col(settings.fallback_bar_color);
        self.set_app_spacing(settings.app_spacing);
        self.set_attention_type(settings.attention);
        self.set_popup_delay(settings.popup_delay_ms);
    }

    /// Read every control back into a settings aggregate
    pub fn settings(&self) -> DockSettings {
        let (fixed, fixed_icon_count) = self.fixed_size();
        let dock_size = if self.forced_variable.get() {
            DockSizeMode::ForcedVariable
        } else if fixed {
            DockSizeMode::Fixed
        } else {
            DockSizeMode::Variable
        };

        DockSettings {
            theme: self.theme(),
            indicator: self.indicator_type(),
            multi_ind: self.multi_ind(),
            icon_bg: self.icon_bg(),
            pinned_on_all_workspaces: self.show_pinned_apps_on_all_ws(),
            unpinned_on_all_workspaces: self.show_unpinned_apps_on_all_ws(),
            current_workspace_only: self.win_cur_ws_only(),
            click_action: self.click_action(),
            change_panel_color: self.change_panel_color(),
            change_dock_color_only: self.change_dock_color_only(),
            dock_size,
            fixed_icon_count,
            panel_actions_only: self.panel_actions_only(),
            fallback_bar_color: self.fallback_bar_col(),
            app_spacing: self.app_spacing(),
            attention: self.attention_type(),
            popup_delay_ms: self.popup_delay(),
        }
    }

    /// Show the dialog
    pub fn present(&self) {
        self.window.present();
    }

    /// Hide the dialog; it stays alive and can be presented again
    pub fn hide(&self) {
        self.window.set_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    /// The underlying window, for the owner to attach to its application
    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Frame with a heading-styled caption
fn create_frame(caption: &str) -> Frame {
    let frame = Frame::new(None);
    let label = Label::new(Some(caption));
    label.add_css_class("heading");
    frame.set_label_widget(Some(&label));
    frame
}

/// Wrap a widget in a box indented under its frame caption
fn indented(child: &impl IsA<gtk4::Widget>) -> GtkBox {
    let container = GtkBox::new(Orientation::Vertical, 0);
    container.set_margin_start(12);
    container.set_margin_top(2);
    container.set_margin_bottom(2);
    container.append(child);
    container
}

/// Stack a radio/check group vertically
fn radio_column(buttons: &[&CheckButton]) -> GtkBox {
    let column = GtkBox::new(Orientation::Vertical, 2);
    for button in buttons {
        column.append(*button);
    }
    column
}

/// Non-editable wrapped advisory text
fn create_note(text: &str) -> TextView {
    let view = TextView::new();
    view.set_wrap_mode(WrapMode::Word);
    view.set_editable(false);
    view.set_cursor_visible(false);
    view.buffer().set_text(text);
    view
}

fn create_dropdown(labels: &[&str]) -> DropDown {
    let dropdown = DropDown::new(Some(StringList::new(labels)), gtk4::Expression::NONE);
    dropdown.set_halign(gtk4::Align::Start);
    dropdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtk4::gdk_pixbuf::{Colorspace, Pixbuf};

    fn test_dialog() -> Option<PrefsDialog> {
        if gtk4::init().is_err() {
            eprintln!("skipping widget tests: no display available");
            return None;
        }
        let icon = Pixbuf::new(Colorspace::Rgb, true, 8, 24, 24).unwrap();
        icon.fill(0x336699ff);
        let source = PreviewSource {
            icon,
            highlight: [64, 128, 192],
            icon_size: 48,
        };
        Some(PrefsDialog::new(source, || {}))
    }

    // all widget assertions live in one test so GTK stays on a single thread
    #[test]
    fn test_accessor_surface() {
        let Some(dialog) = test_dialog() else {
            return;
        };

        // enum round trips; Custom theme first so the combos are editable
        dialog.set_theme(ThemeType::Custom);
        for indicator in IndicatorType::OPTIONS {
            dialog.set_indicator_type(indicator);
            assert_eq!(dialog.indicator_type(), indicator);
        }
        for bg in IconBgType::OPTIONS {
            dialog.set_icon_bg(bg);
            assert_eq!(dialog.icon_bg(), bg);
        }
        for theme in ThemeType::OPTIONS {
            dialog.set_theme(theme);
            assert_eq!(dialog.theme(), theme);
        }
        for action in [
            ClickActionType::WindowList,
            ClickActionType::CompizSpread,
            ClickActionType::MinMax,
        ] {
            dialog.set_click_action(action);
            assert_eq!(dialog.click_action(), action);
        }
        for attention in [AttentionType::Blink, AttentionType::ShowBadge] {
            dialog.set_attention_type(attention);
            assert_eq!(dialog.attention_type(), attention);
        }

        // theme selection drives the dependent combos
        dialog.set_theme(ThemeType::Custom);
        dialog.set_indicator_type(IndicatorType::Diamond);
        dialog.set_icon_bg(IconBgType::AlphaFill);
        for theme in [
            ThemeType::Default,
            ThemeType::Unity,
            ThemeType::UnityFlat,
            ThemeType::Subway,
        ] {
            dialog.set_theme(theme);
            let (indicator, bg) = resolve_theme(theme).unwrap();
            assert_eq!(dialog.indicator_type(), indicator);
            assert_eq!(dialog.icon_bg(), bg);
            assert!(!dialog.cbt_indicator.is_sensitive());
            assert!(!dialog.cbt_icon_bg.is_sensitive());
        }
        dialog.set_theme(ThemeType::Custom);
        assert!(dialog.cbt_indicator.is_sensitive());
        assert!(dialog.cbt_icon_bg.is_sensitive());

        // booleans
        for value in [true, false] {
            dialog.set_multi_ind(value);
            assert_eq!(dialog.multi_ind(), value);
            dialog.set_show_pinned_apps_on_all_ws(value);
            assert_eq!(dialog.show_pinned_apps_on_all_ws(), value);
            dialog.set_show_unpinned_apps_on_all_ws(value);
            assert_eq!(dialog.show_unpinned_apps_on_all_ws(), value);
            dialog.set_win_cur_ws_only(value);
            assert_eq!(dialog.win_cur_ws_only(), value);
            dialog.set_change_panel_color(value);
            assert_eq!(dialog.change_panel_color(), value);
            dialog.set_change_dock_color_only(value);
            assert_eq!(dialog.change_dock_color_only(), value);
            dialog.set_panel_actions_only(value);
            assert_eq!(dialog.panel_actions_only(), value);
        }

        // panel recolouring gates the dock-only checkbox
        dialog.set_change_panel_color(false);
        assert!(!dialog.cb_dock_panel_only.is_sensitive());
        dialog.set_change_panel_color(true);
        assert!(dialog.cb_dock_panel_only.is_sensitive());

        // numeric round trips and clamps
        for spacing in 0..=APP_SPACING_MAX {
            dialog.set_app_spacing(spacing);
            assert_eq!(dialog.app_spacing(), spacing);
        }
        dialog.set_app_spacing(99);
        assert_eq!(dialog.app_spacing(), APP_SPACING_MAX);

        let mut delay = POPUP_DELAY_MIN_MS;
        while delay <= POPUP_DELAY_MAX_MS {
            dialog.set_popup_delay(delay);
            assert_eq!(dialog.popup_delay(), delay);
            delay += 100;
        }

        // colour round trip within quantization tolerance
        for rgb in [[0, 0, 0], [192, 128, 0], [255, 255, 255], [17, 99, 201]] {
            dialog.set_fallback_bar_col(rgb);
            let back = dialog.fallback_bar_col();
            for ch in 0..3 {
                assert!((i32::from(back[ch]) - i32::from(rgb[ch])).abs() <= 1);
            }
        }

        // fixed size, including the forced-variable override
        dialog.set_fixed_size(true, 12, false);
        assert_eq!(dialog.fixed_size(), (true, 12));
        assert!(dialog.fixed_size_interactive());
        assert!(dialog.dock_size.spin.is_sensitive());

        dialog.set_fixed_size(false, 12, false);
        assert_eq!(dialog.fixed_size(), (false, 12));
        assert!(!dialog.dock_size.spin.is_sensitive());

        dialog.set_fixed_size(true, 10, true);
        let (fixed, _count) = dialog.fixed_size();
        assert!(!fixed);
        assert!(!dialog.fixed_size_interactive());
        assert!(!dialog.dock_size.rb_variable.is_sensitive());
        assert!(!dialog.dock_size.spin.is_sensitive());

        // count clamps
        dialog.set_fixed_size(true, 1000, false);
        assert_eq!(dialog.fixed_size().1, FIXED_ICON_COUNT_MAX);
        dialog.set_fixed_size(true, 0, false);
        assert_eq!(dialog.fixed_size().1, FIXED_ICON_COUNT_MIN);

        // aggregate round trip
        let expected = DockSettings {
            theme: ThemeType::Custom,
            indicator: IndicatorType::Square,
            multi_ind: true,
            icon_bg: IconBgType::Unity,
            pinned_on_all_workspaces: false,
            unpinned_on_all_workspaces: false,
            current_workspace_only: true,
            click_action: ClickActionType::MinMax,
            change_panel_color: true,
            change_dock_color_only: true,
            dock_size: DockSizeMode::Fixed,
            fixed_icon_count: 24,
            panel_actions_only: true,
            fallback_bar_color: [10, 120, 230],
            app_spacing: 5,
            attention: AttentionType::ShowBadge,
            popup_delay_ms: 2300,
        };
        dialog.set_settings(&expected);
        assert_eq!(dialog.settings(), expected);

        // shell state machine: hide is not destroy
        dialog.hide();
        assert!(!dialog.is_visible());
        dialog.present();
        assert!(dialog.is_visible());
        dialog.hide();
    }
}
