//! Running-window indicator drawers
//!
//! One drawer per drawable [`IndicatorType`], keyed by the dispatch in
//! [`render_app_indicator`]. The classic light/dark dots carry their own
//! colours; every other style draws in the theme bar colour resolved by
//! [`theme_bar_color`], or the user's fallback bar colour when the theme
//! yields nothing.

use cairo::Context;
use gtk4::prelude::*;

use crate::core::constants::DEFAULT_FALLBACK_BAR_COLOR;
use crate::core::settings::IndicatorType;
use crate::render::color::Color;
use crate::render::DockOrient;

/// Extra run-out past the icon cell for the bar style
const BAR_EXTRA_WIDTH: f64 = 6.0;

/// Extra run-out past the icon cell for the subway style
const SUBWAY_EXTRA_WIDTH: f64 = 8.0;

/// Height of the bar and subway strips along the panel edge
const STRIP_HEIGHT: f64 = 4.0;

/// Per-render options for the indicator pass
#[derive(Debug, Clone, Copy)]
pub struct IndicatorOptions {
    /// Number of marks to draw; the bar style ignores this
    pub count: u32,
    /// Resolved theme bar colour (theme colour or the user's fallback)
    pub bar_color: Color,
    /// Whether the subway style renders its active state
    pub subway_active: bool,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            count: 1,
            bar_color: Color::from_rgb8(DEFAULT_FALLBACK_BAR_COLOR),
            subway_active: false,
        }
    }
}

/// Extra horizontal surface width a style needs beyond the icon cell
///
/// Zero for styles that draw inside the icon bounding box; a fixed
/// per-style constant for the edge strips that run past it.
pub fn extra_surface_width(indicator: IndicatorType) -> f64 {
    match indicator {
        IndicatorType::Bar => BAR_EXTRA_WIDTH,
        IndicatorType::Subway => SUBWAY_EXTRA_WIDTH,
        _ => 0.0,
    }
}

/// Resolve the GTK theme's selection colour from a realized widget
///
/// Returns None when the theme does not define one, in which case callers
/// fall back to the user's configured fallback bar colour.
#[allow(deprecated)] // StyleContext color lookup has no GTK4 replacement
pub fn theme_bar_color(widget: &impl IsA<gtk4::Widget>) -> Option<Color> {
    widget
        .style_context()
        .lookup_color("theme_selected_bg_color")
        .map(|rgba| Color::from_gdk_rgba(&rgba))
}

/// Draw the indicator marks for one icon cell
///
/// Exactly one drawer runs per call, keyed by `indicator`; `None` draws
/// nothing.
pub fn render_app_indicator(
    cr: &Context,
    indicator: IndicatorType,
    size: f64,
    orient: DockOrient,
    opts: &IndicatorOptions,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.transform(orient.cell_transform(size));

    let result = match indicator {
        IndicatorType::Light => render_classic_dots(cr, size, opts.count, true),
        IndicatorType::Dark => render_classic_dots(cr, size, opts.count, false),
        IndicatorType::Bar => render_theme_bar(cr, size, opts.bar_color),
        IndicatorType::Circle => render_theme_circles(cr, size, opts.count, opts.bar_color),
        IndicatorType::Square => render_theme_squares(cr, size, opts.count, opts.bar_color),
        IndicatorType::Triangle => render_theme_triangles(cr, size, opts.count, opts.bar_color),
        IndicatorType::Diamond => render_theme_diamonds(cr, size, opts.count, opts.bar_color),
        IndicatorType::Subway => render_subway(cr, size, opts.count, opts.bar_color, opts.subway_active),
        IndicatorType::None => Ok(()),
    };

    cr.restore()?;
    result
}

/// Leading-edge x coordinate for the i-th of `count` marks of width `w`
fn mark_x(i: u32, w: f64) -> f64 {
    2.0 + f64::from(i) * (w + 3.0)
}

/// The classic glowing dots; white-cored when `light`, near-black otherwise
fn render_classic_dots(
    cr: &Context,
    size: f64,
    count: u32,
    light: bool,
) -> Result<(), cairo::Error> {
    let radius = (size / 16.0).max(2.0);
    let core = if light { 0.95 } else { 0.1 };
    let cy = size - radius - 1.0;

    for i in 0..count {
        let cx = mark_x(i, radius * 2.0) + radius;
        let pattern = cairo::RadialGradient::new(cx, cy, 0.0, cx, cy, radius);
        pattern.add_color_stop_rgba(0.0, core, core, core, 1.0);
        pattern.add_color_stop_rgba(0.75, core, core, core, 0.8);
        pattern.add_color_stop_rgba(1.0, core, core, core, 0.0);

        cr.set_source(&pattern)?;
        cr.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
        cr.fill()?;
    }

    Ok(())
}

/// A single bar spanning the cell and its run-out along the panel edge
fn render_theme_bar(cr: &Context, size: f64, color: Color) -> Result<(), cairo::Error> {
    let width = size + BAR_EXTRA_WIDTH;
    let top = size - STRIP_HEIGHT;

    let pattern = cairo::LinearGradient::new(0.0, top, 0.0, size);
    pattern.add_color_stop_rgba(0.0, color.r, color.g, color.b, 1.0);
    let shaded = color.darkened(0.6);
    pattern.add_color_stop_rgba(1.0, shaded.r, shaded.g, shaded.b, 1.0);

    cr.set_source(&pattern)?;
    cr.rectangle(0.0, top, width, STRIP_HEIGHT);
    cr.fill()?;

    Ok(())
}

fn render_theme_circles(
    cr: &Context,
    size: f64,
    count: u32,
    color: Color,
) -> Result<(), cairo::Error> {
    let radius = size / 12.0;
    let cy = size - radius - 1.0;

    for i in 0..count {
        let cx = mark_x(i, radius * 2.0) + radius;
        color.apply_to_cairo(cr);
        cr.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
        cr.fill_preserve()?;

        color.darkened(0.5).apply_to_cairo(cr);
        cr.set_line_width(1.0);
        cr.stroke()?;
    }

    Ok(())
}

fn render_theme_squares(
    cr: &Context,
    size: f64,
    count: u32,
    color: Color,
) -> Result<(), cairo::Error> {
    let side = size / 8.0;
    let y = size - side - 1.0;

    for i in 0..count {
        let x = mark_x(i, side);
        color.apply_to_cairo(cr);
        cr.rectangle(x, y, side, side);
        cr.fill_preserve()?;

        color.darkened(0.5).apply_to_cairo(cr);
        cr.set_line_width(1.0);
        cr.stroke()?;
    }

    Ok(())
}

fn render_theme_triangles(
    cr: &Context,
    size: f64,
    count: u32,
    color: Color,
) -> Result<(), cairo::Error> {
    let base = size / 6.0;
    let height = size / 8.0;
    let bottom = size - 1.0;

    for i in 0..count {
        let x = mark_x(i, base);
        cr.new_path();
        cr.move_to(x, bottom);
        cr.line_to(x + base, bottom);
        cr.line_to(x + base / 2.0, bottom - height);
        cr.close_path();

        color.apply_to_cairo(cr);
        cr.fill()?;
    }

    Ok(())
}

fn render_theme_diamonds(
    cr: &Context,
    size: f64,
    count: u32,
    color: Color,
) -> Result<(), cairo::Error> {
    let half = size / 14.0;
    let cy = size - half - 1.0;

    for i in 0..count {
        let cx = mark_x(i, half * 2.0) + half;
        cr.new_path();
        cr.move_to(cx, cy - half);
        cr.line_to(cx + half, cy);
        cr.line_to(cx, cy + half);
        cr.line_to(cx - half, cy);
        cr.close_path();

        color.apply_to_cairo(cr);
        cr.fill()?;
    }

    Ok(())
}

/// Subway strip: a muted base bar with one segment per window, segments
/// brightening when the app is active
fn render_subway(
    cr: &Context,
    size: f64,
    count: u32,
    color: Color,
    active: bool,
) -> Result<(), cairo::Error> {
    let width = size + SUBWAY_EXTRA_WIDTH;
    let top = size - STRIP_HEIGHT - 1.0;

    color.with_alpha(0.45).apply_to_cairo(cr);
    cr.rectangle(0.0, top, width, STRIP_HEIGHT);
    cr.fill()?;

    let count = count.max(1);
    let gap = 2.0;
    let seg_w = (width - gap * f64::from(count + 1)) / f64::from(count);
    let seg_alpha = if active { 1.0 } else { 0.7 };

    for i in 0..count {
        let x = gap + f64::from(i) * (seg_w + gap);
        color.with_alpha(seg_alpha).apply_to_cairo(cr);
        cr.rectangle(x, top, seg_w, STRIP_HEIGHT);
        cr.fill()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};

    #[test]
    fn test_extra_width_only_for_edge_strips() {
        assert_eq!(extra_surface_width(IndicatorType::Light), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::Dark), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::Circle), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::Square), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::Triangle), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::Diamond), 0.0);
        assert_eq!(extra_surface_width(IndicatorType::None), 0.0);
        assert!(extra_surface_width(IndicatorType::Bar) > 0.0);
        assert!(extra_surface_width(IndicatorType::Subway) > 0.0);
    }

    #[test]
    fn test_every_indicator_renders() {
        for ind in IndicatorType::OPTIONS {
            for count in [1, 4] {
                let width = 48 + extra_surface_width(ind) as i32;
                let surface = ImageSurface::create(Format::ARgb32, width, 48).unwrap();
                let cr = Context::new(&surface).unwrap();
                let opts = IndicatorOptions {
                    count,
                    ..IndicatorOptions::default()
                };
                render_app_indicator(&cr, ind, 48.0, DockOrient::Up, &opts).unwrap();
            }
        }
    }

    #[test]
    fn test_none_draws_nothing() {
        let surface = ImageSurface::create(Format::ARgb32, 48, 48).unwrap();
        let cr = Context::new(&surface).unwrap();
        render_app_indicator(
            &cr,
            IndicatorType::None,
            48.0,
            DockOrient::Up,
            &IndicatorOptions::default(),
        )
        .unwrap();
        drop(cr);

        let mut surface = surface;
        surface.flush();
        let data = surface.data().unwrap();
        assert!(data.iter().all(|b| *b == 0));
    }
}
