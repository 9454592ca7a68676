//! Icon background drawers
//!
//! One drawer per [`IconBgType`], all taking the owning application's
//! highlight colour normalized to 0.0-1.0 channels. The Unity family also
//! exposes a shine overlay drawn after the app icon has been composited.

use cairo::Context;

use crate::core::settings::IconBgType;
use crate::render::color::Color;
use crate::render::DockOrient;

/// Solid fill alpha for the AlphaFill background
const ALPHA_FILL_ALPHA: f64 = 0.5;

/// Corner radius of the Unity tile, as a fraction of the cell size
const UNITY_CORNER_FRAC: f64 = 0.125;

/// Inset of the Unity tile from the cell bounds, in pixels
const UNITY_INSET: f64 = 1.0;

/// Draw the background for one icon cell
///
/// Exactly one drawer runs per call, keyed by `bg`.
pub fn render_icon_background(
    cr: &Context,
    bg: IconBgType,
    size: f64,
    orient: DockOrient,
    highlight: Color,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.transform(orient.cell_transform(size));

    let result = match bg {
        IconBgType::Gradient => render_gradient_fill(cr, size, highlight),
        IconBgType::AlphaFill => render_alpha_fill(cr, size, highlight),
        IconBgType::Unity => render_unity_tile(cr, size, highlight, false),
        IconBgType::UnityFlat => render_unity_tile(cr, size, highlight, true),
    };

    cr.restore()?;
    result
}

/// Draw the shine overlay for backgrounds that carry one
///
/// A no-op for backgrounds where [`IconBgType::has_shine`] is false.
pub fn render_background_shine(
    cr: &Context,
    bg: IconBgType,
    size: f64,
    orient: DockOrient,
) -> Result<(), cairo::Error> {
    if !bg.has_shine() {
        return Ok(());
    }

    cr.save()?;
    cr.transform(orient.cell_transform(size));
    let result = render_unity_shine(cr, size);
    cr.restore()?;
    result
}

/// Highlight colour fading out away from the panel edge
fn render_gradient_fill(cr: &Context, size: f64, highlight: Color) -> Result<(), cairo::Error> {
    let pattern = cairo::LinearGradient::new(0.0, 0.0, 0.0, size);
    pattern.add_color_stop_rgba(0.0, highlight.r, highlight.g, highlight.b, 0.0);
    pattern.add_color_stop_rgba(1.0, highlight.r, highlight.g, highlight.b, 0.9);

    cr.set_source(&pattern)?;
    cr.rectangle(0.0, 0.0, size, size);
    cr.fill()?;

    Ok(())
}

/// Translucent solid highlight over the whole cell
fn render_alpha_fill(cr: &Context, size: f64, highlight: Color) -> Result<(), cairo::Error> {
    highlight.with_alpha(ALPHA_FILL_ALPHA).apply_to_cairo(cr);
    cr.rectangle(0.0, 0.0, size, size);
    cr.fill()?;

    Ok(())
}

/// Unity-style rounded tile, gradient or flat
fn render_unity_tile(
    cr: &Context,
    size: f64,
    highlight: Color,
    flat: bool,
) -> Result<(), cairo::Error> {
    let inset = UNITY_INSET;
    let extent = size - 2.0 * inset;
    let radius = size * UNITY_CORNER_FRAC;

    rounded_rect_path(cr, inset, inset, extent, extent, radius);

    if flat {
        highlight.apply_to_cairo(cr);
    } else {
        let top = highlight.darkened(1.15).with_alpha(1.0);
        let bottom = highlight.darkened(0.65);
        let pattern = cairo::LinearGradient::new(0.0, inset, 0.0, inset + extent);
        pattern.add_color_stop_rgba(0.0, top.r.min(1.0), top.g.min(1.0), top.b.min(1.0), 1.0);
        pattern.add_color_stop_rgba(1.0, bottom.r, bottom.g, bottom.b, 1.0);
        cr.set_source(&pattern)?;
    }
    cr.fill_preserve()?;

    highlight.darkened(0.5).apply_to_cairo(cr);
    cr.set_line_width(1.0);
    cr.stroke()?;

    Ok(())
}

/// Translucent white wash over the upper half of the tile
fn render_unity_shine(cr: &Context, size: f64) -> Result<(), cairo::Error> {
    let inset = UNITY_INSET;
    let extent = size - 2.0 * inset;
    let radius = size * UNITY_CORNER_FRAC;

    cr.save()?;
    rounded_rect_path(cr, inset, inset, extent, extent, radius);
    cr.clip();

    let pattern = cairo::LinearGradient::new(0.0, inset, 0.0, inset + extent * 0.55);
    pattern.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, 0.35);
    pattern.add_color_stop_rgba(1.0, 1.0, 1.0, 1.0, 0.0);

    cr.set_source(&pattern)?;
    cr.rectangle(inset, inset, extent, extent * 0.55);
    cr.fill()?;
    cr.restore()?;

    Ok(())
}

/// Build a rounded rectangle path
fn rounded_rect_path(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let r = radius.min(width / 2.0).min(height / 2.0);

    cr.new_path();
    cr.arc(
        x + width - r,
        y + r,
        r,
        -std::f64::consts::FRAC_PI_2,
        0.0,
    );
    cr.arc(
        x + width - r,
        y + height - r,
        r,
        0.0,
        std::f64::consts::FRAC_PI_2,
    );
    cr.arc(
        x + r,
        y + height - r,
        r,
        std::f64::consts::FRAC_PI_2,
        std::f64::consts::PI,
    );
    cr.arc(
        x + r,
        y + r,
        r,
        std::f64::consts::PI,
        1.5 * std::f64::consts::PI,
    );
    cr.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};

    fn probe_surface() -> (ImageSurface, Context) {
        let surface = ImageSurface::create(Format::ARgb32, 48, 48).unwrap();
        let cr = Context::new(&surface).unwrap();
        (surface, cr)
    }

    #[test]
    fn test_every_background_renders() {
        let highlight = Color::from_rgb8([64, 128, 192]);
        for bg in IconBgType::OPTIONS {
            for orient in [
                DockOrient::Up,
                DockOrient::Down,
                DockOrient::Left,
                DockOrient::Right,
            ] {
                let (_surface, cr) = probe_surface();
                render_icon_background(&cr, bg, 48.0, orient, highlight).unwrap();
                render_background_shine(&cr, bg, 48.0, orient).unwrap();
            }
        }
    }

    #[test]
    fn test_shine_is_noop_for_flat_fills() {
        let (mut surface, cr) = probe_surface();
        render_background_shine(&cr, IconBgType::Gradient, 48.0, DockOrient::Up).unwrap();
        render_background_shine(&cr, IconBgType::AlphaFill, 48.0, DockOrient::Up).unwrap();
        drop(cr);

        surface.flush();
        let data = surface.data().unwrap();
        assert!(data.iter().all(|b| *b == 0), "shine painted on a shineless background");
    }

    #[test]
    fn test_alpha_fill_covers_cell() {
        let (mut surface, cr) = probe_surface();
        render_icon_background(
            &cr,
            IconBgType::AlphaFill,
            48.0,
            DockOrient::Up,
            Color::from_rgb8([255, 0, 0]),
        )
        .unwrap();
        drop(cr);

        surface.flush();
        let data = surface.data().unwrap();
        // center pixel alpha should be ~50% (ARGB32 stores alpha in byte 3,
        // little endian)
        let offset = (24 * 48 + 24) * 4;
        let alpha = data[offset + 3];
        assert!((120..=135).contains(&alpha), "alpha was {}", alpha);
    }
}
