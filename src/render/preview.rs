//! Appearance preview composition
//!
//! Builds the preview bitmap shown in the preferences dialog: one icon
//! cell rendered with the currently selected background, app icon and
//! indicator, composited one icon-width in from the left of a canvas three
//! icon cells wide. The rest of the canvas stays flat panel colour, the
//! layout the dock reserves for future multi-cell previews.

use cairo::{Context, Format, ImageSurface};
use gtk4::gdk_pixbuf::{InterpType, Pixbuf};
use gtk4::prelude::*;
use rand::Rng;

use crate::core::constants::PREVIEW_CANVAS_FACTOR;
use crate::core::settings::{DockSettings, IconBgType, IndicatorType};
use crate::render::background::{render_background_shine, render_icon_background};
use crate::render::color::Color;
use crate::render::indicator::{extra_surface_width, render_app_indicator, IndicatorOptions};
use crate::render::DockOrient;

/// Icon scale factor used when a Unity tile frames the icon
const UNITY_ICON_SCALE: f64 = 0.75;

/// What the owning application contributes to the preview
#[derive(Debug, Clone)]
pub struct PreviewSource {
    /// Reference app icon drawn inside the preview cell
    pub icon: Pixbuf,
    /// The application's highlight colour, 0-255 per channel
    pub highlight: [u8; 3],
    /// Edge length of the icon cell, in pixels
    pub icon_size: i32,
}

impl PreviewSource {
    /// Width of the full preview canvas for this source
    pub fn canvas_width(&self) -> i32 {
        self.icon_size * PREVIEW_CANVAS_FACTOR
    }
}

/// Panel colour behind the preview: light for the dark indicator so its
/// marks stay visible, dark for everything else
pub fn panel_shade(indicator: IndicatorType) -> Color {
    if indicator == IndicatorType::Dark {
        Color::new(0.85, 0.85, 0.85, 1.0)
    } else {
        Color::new(0.15, 0.21, 0.15, 1.0)
    }
}

/// Render the full preview onto `cr`
///
/// `bar_color` is the already-resolved theme bar colour (theme colour or
/// the user's fallback). When multiple indicators are enabled the count is
/// randomized in 2..=4 per render, purely for preview realism; the subway
/// style likewise randomizes its active state.
pub fn render_preview(
    cr: &Context,
    settings: &DockSettings,
    source: &PreviewSource,
    bar_color: Color,
) -> Result<(), cairo::Error> {
    let size = f64::from(source.icon_size);

    panel_shade(settings.indicator).apply_to_cairo(cr);
    cr.rectangle(0.0, 0.0, f64::from(source.canvas_width()), size);
    cr.fill()?;

    let cell_width = source.icon_size + extra_surface_width(settings.indicator).ceil() as i32;
    let surface = ImageSurface::create(Format::ARgb32, cell_width, source.icon_size)?;
    render_cell(&surface, settings, source, bar_color)?;

    cr.set_source_surface(&surface, size, 0.0)?;
    cr.paint()?;

    Ok(())
}

/// Render background, icon and indicators into the working cell surface
fn render_cell(
    surface: &ImageSurface,
    settings: &DockSettings,
    source: &PreviewSource,
    bar_color: Color,
) -> Result<(), cairo::Error> {
    let ctx = Context::new(surface)?;
    let size = f64::from(source.icon_size);
    let highlight = Color::from_rgb8(source.highlight);

    render_icon_background(&ctx, settings.icon_bg, size, DockOrient::Up, highlight)?;

    match settings.icon_bg {
        IconBgType::Unity | IconBgType::UnityFlat => {
            // the tile frames the icon, so scale it down and centre it
            let scaled = (size * UNITY_ICON_SCALE) as i32;
            if let Some(small) = source.icon.scale_simple(scaled, scaled, InterpType::Bilinear) {
                let offset = (size - f64::from(scaled)) / 2.0;
                ctx.set_source_pixbuf(&small, offset, offset);
                ctx.paint()?;
            }
        }
        _ => {
            let off_x = (size - f64::from(source.icon.width())) / 2.0;
            let off_y = (size - f64::from(source.icon.height())) / 2.0;
            ctx.set_source_pixbuf(&source.icon, off_x, off_y);
            ctx.paint()?;
        }
    }

    render_background_shine(&ctx, settings.icon_bg, size, DockOrient::Up)?;

    if settings.indicator != IndicatorType::None {
        let mut rng = rand::thread_rng();
        let count = if settings.multi_ind {
            rng.gen_range(2..=4)
        } else {
            1
        };
        let opts = IndicatorOptions {
            count,
            bar_color,
            subway_active: rng.gen_bool(0.5),
        };
        render_app_indicator(&ctx, settings.indicator, size, DockOrient::Up, &opts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtk4::gdk_pixbuf::Colorspace;

    fn sample_source(icon_size: i32) -> PreviewSource {
        let icon = Pixbuf::new(Colorspace::Rgb, true, 8, icon_size / 2, icon_size / 2).unwrap();
        icon.fill(0x2080c0ff);
        PreviewSource {
            icon,
            highlight: [64, 128, 192],
            icon_size,
        }
    }

    fn rendered_canvas(settings: &DockSettings) -> ImageSurface {
        let source = sample_source(32);
        let surface =
            ImageSurface::create(Format::ARgb32, source.canvas_width(), source.icon_size).unwrap();
        let cr = Context::new(&surface).unwrap();
        render_preview(&cr, settings, &source, Color::from_rgb8([192, 128, 0])).unwrap();
        surface
    }

    fn probe_rgb(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8) {
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let o = y * stride + x * 4;
        // ARGB32 is BGRA in memory on little-endian
        (data[o + 2], data[o + 1], data[o])
    }

    #[test]
    fn test_panel_shade_selection() {
        assert_eq!(panel_shade(IndicatorType::Dark), Color::new(0.85, 0.85, 0.85, 1.0));
        for ind in IndicatorType::OPTIONS {
            if ind != IndicatorType::Dark {
                assert_eq!(panel_shade(ind), Color::new(0.15, 0.21, 0.15, 1.0));
            }
        }
    }

    #[test]
    fn test_render_matrix_smoke() {
        for bg in IconBgType::OPTIONS {
            for ind in IndicatorType::OPTIONS {
                for multi in [false, true] {
                    let settings = DockSettings {
                        icon_bg: bg,
                        indicator: ind,
                        multi_ind: multi,
                        ..DockSettings::default()
                    };
                    rendered_canvas(&settings);
                }
            }
        }
    }

    #[test]
    fn test_canvas_shade_tracks_indicator() {
        let dark_ind = DockSettings {
            indicator: IndicatorType::Dark,
            ..DockSettings::default()
        };
        let mut canvas = rendered_canvas(&dark_ind);
        let (r, g, b) = probe_rgb(&mut canvas, 2, 2);
        assert!(r > 200 && g > 200 && b > 200, "expected light shade, got ({r},{g},{b})");

        let light_ind = DockSettings {
            indicator: IndicatorType::Light,
            ..DockSettings::default()
        };
        let mut canvas = rendered_canvas(&light_ind);
        let (r, g, b) = probe_rgb(&mut canvas, 2, 2);
        assert!(r < 60 && g < 70 && b < 60, "expected dark shade, got ({r},{g},{b})");
    }

    #[test]
    fn test_no_indicator_leaves_edge_clear() {
        // with no background fill near the panel edge corner of the cell and
        // indicator None, the cell corner shows the canvas shade untouched
        let settings = DockSettings {
            indicator: IndicatorType::None,
            icon_bg: IconBgType::Unity,
            ..DockSettings::default()
        };
        let shade = panel_shade(IndicatorType::None).to_rgb8();

        let mut canvas = rendered_canvas(&settings);
        // bottom-left pixel of the composited cell: outside the rounded
        // Unity tile, so nothing but the shade can be there
        let (r, g, b) = probe_rgb(&mut canvas, 32, 31);
        assert!((i32::from(r) - i32::from(shade[0])).abs() <= 2);
        assert!((i32::from(g) - i32::from(shade[1])).abs() <= 2);
        assert!((i32::from(b) - i32::from(shade[2])).abs() <= 2);
    }
}
