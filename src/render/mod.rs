//! Cairo rendering for the appearance preview
//!
//! Background and indicator drawers share one coordinate convention: a
//! square icon cell drawn as if the dock sat on the bottom panel edge, with
//! [`DockOrient::cell_transform`] mapping that onto the actual orientation.

pub mod background;
pub mod color;
pub mod indicator;
pub mod preview;

pub use color::Color;
pub use preview::{render_preview, PreviewSource};

use gtk4::cairo;

/// The screen edge the dock's panel occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockOrient {
    /// Panel along the bottom edge, applet pointing up
    Up,
    /// Panel along the top edge
    Down,
    /// Panel along the left edge
    Left,
    /// Panel along the right edge
    Right,
}

impl DockOrient {
    /// Matrix mapping drawer coordinates (panel edge along the bottom of a
    /// `size`-high cell) onto this orientation.
    pub(crate) fn cell_transform(self, size: f64) -> cairo::Matrix {
        match self {
            DockOrient::Up => cairo::Matrix::identity(),
            DockOrient::Down => cairo::Matrix::new(1.0, 0.0, 0.0, -1.0, 0.0, size),
            DockOrient::Left => cairo::Matrix::new(0.0, 1.0, -1.0, 0.0, size, 0.0),
            DockOrient::Right => cairo::Matrix::new(0.0, 1.0, 1.0, 0.0, 0.0, 0.0),
        }
    }
}
