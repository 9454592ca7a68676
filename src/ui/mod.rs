//! Widget layer

pub mod prefs_dialog;

pub use prefs_dialog::PrefsDialog;
