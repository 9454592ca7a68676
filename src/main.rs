use anyhow::{anyhow, Result};
use clap::Parser;
use gtk4::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk4::prelude::*;
use gtk4::Application;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use dock_prefs::core::constants::DEFAULT_ICON_SIZE;
use dock_prefs::{DockSettings, PrefsDialog, PreviewSource, ThemeType};

const APP_ID: &str = "io.github.dock_prefs.Demo";

/// Standalone demonstration of the dock preferences dialog
#[derive(Parser, Debug)]
#[command(name = "dock-prefs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Icon cell size of the appearance preview, in pixels
    #[arg(short = 's', long = "icon-size", value_name = "PX", default_value_t = DEFAULT_ICON_SIZE)]
    icon_size: i32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let icon = build_sample_icon(cli.icon_size * 3 / 4)?;
    let icon_size = cli.icon_size;

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| build_ui(app, icon.clone(), icon_size));

    // clap already consumed the command line
    let _exit = app.run_with_args::<&str>(&[]);
    Ok(())
}

fn build_ui(app: &Application, icon: Pixbuf, icon_size: i32) {
    let source = PreviewSource {
        icon,
        highlight: [53, 132, 228],
        icon_size,
    };

    // the confirm callback carries no payload; the owner re-reads the
    // settings through the accessor surface, exactly as the applet would
    let slot: Rc<RefCell<Option<PrefsDialog>>> = Rc::new(RefCell::new(None));
    let slot_for_confirm = slot.clone();
    let dialog = PrefsDialog::new(source, move || {
        if let Some(dialog) = slot_for_confirm.borrow().as_ref() {
            info!("Preferences confirmed: {:?}", dialog.settings());
            dialog.hide();
        }
    });

    // seed the dialog the way the applet would, from its stored settings
    let stored = DockSettings {
        theme: ThemeType::Unity,
        multi_ind: true,
        popup_delay_ms: 500,
        ..DockSettings::default()
    };
    dialog.set_settings(&stored);
    app.add_window(dialog.window());

    // a hidden dialog ends the demo; a real applet would keep it around
    let app_clone = app.clone();
    dialog.window().connect_visible_notify(move |window| {
        if !window.is_visible() {
            app_clone.quit();
        }
    });

    *slot.borrow_mut() = Some(dialog);
}

/// Two-tone square standing in for a real application icon
fn build_sample_icon(size: i32) -> Result<Pixbuf> {
    let icon = Pixbuf::new(Colorspace::Rgb, true, 8, size, size)
        .ok_or_else(|| anyhow!("could not allocate a {size}x{size} sample icon"))?;
    icon.fill(0x3584e4ff);

    let inner_size = size / 2;
    let inner = Pixbuf::new(Colorspace::Rgb, true, 8, inner_size, inner_size)
        .ok_or_else(|| anyhow!("could not allocate the sample icon overlay"))?;
    inner.fill(0x99c1f1ff);
    inner.copy_area(0, 0, inner_size, inner_size, &icon, size / 4, size / 4);

    Ok(icon)
}
