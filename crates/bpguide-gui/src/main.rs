//! Unifier BP Guide - desktop viewer.

use bpguide_gui::App;
use bpguide_gui::component::LUCIDE_FONT_BYTES;
use bpguide_gui::state::Settings;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Logging honours `RUST_LOG` and defaults to `info`.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Unifier BP Guide");

    // Only the window size is needed before the app exists; `App::new`
    // loads the full settings again.
    let window = Settings::load().window;

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(window.width, window.height),
            min_size: Some(Size::new(360.0, 480.0)),
            ..Default::default()
        })
        .run()
}
