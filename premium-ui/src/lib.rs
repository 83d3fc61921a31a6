pub mod batch;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod report;

use gpui::{App, actions};
pub use gui::{run_gui, setup_app};
use tracing::info;

actions!(premium_estimator, [Quit]);

/// Ends the event loop. Bound to the quit chords, the menu and window close.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
