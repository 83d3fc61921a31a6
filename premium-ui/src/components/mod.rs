pub mod premium_form;
pub mod window;

use gpui::{App, ClickEvent, Pixels, Size, Styled, Window, px, size};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};
use premium_core::messages;

pub use premium_form::PremiumForm;
pub use window::AppWindow;

/// Initial size of the main window, in logical pixels.
#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl WindowPreferences {
    /// Fits the 420 px form with room for padding.
    pub const DEFAULT_WIDTH: f32 = 520.0;
    pub const DEFAULT_HEIGHT: f32 = 680.0;

    pub fn new(
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            size: size(px(width), px(height)),
        }
    }
}

/// Full-width primary button that triggers a calculation.
pub fn calculate_button(on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Button {
    Button::new("calculate")
        .primary()
        .large()
        .w_full()
        .label(messages::CALCULATE_LABEL)
        .on_click(on_click)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_preferences_keep_requested_size() {
        let prefs = WindowPreferences::new(600.0, 400.0);

        assert_eq!(prefs.size.width, px(600.0));
        assert_eq!(prefs.size.height, px(400.0));
    }
}
