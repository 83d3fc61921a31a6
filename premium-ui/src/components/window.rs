use gpui::{
    AnyElement, App, Context, IntoElement, ParentElement, Render, Styled, Subscription, Window, div,
};
use gpui_component::StyledExt;
use tracing::info;

use crate::{Quit, quit};

/// Root view of the main window: centers whatever `content` builds.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    content: Option<Box<dyn Fn() -> AnyElement>>,
}

impl AppWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        // Single-window app: closing it ends the process on every platform.
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("main window closed");
            quit(&Quit, cx);
        });

        Self {
            _window_close_subscription: subscription,
            content: None,
        }
    }

    /// `content` runs on every render.
    pub fn set_content(
        &mut self,
        content: impl Fn() -> AnyElement + 'static,
    ) {
        self.content = Some(Box::new(content));
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let content = self.content.as_ref().map(|f| f());

        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .children(content)
    }
}
