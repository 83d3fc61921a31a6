use gpui::{
    AnyElement, App, AppContext, Application, Bounds, Context, InteractiveElement, IntoElement,
    KeyBinding, Menu, MenuItem, ParentElement, Styled, TitlebarOptions, Window, WindowBounds,
    WindowOptions,
};
use gpui_component::{h_flex, v_flex};
use premium_core::{PremiumEstimator, messages};
use tracing::{debug, error};

use crate::{
    Quit,
    components::{AppWindow, PremiumForm, WindowPreferences, calculate_button},
    quit,
};

/// Chords that fire [`Quit`] on the current platform.
fn quit_bindings() -> Vec<KeyBinding> {
    if cfg!(target_os = "macos") {
        vec![KeyBinding::new("cmd-q", Quit, None)]
    } else {
        vec![
            KeyBinding::new("ctrl-q", Quit, None),
            KeyBinding::new("alt-F4", Quit, None),
        ]
    }
}

/// Registers component state, quit handling and the app menu.
pub fn setup_app(cx: &mut App) {
    // Input and button widgets read global state set up here.
    gpui_component::init(cx);

    cx.activate(true);
    cx.bind_keys(quit_bindings());
    cx.on_action(quit);
    cx.set_menus(vec![Menu {
        name: messages::FORM_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Creates the form entity and returns the content factory for
/// [`AppWindow::set_content`]: the form above the calculate button.
pub fn build_main_content(
    estimator: PremiumEstimator,
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let form = app_cx.new(|form_cx: &mut Context<PremiumForm>| {
        PremiumForm::new(estimator, window, form_cx)
    });

    move || {
        v_flex()
            .p_5()
            .gap_4()
            .items_center()
            .child(form.clone())
            .child(
                h_flex()
                    .id("form-actions")
                    .w_full()
                    .justify_center()
                    .child({
                        let form_handle = form.clone();
                        calculate_button(move |_, _, cx: &mut App| {
                            debug!("calculate clicked");
                            form_handle.update(cx, |form, cx| form.calculate(cx));
                        })
                    }),
            )
            .into_any_element()
    }
}

/// Opens the main window and runs the event loop until the app quits.
pub fn run_gui(
    estimator: PremiumEstimator,
    preferences: WindowPreferences,
) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);

            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                    None,
                    preferences.size,
                    cx,
                ))),
                titlebar: Some(TitlebarOptions {
                    title: Some(messages::FORM_TITLE.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(options, move |window, cx| {
                let content = build_main_content(estimator, window, cx);
                cx.new(|cx| {
                    let mut app_window = AppWindow::new(cx);
                    app_window.set_content(content);
                    app_window
                })
            });

            if let Err(error) = opened {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });
}
