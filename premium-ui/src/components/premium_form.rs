use gpui::{
    AppContext, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render, Styled,
    Subscription, TextAlign, Window, div, px, red,
};
use gpui_component::{
    input::{Input, InputEvent, InputState},
    v_flex,
};
use premium_core::{Field, FormState, PremiumEstimator, ResultArea, messages};

/// The three-field premium form and its result region.
///
/// Every edit and calculation replaces `state` with the reducer's output.
pub struct PremiumForm {
    estimator: PremiumEstimator,
    state: FormState,
    age: Entity<InputState>,
    loan_amount: Entity<InputState>,
    coverage_period: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl PremiumForm {
    pub fn new(
        estimator: PremiumEstimator,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let age = make_input_state(Field::Age, window, cx);
        let loan_amount = make_input_state(Field::LoanAmount, window, cx);
        let coverage_period = make_input_state(Field::CoveragePeriod, window, cx);

        let subscriptions = vec![
            subscribe_field(Field::Age, &age, window, cx),
            subscribe_field(Field::LoanAmount, &loan_amount, window, cx),
            subscribe_field(Field::CoveragePeriod, &coverage_period, window, cx),
        ];

        Self {
            estimator,
            state: FormState::default(),
            age,
            loan_amount,
            coverage_period,
            _subscriptions: subscriptions,
        }
    }

    /// Runs a calculation attempt and redraws.
    pub fn calculate(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.state = self.estimator.on_calculate(&self.state);
        cx.notify();
    }

    fn input_for(
        &self,
        field: Field,
    ) -> &Entity<InputState> {
        match field {
            Field::Age => &self.age,
            Field::LoanAmount => &self.loan_amount,
            Field::CoveragePeriod => &self.coverage_period,
        }
    }

    fn on_input_event(
        &mut self,
        field: Field,
        input: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change { .. } => {
                let raw = input.read(cx).value().to_string();
                self.state = self.estimator.on_input(&self.state, field, &raw);

                // Echo grouped text back; the guard stops the echo re-triggering itself.
                let echoed = self.state.inputs.get(field).raw.clone();
                if echoed != raw {
                    input.update(cx, |state, cx| state.set_value(echoed, window, cx));
                }
                cx.notify();
            }
            InputEvent::PressEnter { .. } => self.calculate(cx),
            _ => {}
        }
    }

    fn render_field(
        &self,
        field: Field,
    ) -> Div {
        let error = self.state.errors.get(field);

        v_flex()
            .gap_1()
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(format!("{}:", field.label())),
            )
            .child(Input::new(self.input_for(field)))
            .children(
                (!error.is_empty())
                    .then(|| div().text_sm().text_color(red()).child(error.to_string())),
            )
    }

    fn render_result(&self) -> Option<Div> {
        match &self.state.result {
            ResultArea::NoResult => None,
            ResultArea::Error => Some(
                div()
                    .text_align(TextAlign::Center)
                    .text_color(red())
                    .child(messages::INCOMPLETE_FORM),
            ),
            ResultArea::Success(quote) => Some(
                v_flex()
                    .items_center()
                    .gap_1()
                    .p_4()
                    .rounded_md()
                    .border_1()
                    .child(messages::RESULT_HEADING)
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .child(self.estimator.premium_text(quote)),
                    )
                    .child(div().text_sm().child(messages::TAX_DISCLAIMER)),
            ),
        }
    }
}

impl Render for PremiumForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .w(px(420.))
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_align(TextAlign::Center)
                    .child(messages::FORM_TITLE),
            )
            .children(Field::ALL.map(|field| self.render_field(field)))
            .children(self.render_result())
    }
}

fn make_input_state(
    field: Field,
    window: &mut Window,
    cx: &mut Context<PremiumForm>,
) -> Entity<InputState> {
    cx.new(|input_cx| InputState::new(window, input_cx).placeholder(field.placeholder()))
}

fn subscribe_field(
    field: Field,
    input: &Entity<InputState>,
    window: &mut Window,
    cx: &mut Context<PremiumForm>,
) -> Subscription {
    cx.subscribe_in(input, window, move |form, input, event: &InputEvent, window, cx| {
        form.on_input_event(field, input, event, window, cx)
    })
}
