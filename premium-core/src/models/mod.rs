mod field;
mod field_limits;
mod form_state;
mod premium_quote;

pub use field::Field;
pub use field_limits::{FieldLimits, FieldRange};
pub use form_state::{ErrorState, FieldInput, FieldStatus, FormState, InputState, ResultArea};
pub use premium_quote::PremiumQuote;
