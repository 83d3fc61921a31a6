pub mod calculations;
pub mod config;
pub mod estimator;
pub mod format;
pub mod messages;
pub mod models;
pub mod validation;

pub use calculations::{CalculationError, PremiumCalculator, RateTable};
pub use config::{ConfigError, DisplayConfig, EstimatorConfig};
pub use estimator::{FieldIssue, PremiumEstimator, QuoteError};
pub use models::*;
pub use validation::{RangeError, Validator};
