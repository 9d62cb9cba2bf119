#![doc(test(attr(deny(warnings))))]

//! Budget Utils provides the validation predicates and display formatters
//! behind budgeting forms and dashboards: numeric and email checks, USD
//! currency and percentage rendering, and monthly conversion of recurring
//! amounts.

pub mod config;
pub mod currency;
pub mod errors;
pub mod frequency;
pub mod numeric;
pub mod summary;
pub mod utils;
pub mod validation;

pub use currency::{format_currency, format_percentage, CurrencyInput};
pub use frequency::{calculate_monthly_value, Frequency};
pub use validation::{
    is_future_date, is_not_empty, is_positive_number, is_strong_password, is_valid_email,
    is_valid_number,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Utils tracing initialized.");
    });
}
