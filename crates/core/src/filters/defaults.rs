//! Default values for filter fields.

use partyledger_shared::{FilterValue, calendar};
use serde::Serialize;

use crate::env::FilterEnv;

/// A default value, or a recipe for producing one.
///
/// Recipes are evaluated exactly once, when a filter session is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "source", content = "arg")]
pub enum DefaultValue {
    /// A fixed value.
    Value(FilterValue),
    /// The environment's current date.
    Today,
    /// The given number of calendar months before the current date.
    MonthsAgo(u32),
    /// The user's default for a named framework setting.
    UserDefault(String),
}

impl DefaultValue {
    /// Evaluates this default against the environment.
    ///
    /// A missing user default evaluates to [`FilterValue::Empty`].
    #[must_use]
    pub fn evaluate(&self, env: &dyn FilterEnv) -> FilterValue {
        match self {
            Self::Value(value) => value.clone(),
            Self::Today => FilterValue::Date(env.today()),
            Self::MonthsAgo(months) => {
                FilterValue::Date(calendar::months_ago(env.today(), *months))
            }
            Self::UserDefault(setting) => env
                .user_default(setting)
                .map_or(FilterValue::Empty, FilterValue::Text),
        }
    }
}
