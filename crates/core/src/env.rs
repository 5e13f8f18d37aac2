//! Framework environment seam.
//!
//! Filter declarations consume three framework services: the current date,
//! per-user setting defaults, and display-text localization. Bundling them
//! behind one trait keeps schema construction testable with a fixed clock.

use std::collections::HashMap;

use chrono::NaiveDate;
use partyledger_shared::calendar;

/// Framework services consumed while declaring and defaulting filters.
pub trait FilterEnv: Send + Sync {
    /// The current date, used by date-based defaults.
    fn today(&self) -> NaiveDate;

    /// The user's default for a named setting, if configured.
    fn user_default(&self, setting: &str) -> Option<String>;

    /// Localizes display text. Returns the input unchanged when no
    /// translation exists.
    fn translate(&self, text: &str) -> String;
}

/// Production environment: UTC clock, no user defaults, identity translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl FilterEnv for SystemEnv {
    fn today(&self) -> NaiveDate {
        calendar::today()
    }

    fn user_default(&self, _setting: &str) -> Option<String> {
        None
    }

    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Fixed environment for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    today: Option<NaiveDate>,
    user_defaults: HashMap<String, String>,
}

impl StaticEnv {
    /// Creates an environment with the real clock and no user defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the current date.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Adds a user default for a named setting.
    #[must_use]
    pub fn with_user_default(mut self, setting: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_defaults.insert(setting.into(), value.into());
        self
    }
}

impl FilterEnv for StaticEnv {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(calendar::today)
    }

    fn user_default(&self, setting: &str) -> Option<String> {
        self.user_defaults.get(setting).cloned()
    }

    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}
