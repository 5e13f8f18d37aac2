//! Filter declaration for the Common Party Ledger report.
//!
//! The report joins the ledger entries of both parties of a Party Link
//! record. Its filters pair a `party_link` reference with a read-only
//! `party` field that the cascade rule populates with the link's primary
//! party, plus a defaulted date range and company.

use super::error::ReportError;
use crate::env::FilterEnv;
use crate::filters::{CascadeRule, DefaultValue, FilterError, FilterField, FilterSet};
use crate::registry::ReportRegistry;

/// Registry key for this report.
pub const REPORT_NAME: &str = "Common Party Ledger";

/// Builds the report's filter set.
///
/// Labels pass through the environment's localization; defaults are
/// evaluated later, at session construction.
///
/// # Errors
///
/// Returns `FilterError` only if the declaration itself is inconsistent,
/// which the tests rule out.
pub fn filter_set(env: &dyn FilterEnv) -> Result<FilterSet, FilterError> {
    FilterSet::builder()
        .field(
            FilterField::reference_link("party_link", env.translate("Party Link"), "Party Link")
                .required(),
        )
        .field(
            FilterField::text("party", env.translate("Party"))
                .required()
                .read_only()
                .with_dependency("party_link"),
        )
        .field(
            FilterField::date("from_date", env.translate("From Date"))
                .required()
                .with_default(DefaultValue::MonthsAgo(1)),
        )
        .field(
            FilterField::date("to_date", env.translate("To Date"))
                .required()
                .with_default(DefaultValue::Today),
        )
        .field(
            FilterField::reference_link("company", env.translate("Company"), "Company")
                .required()
                .with_default(DefaultValue::UserDefault("Company".to_string())),
        )
        .cascade(CascadeRule::fetch_linked(
            "party_link",
            "Party Link",
            "primary_party",
            "party",
        ))
        .build()
}

/// Installs the report's filter set into a registry.
///
/// # Errors
///
/// Returns `ReportError` if the declaration fails validation or the report
/// name is already registered.
pub fn register(registry: &mut ReportRegistry, env: &dyn FilterEnv) -> Result<(), ReportError> {
    let set = filter_set(env)?;
    registry.register(REPORT_NAME, set)?;
    Ok(())
}
