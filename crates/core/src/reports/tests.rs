//! Tests for the Common Party Ledger filter declaration.

use std::sync::Arc;

use chrono::NaiveDate;
use partyledger_shared::FilterValue;
use rstest::rstest;

use super::common_party_ledger::{self, REPORT_NAME};
use crate::env::StaticEnv;
use crate::filters::{DefaultValue, FieldKind};
use crate::lookup::InMemoryLookup;
use crate::registry::ReportRegistry;
use crate::reports::error::ReportError;
use crate::session::FilterSession;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_declares_exactly_five_fields_in_order() {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();

    let names: Vec<&str> = set.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["party_link", "party", "from_date", "to_date", "company"]
    );
}

#[rstest]
#[case("party_link", true, false)]
#[case("party", true, true)]
#[case("from_date", true, false)]
#[case("to_date", true, false)]
#[case("company", true, false)]
fn test_field_flags(#[case] name: &str, #[case] required: bool, #[case] read_only: bool) {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();
    let field = set.field(name).unwrap();

    assert_eq!(field.required, required);
    assert_eq!(field.read_only, read_only);
}

#[test]
fn test_party_depends_on_party_link() {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();

    let party = set.field("party").unwrap();
    assert_eq!(party.depends_on.as_deref(), Some("party_link"));
    assert_eq!(party.kind, FieldKind::Text);
}

#[test]
fn test_reference_targets() {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();

    assert_eq!(
        set.field("party_link").unwrap().kind,
        FieldKind::ReferenceLink {
            reference_type: "Party Link".to_string()
        }
    );
    assert_eq!(
        set.field("company").unwrap().kind,
        FieldKind::ReferenceLink {
            reference_type: "Company".to_string()
        }
    );
}

#[test]
fn test_cascade_rule_projects_primary_party() {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();

    let rules: Vec<_> = set.cascades_from("party_link").collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].entity, "Party Link");
    assert_eq!(rules[0].attribute, "primary_party");
    assert_eq!(rules[0].target, "party");
}

#[test]
fn test_date_and_company_defaults() {
    let set = common_party_ledger::filter_set(&StaticEnv::new()).unwrap();

    assert_eq!(
        set.field("from_date").unwrap().default,
        Some(DefaultValue::MonthsAgo(1))
    );
    assert_eq!(
        set.field("to_date").unwrap().default,
        Some(DefaultValue::Today)
    );
    assert_eq!(
        set.field("company").unwrap().default,
        Some(DefaultValue::UserDefault("Company".to_string()))
    );
}

#[tokio::test]
async fn test_session_defaults_at_construction() {
    let env = StaticEnv::new()
        .with_today(ymd(2026, 2, 15))
        .with_user_default("Company", "ACME Corp");
    let set = common_party_ledger::filter_set(&env).unwrap();
    let session = FilterSession::new(Arc::new(set), Arc::new(InMemoryLookup::new()), &env);

    assert_eq!(
        session.get_value("from_date"),
        FilterValue::date(ymd(2026, 1, 15))
    );
    assert_eq!(
        session.get_value("to_date"),
        FilterValue::date(ymd(2026, 2, 15))
    );
    assert_eq!(session.get_value("company"), FilterValue::text("ACME Corp"));
    assert_eq!(session.get_value("party_link"), FilterValue::Empty);
}

#[tokio::test]
async fn test_party_link_scenario_end_to_end() {
    let env = StaticEnv::new().with_today(ymd(2026, 2, 15));
    let lookup = InMemoryLookup::new().with_attribute(
        "Party Link",
        "PL-0001",
        "primary_party",
        "CUST-001",
    );
    let set = common_party_ledger::filter_set(&env).unwrap();
    let session = FilterSession::new(Arc::new(set), Arc::new(lookup), &env);

    session.set_value("party_link", "PL-0001").unwrap();
    session.settle().await;
    assert_eq!(session.get_value("party"), FilterValue::text("CUST-001"));

    session.set_value("party_link", "").unwrap();
    assert_eq!(session.get_value("party"), FilterValue::Empty);
}

#[test]
fn test_register_installs_under_report_name() {
    let mut registry = ReportRegistry::new();
    common_party_ledger::register(&mut registry, &StaticEnv::new()).unwrap();

    let set = registry.get(REPORT_NAME).unwrap();
    assert_eq!(set.fields().len(), 5);
}

#[test]
fn test_register_twice_rejected() {
    let mut registry = ReportRegistry::new();
    common_party_ledger::register(&mut registry, &StaticEnv::new()).unwrap();

    let result = common_party_ledger::register(&mut registry, &StaticEnv::new());

    assert!(matches!(result, Err(ReportError::Registry(_))));
}
