//! Filter field descriptors and set construction.

use std::collections::HashSet;

use serde::Serialize;

use super::defaults::DefaultValue;
use super::error::FilterError;

/// How a filter field is edited and validated.
///
/// Kind-specific attributes live on the variant itself, so a text field can
/// never carry a dangling `reference_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    /// A link to a record of another entity type.
    ReferenceLink {
        /// The entity type this field links to.
        reference_type: String,
    },
    /// Free-form text.
    Text,
    /// A calendar date.
    Date,
}

/// One declared input control of a report filter set.
#[derive(Debug, Clone, Serialize)]
pub struct FilterField {
    /// Stable key the report engine uses to read the value.
    pub name: String,
    /// Human-readable display text (already localized).
    pub label: String,
    /// Editing and validation behavior.
    pub kind: FieldKind,
    /// Whether the report engine must reject execution when unset.
    pub required: bool,
    /// Whether the field can only be set programmatically.
    pub read_only: bool,
    /// Field this one is enabled by, if any.
    pub depends_on: Option<String>,
    /// Default value evaluated at session construction.
    pub default: Option<DefaultValue>,
}

impl FilterField {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            read_only: false,
            depends_on: None,
            default: None,
        }
    }

    /// Creates a reference-link field pointing at `reference_type` records.
    #[must_use]
    pub fn reference_link(
        name: impl Into<String>,
        label: impl Into<String>,
        reference_type: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::ReferenceLink {
                reference_type: reference_type.into(),
            },
        )
    }

    /// Creates a free-form text field.
    #[must_use]
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Creates a date field.
    #[must_use]
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    /// Marks the field as required for report execution.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as settable only by cascade rules.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Declares that this field is only enabled once `field` holds a value.
    #[must_use]
    pub fn with_dependency(mut self, field: impl Into<String>) -> Self {
        self.depends_on = Some(field.into());
        self
    }

    /// Sets the default value evaluated at session construction.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// A reactive rule linking two fields of the same set.
///
/// When `source` changes to a non-empty value, the rule fetches `attribute`
/// of the `entity` record keyed by that value and writes the result into
/// `target`. An empty `source` clears `target` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeRule {
    /// The watched field.
    pub source: String,
    /// Entity type of the record identified by the source value.
    pub entity: String,
    /// Attribute of the linked record to project.
    pub attribute: String,
    /// Field that receives the projected value.
    pub target: String,
}

impl CascadeRule {
    /// Creates a linked-field cascade rule.
    #[must_use]
    pub fn fetch_linked(
        source: impl Into<String>,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            entity: entity.into(),
            attribute: attribute.into(),
            target: target.into(),
        }
    }
}

/// An ordered, validated set of filter fields for one report.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSet {
    fields: Vec<FilterField>,
    cascades: Vec<CascadeRule>,
}

impl FilterSet {
    /// Starts building a filter set.
    #[must_use]
    pub fn builder() -> FilterSetBuilder {
        FilterSetBuilder::default()
    }

    /// The declared fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    /// The declared cascade rules.
    #[must_use]
    pub fn cascades(&self) -> &[CascadeRule] {
        &self.cascades
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FilterField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Cascade rules watching the given field.
    pub fn cascades_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a CascadeRule> {
        self.cascades.iter().filter(move |rule| rule.source == source)
    }
}

/// Builder for [`FilterSet`] with validation at `build` time.
#[derive(Debug, Default)]
pub struct FilterSetBuilder {
    fields: Vec<FilterField>,
    cascades: Vec<CascadeRule>,
}

impl FilterSetBuilder {
    /// Appends a field to the set.
    #[must_use]
    pub fn field(mut self, field: FilterField) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a cascade rule to the set.
    #[must_use]
    pub fn cascade(mut self, rule: CascadeRule) -> Self {
        self.cascades.push(rule);
        self
    }

    /// Validates and finalizes the set.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when field names collide, a dependency names a
    /// field outside the set, or a cascade rule references unknown fields.
    pub fn build(self) -> Result<FilterSet, FilterError> {
        let mut names: HashSet<&str> = HashSet::with_capacity(self.fields.len());

        for field in &self.fields {
            if field.name.is_empty() {
                return Err(FilterError::EmptyFieldName);
            }
            if !names.insert(&field.name) {
                return Err(FilterError::DuplicateField(field.name.clone()));
            }
        }

        for field in &self.fields {
            if let Some(depends_on) = &field.depends_on {
                if depends_on == &field.name {
                    return Err(FilterError::SelfDependency(field.name.clone()));
                }
                if !names.contains(depends_on.as_str()) {
                    return Err(FilterError::UnknownDependency {
                        field: field.name.clone(),
                        depends_on: depends_on.clone(),
                    });
                }
            }
        }

        for rule in &self.cascades {
            if !names.contains(rule.source.as_str()) {
                return Err(FilterError::CascadeSourceUnknown(rule.source.clone()));
            }
            if !names.contains(rule.target.as_str()) {
                return Err(FilterError::CascadeTargetUnknown(rule.target.clone()));
            }
            if rule.source == rule.target {
                return Err(FilterError::CascadeSelfTarget(rule.source.clone()));
            }
        }

        Ok(FilterSet {
            fields: self.fields,
            cascades: self.cascades,
        })
    }
}
