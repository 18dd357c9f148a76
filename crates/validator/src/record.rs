//! Field descriptors, compiled schemas and the record walk
//!
//! A record type describes its fields once, as a list of
//! [`FieldDescriptor`]s: declared name, annotation, label hints and an
//! accessor returning the field's [`FieldValue`]. [`Schema`] parses every
//! annotation up front and keeps one checker per field, so validating a
//! record only runs checkers.
//!
//! `#[derive(Record)]` writes the descriptors and a process-wide cached
//! schema. The same can be done by hand:
//!
//! ```
//! use std::sync::OnceLock;
//!
//! use fieldcheck::{AsFieldValue, FieldDescriptor, FieldValue, Record, Schema};
//!
//! struct Signup {
//!     name: String,
//!     age: u8,
//! }
//!
//! fn name(record: &Signup) -> FieldValue<'_> {
//!     record.name.as_field_value()
//! }
//!
//! fn age(record: &Signup) -> FieldValue<'_> {
//!     record.age.as_field_value()
//! }
//!
//! impl Record for Signup {
//!     fn fields() -> Vec<FieldDescriptor<Self>> {
//!         vec![
//!             FieldDescriptor::new("name", name)
//!                 .with_annotation("string,min=1")
//!                 .with_label("Name"),
//!             FieldDescriptor::new("age", age).with_annotation("number,min=18"),
//!         ]
//!     }
//!
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: OnceLock<Schema<Signup>> = OnceLock::new();
//!         SCHEMA.get_or_init(|| Schema::new(Self::fields()))
//!     }
//! }
//!
//! let report = Signup { name: String::new(), age: 16 }.validate();
//! assert_eq!(
//!     report.messages(),
//!     vec!["Name must not be empty", "age must be at least 18"]
//! );
//! ```

use std::fmt;

use crate::annotation::{ConstraintSpec, SKIP};
use crate::checkers::Checker;
use crate::config::{MalformedPolicy, ValidatorConfig};
use crate::foundation::{AnnotationError, FieldValue, SchemaError};
use crate::report::{FieldFailure, ValidationReport};

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Static description of one field of a record type `R`.
pub struct FieldDescriptor<R> {
    name: &'static str,
    annotation: Option<&'static str>,
    label: Option<&'static str>,
    serialized_name: Option<&'static str>,
    accessor: fn(&R) -> FieldValue<'_>,
}

impl<R> FieldDescriptor<R> {
    /// Creates a descriptor with no annotation and no label hints.
    pub fn new(name: &'static str, accessor: fn(&R) -> FieldValue<'_>) -> Self {
        Self {
            name,
            annotation: None,
            label: None,
            serialized_name: None,
            accessor,
        }
    }

    /// Attaches the annotation text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_annotation(mut self, annotation: &'static str) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Sets the explicit display label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the serialized (wire) name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_serialized_name(mut self, name: &'static str) -> Self {
        self.serialized_name = Some(name);
        self
    }

    /// Declared field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The annotation, if any.
    #[must_use]
    pub fn annotation(&self) -> Option<&'static str> {
        self.annotation
    }

    /// The annotation unless it is absent, empty or the skip sentinel.
    #[must_use]
    pub fn active_annotation(&self) -> Option<&'static str> {
        self.annotation
            .filter(|annotation| !annotation.is_empty() && *annotation != SKIP)
    }

    /// Label used to prefix this field's failures: the explicit label,
    /// else the serialized name, else the declared name. Empty hints are
    /// treated as absent.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        self.label
            .filter(|label| !label.is_empty())
            .or_else(|| self.serialized_name.filter(|name| !name.is_empty()))
            .unwrap_or(self.name)
    }

    /// Reads the field from a record.
    pub fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.accessor)(record)
    }
}

impl<R> Clone for FieldDescriptor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldDescriptor<R> {}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("label", &self.label)
            .field("serialized_name", &self.serialized_name)
            .finish()
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A struct whose fields carry validation annotations.
///
/// Usually implemented with `#[derive(Record)]`.
pub trait Record: Sized + 'static {
    /// Descriptors of the annotated fields, in declaration order.
    fn fields() -> Vec<FieldDescriptor<Self>>;

    /// The lenient schema for this type, compiled once per process.
    fn schema() -> &'static Schema<Self>;

    /// Validates every annotated field of `self`.
    fn validate(&self) -> ValidationReport {
        Self::schema().validate(self)
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

struct CompiledField<R> {
    descriptor: FieldDescriptor<R>,
    spec: ConstraintSpec,
    checker: Checker,
}

impl<R> CompiledField<R> {
    fn compile(
        descriptor: FieldDescriptor<R>,
        policy: MalformedPolicy,
    ) -> Result<Option<Self>, SchemaError> {
        let Some(annotation) = descriptor.active_annotation() else {
            return Ok(None);
        };

        match (compile_annotation(annotation, policy), policy) {
            (Ok((spec, checker)), _) => Ok(Some(Self {
                descriptor,
                spec,
                checker,
            })),
            (Err(source), MalformedPolicy::Reject) => Err(SchemaError {
                field: descriptor.name,
                annotation: annotation.to_owned(),
                source,
            }),
            (Err(source), MalformedPolicy::Degrade) => {
                tracing::warn!(
                    field = descriptor.name,
                    annotation,
                    error = %source,
                    "malformed annotation, field will not be validated"
                );
                Ok(Some(Self {
                    descriptor,
                    spec: ConstraintSpec::AlwaysValid,
                    checker: Checker::AlwaysValid,
                }))
            }
        }
    }
}

fn compile_annotation(
    annotation: &str,
    policy: MalformedPolicy,
) -> Result<(ConstraintSpec, Checker), AnnotationError> {
    let spec = ConstraintSpec::parse_with(annotation, policy)?;
    let checker = match policy {
        MalformedPolicy::Degrade => Checker::from_spec(&spec),
        MalformedPolicy::Reject => Checker::try_from_spec(&spec)?,
    };
    Ok((spec, checker))
}

/// Compiled checkers for every annotated, non-skipped field of `R`.
///
/// Immutable after compilation and safe to share between threads.
pub struct Schema<R> {
    fields: Vec<CompiledField<R>>,
    label_separator: String,
}

impl<R> Schema<R> {
    /// Compiles descriptors with the default (lenient) configuration.
    #[must_use]
    pub fn new(fields: Vec<FieldDescriptor<R>>) -> Self {
        let compiled = fields
            .into_iter()
            .filter_map(|descriptor| {
                CompiledField::compile(descriptor, MalformedPolicy::Degrade)
                    .ok()
                    .flatten()
            })
            .collect();
        Self::finish(compiled, ValidatorConfig::default().label_separator)
    }

    /// Compiles descriptors with the given configuration.
    ///
    /// Fails only under [`MalformedPolicy::Reject`], on the first malformed
    /// annotation.
    pub fn with_config(
        fields: Vec<FieldDescriptor<R>>,
        config: &ValidatorConfig,
    ) -> Result<Self, SchemaError> {
        let mut compiled = Vec::with_capacity(fields.len());
        for descriptor in fields {
            if let Some(field) = CompiledField::compile(descriptor, config.malformed)? {
                compiled.push(field);
            }
        }
        Ok(Self::finish(compiled, config.label_separator.clone()))
    }

    /// Starts an incremental schema definition.
    #[must_use]
    pub fn builder() -> SchemaBuilder<R> {
        SchemaBuilder::new()
    }

    fn finish(fields: Vec<CompiledField<R>>, label_separator: String) -> Self {
        tracing::debug!(
            record = std::any::type_name::<R>(),
            fields = fields.len(),
            "compiled validation schema"
        );
        Self {
            fields,
            label_separator,
        }
    }

    /// Validates one record. Every field is checked; failures keep field
    /// declaration order.
    pub fn validate(&self, record: &R) -> ValidationReport {
        let report: ValidationReport = self
            .fields
            .iter()
            .filter_map(|field| {
                let value = field.descriptor.value(record);
                field.checker.check(value).err().map(|error| {
                    FieldFailure::new(
                        field.descriptor.name,
                        field.descriptor.display_label(),
                        error,
                        &self.label_separator,
                    )
                })
            })
            .collect();

        tracing::trace!(
            record = std::any::type_name::<R>(),
            failures = report.len(),
            "validated record"
        );
        report
    }

    /// Number of validated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is validated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared names of the validated fields, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.descriptor.name)
    }

    /// The parsed spec of a validated field.
    #[must_use]
    pub fn spec(&self, field: &str) -> Option<&ConstraintSpec> {
        self.fields
            .iter()
            .find(|compiled| compiled.descriptor.name == field)
            .map(|compiled| &compiled.spec)
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("record", &std::any::type_name::<R>())
            .field(
                "fields",
                &self
                    .fields
                    .iter()
                    .map(|field| (field.descriptor.name, &field.spec))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Incremental [`Schema`] definition.
///
/// # Examples
///
/// ```
/// use fieldcheck::{AsFieldValue, FieldDescriptor, FieldValue, Schema, ValidatorConfig};
///
/// struct Login {
///     email: String,
/// }
///
/// fn email(record: &Login) -> FieldValue<'_> {
///     record.email.as_field_value()
/// }
///
/// let schema = Schema::builder()
///     .field(FieldDescriptor::new("email", email).with_annotation("email"))
///     .config(ValidatorConfig::strict())
///     .build()
///     .unwrap();
///
/// let report = schema.validate(&Login { email: "nope".into() });
/// assert_eq!(report.messages(), vec!["email is not a valid email address"]);
/// ```
pub struct SchemaBuilder<R> {
    fields: Vec<FieldDescriptor<R>>,
    config: ValidatorConfig,
}

impl<R> SchemaBuilder<R> {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            config: ValidatorConfig::default(),
        }
    }

    /// Adds a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, descriptor: FieldDescriptor<R>) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Adds several fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn fields(mut self, descriptors: impl IntoIterator<Item = FieldDescriptor<R>>) -> Self {
        self.fields.extend(descriptors);
        self
    }

    /// Replaces the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Compiles the schema.
    pub fn build(self) -> Result<Schema<R>, SchemaError> {
        Schema::with_config(self.fields, &self.config)
    }
}

impl<R> Default for SchemaBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::AsFieldValue;
    use pretty_assertions::assert_eq;

    struct Account {
        name: String,
        email: String,
        age: i32,
        code: String,
    }

    fn name(r: &Account) -> FieldValue<'_> {
        r.name.as_field_value()
    }
    fn email(r: &Account) -> FieldValue<'_> {
        r.email.as_field_value()
    }
    fn age(r: &Account) -> FieldValue<'_> {
        r.age.as_field_value()
    }
    fn code(r: &Account) -> FieldValue<'_> {
        r.code.as_field_value()
    }

    fn account() -> Account {
        Account {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: 36,
            code: "AB-12".into(),
        }
    }

    fn descriptors() -> Vec<FieldDescriptor<Account>> {
        vec![
            FieldDescriptor::new("name", name)
                .with_annotation("string,min=1,max=10")
                .with_label("Full name")
                .with_serialized_name("full_name"),
            FieldDescriptor::new("email", email)
                .with_annotation("email")
                .with_serialized_name("mail"),
            FieldDescriptor::new("age", age).with_annotation("number,min=18,max=120"),
            FieldDescriptor::new("code", code).with_annotation("regex,[A-Z]{2}-\\d{2}"),
        ]
    }

    #[test]
    fn test_valid_record() {
        let schema = Schema::new(descriptors());
        assert_eq!(schema.len(), 4);
        assert!(schema.validate(&account()).is_valid());
    }

    #[test]
    fn test_collects_every_failure_in_declaration_order() {
        let schema = Schema::new(descriptors());
        let record = Account {
            name: String::new(),
            email: "not-an-email".into(),
            age: 200,
            code: "ab-12".into(),
        };

        assert_eq!(
            schema.validate(&record).into_messages(),
            vec![
                "Full name must not be empty",
                "mail is not a valid email address",
                "age must not exceed 120.00",
                "code does not match the required pattern",
            ]
        );
    }

    #[test]
    fn test_label_precedence() {
        let base = FieldDescriptor::new("name", name);
        assert_eq!(base.display_label(), "name");
        assert_eq!(base.with_serialized_name("nm").display_label(), "nm");
        assert_eq!(
            base.with_serialized_name("nm").with_label("Name").display_label(),
            "Name"
        );
        assert_eq!(base.with_label("").display_label(), "name");
    }

    #[test]
    fn test_skips_absent_empty_and_sentinel_annotations() {
        let schema = Schema::new(vec![
            FieldDescriptor::new("name", name),
            FieldDescriptor::new("email", email).with_annotation(""),
            FieldDescriptor::new("age", age).with_annotation("-"),
            FieldDescriptor::new("code", code).with_annotation("string,min=1"),
        ]);
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["code"]);
    }

    #[test]
    fn test_zero_annotated_fields_is_valid() {
        let schema: Schema<Account> = Schema::new(vec![FieldDescriptor::new("name", name)]);
        assert!(schema.is_empty());
        assert!(schema.validate(&account()).is_valid());
    }

    #[test]
    fn test_unrecognized_kind_never_fails() {
        let schema = Schema::new(vec![FieldDescriptor::new("age", age).with_annotation("uuid")]);
        let record = Account { age: -1, ..account() };
        assert!(schema.validate(&record).is_valid());
        assert_eq!(schema.spec("age"), Some(&ConstraintSpec::AlwaysValid));
    }

    #[test]
    fn test_lenient_degrades_malformed_bounds() {
        let schema = Schema::new(vec![
            FieldDescriptor::new("name", name).with_annotation("string,min=1,max=2,max=3"),
        ]);
        let record = Account {
            name: String::new(),
            ..account()
        };
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.spec("name"), Some(&ConstraintSpec::AlwaysValid));
        assert!(schema.validate(&record).is_valid());
    }

    #[test]
    fn test_lenient_reports_bad_pattern_per_field() {
        let schema = Schema::new(vec![
            FieldDescriptor::new("code", code).with_annotation("regex,[A-Z"),
        ]);
        let report = schema.validate(&account());
        assert_eq!(report.len(), 1);
        assert_eq!(report.failures()[0].error.code, "invalid_pattern");
        assert!(report.failures()[0].message.starts_with("code "));
    }

    #[test]
    fn test_lenient_email_ignores_parameters() {
        let schema = Schema::new(vec![
            FieldDescriptor::new("email", email).with_annotation("email,required"),
        ]);
        let record = Account {
            email: "not-an-email".into(),
            ..account()
        };
        assert_eq!(schema.spec("email"), Some(&ConstraintSpec::Email));
        assert_eq!(
            schema.validate(&record).into_messages(),
            vec!["email is not a valid email address"]
        );
        assert!(schema.validate(&account()).is_valid());
    }

    #[test]
    fn test_strict_rejects_email_parameters() {
        let err = Schema::with_config(
            vec![FieldDescriptor::new("email", email).with_annotation("email,required")],
            &ValidatorConfig::strict(),
        )
        .unwrap_err();
        assert_eq!(err.field, "email");
        assert!(matches!(err.source, AnnotationError::UnexpectedParameters { .. }));
    }

    #[test]
    fn test_strict_rejects_malformed_bounds() {
        let err = Schema::with_config(
            vec![FieldDescriptor::new("age", age).with_annotation("number,min=abc")],
            &ValidatorConfig::strict(),
        )
        .unwrap_err();

        assert_eq!(err.field, "age");
        assert_eq!(err.annotation, "number,min=abc");
        assert_eq!(
            err.source,
            AnnotationError::InvalidBound {
                key: "min",
                value: "abc".into()
            }
        );
    }

    #[test]
    fn test_strict_rejects_bad_pattern() {
        let err = Schema::builder()
            .fields(descriptors())
            .field(FieldDescriptor::new("code", code).with_annotation("regex,(x"))
            .config(ValidatorConfig::strict())
            .build()
            .unwrap_err();
        assert!(matches!(err.source, AnnotationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_strict_still_accepts_unrecognized_kind() {
        let schema = Schema::with_config(
            vec![FieldDescriptor::new("name", name).with_annotation("slug")],
            &ValidatorConfig::strict(),
        )
        .unwrap();
        assert!(schema.validate(&account()).is_valid());
    }

    #[test]
    fn test_label_separator_from_config() {
        let schema = Schema::builder()
            .field(FieldDescriptor::new("age", age).with_annotation("number,min=18"))
            .config(ValidatorConfig::default().with_label_separator(": "))
            .build()
            .unwrap();
        let record = Account { age: 3, ..account() };
        assert_eq!(schema.validate(&record).messages(), vec!["age: must be at least 18"]);
    }

    #[test]
    fn test_does_not_mutate_record() {
        let schema = Schema::new(descriptors());
        let record = account();
        let _ = schema.validate(&record);
        let _ = schema.validate(&record);
        assert_eq!(record.name, "Ada");
        assert_eq!(record.age, 36);
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema<Account>>();
    }
}
