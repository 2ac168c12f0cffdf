use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::schema::{ErrorMap, Schema};

/// Outcome of [`validate_data`]: either the typed record or the per-field
/// message map. This path never fails through `Result`, mirroring how the
/// forms consume it.
#[derive(Debug, Clone, PartialEq)]
pub enum Validated<T> {
    Valid(T),
    Invalid(ErrorMap),
}

impl<T> Validated<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Validated::Valid(data) => Some(data),
            Validated::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Validated::Valid(_) => None,
            Validated::Invalid(errors) => Some(errors),
        }
    }
}

/// Aggregate of every field violation from a single validation attempt.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{schema} validation failed: {} invalid field(s)", errors.len())]
pub struct SchemaValidationError {
    pub schema: &'static str,
    pub errors: ErrorMap,
}

/// Validate without failing the call: the error map comes back as data.
pub fn validate_data<S: Schema>(schema: &S, input: &Value) -> Validated<S::Output> {
    match schema.check(input) {
        Ok(data) => Validated::Valid(data),
        Err(errors) => Validated::Invalid(errors),
    }
}

/// Validate and wrap failures in the structured aggregate error.
pub fn safe_parse<S: Schema>(schema: &S, input: &Value) -> Result<S::Output, SchemaValidationError> {
    schema.check(input).map_err(|errors| SchemaValidationError {
        schema: schema.name(),
        errors,
    })
}

/// Validate for call sites with no local handling: the error propagates to
/// the caller, usually ending up in a toast plus field highlights.
pub fn validate_or_throw<S: Schema>(
    schema: &S,
    input: &Value,
) -> Result<S::Output, SchemaValidationError> {
    safe_parse(schema, input).map_err(|err| {
        debug!(
            schema = err.schema,
            "validation failed:\n{}",
            format_validation_errors(&err.errors)
        );
        err
    })
}

/// Check an API response against its schema. A failure here is a backend
/// contract break rather than bad user input, so it logs at warn.
pub fn transform_response<S: Schema>(
    schema: &S,
    response: &Value,
) -> Result<S::Output, SchemaValidationError> {
    safe_parse(schema, response).map_err(|err| {
        warn!(
            schema = err.schema,
            "response failed validation:\n{}",
            format_validation_errors(&err.errors)
        );
        err
    })
}

/// One "field: message" line per violation, for console/log output. The UI
/// reads the first message per field directly instead.
pub fn format_validation_errors(errors: &ErrorMap) -> String {
    errors
        .iter()
        .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field}: {m}")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First message for a field, or nothing.
pub fn get_field_error<'a>(errors: &'a ErrorMap, path: &str) -> Option<&'a str> {
    errors.get(path).and_then(|messages| messages.first()).map(String::as_str)
}
