use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::date::parse_date_lenient;

/// Field path -> every violated constraint message, in rule order.
pub type ErrorMap = BTreeMap<String, Vec<String>>;

/// A stateless validator over raw JSON input producing a typed record.
/// Implementations drop unknown input fields and fail all-or-nothing:
/// one bad field fails the whole call.
pub trait Schema {
    type Output;

    fn name(&self) -> &'static str;

    fn check(&self, input: &Value) -> Result<Self::Output, ErrorMap>;
}

pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap());

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Accumulates violations while a schema walks its fields.
#[derive(Debug, Default)]
pub struct FieldErrors(ErrorMap);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: &str, message: impl Into<String>) {
        self.0.entry(path.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> ErrorMap {
        self.0
    }

    pub fn finish(self) -> Result<(), ErrorMap> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

pub(crate) fn as_object(input: &Value) -> Result<&Map<String, Value>, ErrorMap> {
    match input {
        Value::Object(map) => Ok(map),
        other => {
            let mut errors = ErrorMap::new();
            errors.insert(
                String::new(),
                vec![format!("Expected object, received {}", json_type(other))],
            );
            Err(errors)
        }
    }
}

/// Decode the (already validated) input into its record type. Unknown
/// fields are dropped by serde; anything the schema left unchecked that
/// still fails to decode is reported at the root path.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(input: &Value) -> Result<T, ErrorMap> {
    serde_json::from_value(input.clone()).map_err(|e| {
        let mut errors = ErrorMap::new();
        errors.insert(String::new(), vec![format!("Invalid payload: {e}")]);
        errors
    })
}

enum StringRule {
    Min(usize, &'static str),
    Pattern(&'static Lazy<Regex>, &'static str),
    Date(&'static str),
}

/// Rule chain for a string field. The type check runs first and a mismatch
/// suppresses the rest of the chain; otherwise every violated rule reports,
/// in declaration order.
pub struct StringField {
    path: &'static str,
    rules: Vec<StringRule>,
}

pub fn string(path: &'static str) -> StringField {
    StringField {
        path,
        rules: Vec::new(),
    }
}

impl StringField {
    pub fn min(mut self, len: usize, message: &'static str) -> Self {
        self.rules.push(StringRule::Min(len, message));
        self
    }

    pub fn pattern(mut self, regex: &'static Lazy<Regex>, message: &'static str) -> Self {
        self.rules.push(StringRule::Pattern(regex, message));
        self
    }

    pub fn date(mut self, message: &'static str) -> Self {
        self.rules.push(StringRule::Date(message));
        self
    }

    fn apply(&self, text: &str, errors: &mut FieldErrors) {
        for rule in &self.rules {
            match rule {
                StringRule::Min(len, message) => {
                    if text.chars().count() < *len {
                        errors.push(self.path, *message);
                    }
                }
                StringRule::Pattern(regex, message) => {
                    if !regex.is_match(text) {
                        errors.push(self.path, *message);
                    }
                }
                StringRule::Date(message) => {
                    if parse_date_lenient(text).is_none() {
                        errors.push(self.path, *message);
                    }
                }
            }
        }
    }

    pub fn required(&self, input: &Map<String, Value>, errors: &mut FieldErrors) {
        match input.get(self.path) {
            None => errors.push(self.path, "Required"),
            Some(Value::String(text)) => self.apply(text, errors),
            Some(other) => errors.push(
                self.path,
                format!("Expected string, received {}", json_type(other)),
            ),
        }
    }

    pub fn optional(&self, input: &Map<String, Value>, errors: &mut FieldErrors) {
        match input.get(self.path) {
            None => {}
            Some(Value::String(text)) => self.apply(text, errors),
            Some(other) => errors.push(
                self.path,
                format!("Expected string, received {}", json_type(other)),
            ),
        }
    }
}

enum NumberRule {
    Int(&'static str),
    Positive(&'static str),
    NonNegative(&'static str),
}

pub struct NumberField {
    path: &'static str,
    rules: Vec<NumberRule>,
}

pub fn number(path: &'static str) -> NumberField {
    NumberField {
        path,
        rules: Vec::new(),
    }
}

impl NumberField {
    pub fn int(mut self, message: &'static str) -> Self {
        self.rules.push(NumberRule::Int(message));
        self
    }

    pub fn positive(mut self, message: &'static str) -> Self {
        self.rules.push(NumberRule::Positive(message));
        self
    }

    pub fn nonnegative(mut self, message: &'static str) -> Self {
        self.rules.push(NumberRule::NonNegative(message));
        self
    }

    fn apply(&self, value: &Value, errors: &mut FieldErrors) {
        let n = value.as_f64().unwrap_or(0.0);
        for rule in &self.rules {
            match rule {
                NumberRule::Int(message) => {
                    if value.as_i64().is_none() {
                        errors.push(self.path, *message);
                    }
                }
                NumberRule::Positive(message) => {
                    if n <= 0.0 {
                        errors.push(self.path, *message);
                    }
                }
                NumberRule::NonNegative(message) => {
                    if n < 0.0 {
                        errors.push(self.path, *message);
                    }
                }
            }
        }
    }

    pub fn required(&self, input: &Map<String, Value>, errors: &mut FieldErrors) {
        match input.get(self.path) {
            None => errors.push(self.path, "Required"),
            Some(value @ Value::Number(_)) => self.apply(value, errors),
            Some(other) => errors.push(
                self.path,
                format!("Expected number, received {}", json_type(other)),
            ),
        }
    }

    pub fn optional(&self, input: &Map<String, Value>, errors: &mut FieldErrors) {
        match input.get(self.path) {
            None => {}
            Some(value @ Value::Number(_)) => self.apply(value, errors),
            Some(other) => errors.push(
                self.path,
                format!("Expected number, received {}", json_type(other)),
            ),
        }
    }
}

/// Read-only array field (nested session summaries): present input must be
/// an array, its entries are trusted API data and not validated for write.
pub(crate) fn optional_array(
    path: &'static str,
    input: &Map<String, Value>,
    errors: &mut FieldErrors,
) {
    if let Some(value) = input.get(path) {
        if !value.is_array() {
            errors.push(path, format!("Expected array, received {}", json_type(value)));
        }
    }
}

/// Read-only embedded object field, same contract as [`optional_array`].
pub(crate) fn optional_object(
    path: &'static str,
    input: &Map<String, Value>,
    errors: &mut FieldErrors,
) {
    if let Some(value) = input.get(path) {
        if !value.is_object() {
            errors.push(path, format!("Expected object, received {}", json_type(value)));
        }
    }
}
