use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{
    as_object, decode, json_type, number, optional_object, string, ErrorMap, FieldErrors, Schema,
};
use crate::value::{Cost, Duration};

/// A rental session as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: i64,
    pub pc_id: i64,
    pub client_phone: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration: Duration,
    #[serde(rename = "Cost")]
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc: Option<PcInfo>,
}

/// Payload for creating a session; `session_id` is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreate {
    pub pc_id: i64,
    pub client_phone: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration: Duration,
    #[serde(rename = "Cost")]
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc: Option<PcInfo>,
}

/// Partial patch: only supplied fields are validated and sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "Duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(rename = "Cost", default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

/// PC details embedded in a session response. Read-only, never validated
/// for write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcInfo {
    pub pc_id: i64,
    pub cpu: String,
    pub ram: i64,
    pub videocard: String,
    pub hard_disc: String,
    pub usb_amout: i64,
    pub os: String,
    pub buy_date: String,
}

/// Session row embedded in client/PC responses. Which foreign key is
/// present depends on the parent entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: i64,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Duration")]
    pub duration: Duration,
    #[serde(rename = "Cost")]
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
}

fn check_duration(path: &'static str, value: &Value, errors: &mut FieldErrors) {
    match value {
        Value::String(text) => {
            if text.is_empty() {
                errors.push(path, "Duration is required");
            }
        }
        Value::Object(map) => {
            for member in ["hours", "minutes", "seconds"] {
                match map.get(member) {
                    None => {}
                    Some(Value::Number(n)) => {
                        if n.as_f64().unwrap_or(0.0) < 0.0 {
                            errors.push(path, format!("{member} must be non-negative"));
                        }
                    }
                    Some(other) => errors.push(
                        path,
                        format!("{member} must be a number, received {}", json_type(other)),
                    ),
                }
            }
        }
        other => errors.push(
            path,
            format!("Expected string or duration parts, received {}", json_type(other)),
        ),
    }
}

fn check_cost(path: &'static str, value: &Value, errors: &mut FieldErrors) {
    match value {
        Value::Number(n) => {
            if n.as_f64().unwrap_or(0.0) < 0.0 {
                errors.push(path, "Cost must be non-negative");
            }
        }
        Value::String(text) => {
            if text.is_empty() {
                errors.push(path, "Cost is required");
            } else {
                let cleaned: String = text
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                if cleaned.parse::<f64>().is_err() {
                    errors.push(path, "Cost must be a number");
                }
            }
        }
        Value::Object(map) => {
            for member in ["amount", "value"] {
                match map.get(member) {
                    None => {}
                    Some(Value::Number(n)) => {
                        if n.as_f64().unwrap_or(0.0) < 0.0 {
                            errors.push(path, format!("{member} must be non-negative"));
                        }
                    }
                    Some(other) => errors.push(
                        path,
                        format!("{member} must be a number, received {}", json_type(other)),
                    ),
                }
            }
            if let Some(currency) = map.get("currency") {
                if !currency.is_string() {
                    errors.push(
                        path,
                        format!("currency must be a string, received {}", json_type(currency)),
                    );
                }
            }
        }
        other => errors.push(
            path,
            format!(
                "Expected number, string or cost parts, received {}",
                json_type(other)
            ),
        ),
    }
}

fn required_union(
    path: &'static str,
    input: &Map<String, Value>,
    errors: &mut FieldErrors,
    check: fn(&'static str, &Value, &mut FieldErrors),
) {
    match input.get(path) {
        None => errors.push(path, "Required"),
        Some(value) => check(path, value, errors),
    }
}

fn optional_union(
    path: &'static str,
    input: &Map<String, Value>,
    errors: &mut FieldErrors,
    check: fn(&'static str, &Value, &mut FieldErrors),
) {
    if let Some(value) = input.get(path) {
        check(path, value, errors);
    }
}

pub struct SessionCreateSchema;

impl Schema for SessionCreateSchema {
    type Output = SessionCreate;

    fn name(&self) -> &'static str {
        "SessionCreate"
    }

    fn check(&self, input: &Value) -> Result<SessionCreate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        number("pc_id")
            .int("PC ID must be an integer")
            .positive("PC ID must be positive")
            .required(map, &mut errors);
        string("client_phone")
            .min(1, "Client phone is required")
            .required(map, &mut errors);
        string("Time")
            .date("Invalid date format")
            .required(map, &mut errors);
        required_union("Duration", map, &mut errors, check_duration);
        required_union("Cost", map, &mut errors, check_cost);
        optional_object("pc", map, &mut errors);
        errors.finish()?;
        decode(input)
    }
}

pub struct SessionUpdateSchema;

impl Schema for SessionUpdateSchema {
    type Output = SessionUpdate;

    fn name(&self) -> &'static str {
        "SessionUpdate"
    }

    fn check(&self, input: &Value) -> Result<SessionUpdate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        number("pc_id")
            .int("PC ID must be an integer")
            .positive("PC ID must be positive")
            .optional(map, &mut errors);
        string("client_phone")
            .min(1, "Client phone is required")
            .optional(map, &mut errors);
        string("Time")
            .date("Invalid date format")
            .optional(map, &mut errors);
        optional_union("Duration", map, &mut errors, check_duration);
        optional_union("Cost", map, &mut errors, check_cost);
        errors.finish()?;
        decode(input)
    }
}
