use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{
    as_object, decode, number, optional_array, string, ErrorMap, FieldErrors, Schema,
};
use crate::session::SessionSummary;

/// A club PC as the backend returns it. `usb_amout` keeps the backend's
/// spelling; renaming it would break the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pc {
    pub pc_id: i64,
    pub cpu: String,
    pub ram: i64,
    pub videocard: String,
    pub hard_disc: String,
    pub usb_amout: i64,
    pub os: String,
    pub buy_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionSummary>>,
}

/// Payload for registering a PC; `pc_id` is server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcCreate {
    pub cpu: String,
    pub ram: i64,
    pub videocard: String,
    pub hard_disc: String,
    pub usb_amout: i64,
    pub os: String,
    pub buy_date: String,
}

/// Partial patch: only supplied fields are validated and sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PcUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videocard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_disc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usb_amout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_date: Option<String>,
}

fn check_fields(map: &serde_json::Map<String, Value>, errors: &mut FieldErrors, required: bool) {
    let text_fields = [
        ("cpu", "CPU is required"),
        ("videocard", "Videocard is required"),
        ("hard_disc", "Hard disc is required"),
        ("os", "OS is required"),
    ];
    for (path, message) in text_fields {
        let field = string(path).min(1, message);
        if required {
            field.required(map, errors);
        } else {
            field.optional(map, errors);
        }
    }

    let ram = number("ram")
        .int("RAM must be an integer")
        .positive("RAM must be a positive integer");
    let usb = number("usb_amout")
        .int("USB amount must be an integer")
        .nonnegative("USB amount must be non-negative");
    let buy_date = string("buy_date").date("Invalid date format");
    if required {
        ram.required(map, errors);
        usb.required(map, errors);
        buy_date.required(map, errors);
    } else {
        ram.optional(map, errors);
        usb.optional(map, errors);
        buy_date.optional(map, errors);
    }
}

pub struct PcCreateSchema;

impl Schema for PcCreateSchema {
    type Output = PcCreate;

    fn name(&self) -> &'static str {
        "PcCreate"
    }

    fn check(&self, input: &Value) -> Result<PcCreate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        check_fields(map, &mut errors, true);
        optional_array("sessions", map, &mut errors);
        errors.finish()?;
        decode(input)
    }
}

pub struct PcUpdateSchema;

impl Schema for PcUpdateSchema {
    type Output = PcUpdate;

    fn name(&self) -> &'static str {
        "PcUpdate"
    }

    fn check(&self, input: &Value) -> Result<PcUpdate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        check_fields(map, &mut errors, false);
        errors.finish()?;
        decode(input)
    }
}
