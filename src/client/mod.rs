use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{
    as_object, decode, optional_array, string, ErrorMap, FieldErrors, Schema, StringField,
    PHONE_PATTERN,
};
use crate::session::SessionSummary;

/// A club client. The phone number is the identifier and is supplied by
/// the operator at creation, so Create carries the full field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub phone: String,
    pub full_name: String,
    pub birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<SessionSummary>>,
}

pub type ClientCreate = Client;

/// Partial patch: only supplied fields are validated and sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
}

fn phone_field() -> StringField {
    string("phone").min(1, "Phone is required").pattern(
        &PHONE_PATTERN,
        "Phone must contain only numbers and valid characters",
    )
}

fn full_name_field() -> StringField {
    string("full_name")
        .min(1, "Full name is required")
        .min(2, "Name must be at least 2 characters")
}

pub struct ClientCreateSchema;

impl Schema for ClientCreateSchema {
    type Output = ClientCreate;

    fn name(&self) -> &'static str {
        "ClientCreate"
    }

    fn check(&self, input: &Value) -> Result<ClientCreate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        phone_field().required(map, &mut errors);
        full_name_field().required(map, &mut errors);
        string("birth")
            .date("Invalid date format")
            .required(map, &mut errors);
        optional_array("sessions", map, &mut errors);
        errors.finish()?;
        decode(input)
    }
}

pub struct ClientUpdateSchema;

impl Schema for ClientUpdateSchema {
    type Output = ClientUpdate;

    fn name(&self) -> &'static str {
        "ClientUpdate"
    }

    fn check(&self, input: &Value) -> Result<ClientUpdate, ErrorMap> {
        let map = as_object(input)?;
        let mut errors = FieldErrors::new();
        phone_field().optional(map, &mut errors);
        full_name_field().optional(map, &mut errors);
        string("birth")
            .date("Invalid date format")
            .optional(map, &mut errors);
        errors.finish()?;
        decode(input)
    }
}
