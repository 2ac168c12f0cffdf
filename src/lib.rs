//! Validation and normalization core for the computer-club console.
//!
//! Raw form and API payloads come in as `serde_json::Value`, the per-entity
//! schemas check them and hand back typed records, and the value parsers
//! normalize the polymorphic `Duration`/`Cost` fields for display and
//! arithmetic. Everything here is a pure synchronous function; transport,
//! routing and UI live with the callers.

pub mod client;
pub mod date;
pub mod pc;
pub mod schema;
pub mod session;
pub mod validate;
pub mod value;

pub use client::{Client, ClientCreate, ClientCreateSchema, ClientUpdate, ClientUpdateSchema};
pub use date::{
    format_date, format_date_for_input, format_date_time, format_relative_time, parse_date_lenient,
};
pub use pc::{Pc, PcCreate, PcCreateSchema, PcUpdate, PcUpdateSchema};
pub use schema::{ErrorMap, Schema};
pub use session::{
    PcInfo, Session, SessionCreate, SessionCreateSchema, SessionSummary, SessionUpdate,
    SessionUpdateSchema,
};
pub use validate::{
    format_validation_errors, get_field_error, safe_parse, transform_response, validate_data,
    validate_or_throw, SchemaValidationError, Validated,
};
pub use value::{
    duration_to_time_string, format_cost_number, format_cost_number_with, format_currency,
    format_currency_with, format_duration, parse_cost, parse_time_string, Cost, CostParts,
    Duration, DurationParts,
};

#[cfg(test)]
mod tests;
