use serde::{Deserialize, Serialize};

/// Session duration as the backend sends it: either a ready-made display
/// string or a parts object with any subset of hours/minutes/seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Duration {
    Text(String),
    Parts(DurationParts),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DurationParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
}

/// Session cost: a plain number, a string with optional currency noise
/// ("125.50 ₴"), or an object carrying `amount` or `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cost {
    Number(f64),
    Text(String),
    Parts(CostParts),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

pub const DEFAULT_CURRENCY: &str = "₴";

/// Normalize any cost shape to a plain number. Unparseable text and empty
/// parts objects come back as 0 rather than an error.
pub fn parse_cost(cost: &Cost) -> f64 {
    match cost {
        Cost::Number(n) => *n,
        Cost::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        Cost::Parts(parts) => parts.amount.or(parts.value).unwrap_or(0.0),
    }
}

/// Format a cost with the default hryvnia symbol and two decimals.
pub fn format_currency(cost: &Cost) -> String {
    format_currency_with(cost, DEFAULT_CURRENCY, 2)
}

pub fn format_currency_with(cost: &Cost, currency: &str, decimals: usize) -> String {
    format!("{:.*} {}", decimals, parse_cost(cost), currency)
}

/// Fixed-decimal cost without a currency symbol, for table cells.
pub fn format_cost_number(cost: &Cost) -> String {
    format_cost_number_with(cost, 2)
}

pub fn format_cost_number_with(cost: &Cost, decimals: usize) -> String {
    format!("{:.*}", decimals, parse_cost(cost))
}

/// Human-readable duration ("2г 30хв"). Text durations pass through
/// verbatim; zero and absent parts are skipped, an empty result becomes "0с".
pub fn format_duration(duration: &Duration) -> String {
    match duration {
        Duration::Text(text) => text.clone(),
        Duration::Parts(parts) => {
            let mut out: Vec<String> = Vec::new();
            if let Some(hours) = parts.hours {
                if hours != 0.0 {
                    out.push(format!("{}г", hours));
                }
            }
            if let Some(minutes) = parts.minutes {
                if minutes != 0.0 {
                    out.push(format!("{}хв", minutes));
                }
            }
            if let Some(seconds) = parts.seconds {
                if seconds != 0.0 {
                    out.push(format!("{}с", seconds));
                }
            }
            if out.is_empty() {
                "0с".to_string()
            } else {
                out.join(" ")
            }
        }
    }
}

/// Zero-padded HH:MM:SS for time input fields. Text durations pass through.
pub fn duration_to_time_string(duration: &Duration) -> String {
    match duration {
        Duration::Text(text) => text.clone(),
        Duration::Parts(parts) => format!(
            "{:02}:{:02}:{:02}",
            parts.hours.unwrap_or(0.0),
            parts.minutes.unwrap_or(0.0),
            parts.seconds.unwrap_or(0.0)
        ),
    }
}

/// Parse an HH:MM:SS input back into parts. Missing or non-numeric segments
/// default to zero. Minutes and seconds are NOT clamped to 0-59: call sites
/// pass already-validated display strings through unchanged.
pub fn parse_time_string(text: &str) -> DurationParts {
    let mut segments = text.split(':').map(|s| s.trim().parse::<f64>().unwrap_or(0.0));
    DurationParts {
        hours: Some(segments.next().unwrap_or(0.0)),
        minutes: Some(segments.next().unwrap_or(0.0)),
        seconds: Some(segments.next().unwrap_or(0.0)),
    }
}
