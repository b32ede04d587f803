use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a company's crop price list.
///
/// `crop_name` is the natural key: update and delete address the crop by
/// the name it had when it was loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crop {
    pub crop_name: String,
    pub rate_per_unit: f64,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl Crop {
    /// Whether the list should show an "Updated" line for this crop.
    pub fn was_updated(&self) -> bool {
        match (self.updated_at, self.created_at) {
            (Some(updated), Some(created)) => updated != created,
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// Rate as it is put back into the edit form.
    ///
    /// Uses the shortest text that parses back to the same value, so saving
    /// an unchanged form never alters the stored rate.
    pub fn rate_input(&self) -> String {
        self.rate_per_unit.to_string()
    }
}

/// Render a rate for display, rounded to two places without trailing
/// zeros: `200`, `150.5`, `12.25`.
pub fn format_rate(rate: f64) -> String {
    let fixed = format!("{:.2}", rate);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `GET /admin/crops` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CropList {
    #[serde(default)]
    pub crop_details: Vec<Crop>,
}

/// `POST /admin/crops` and `PUT /admin/crops/{name}` success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropMutation {
    #[serde(default)]
    pub message: Option<String>,
    pub crop: Crop,
}

/// Parse a backend timestamp.
///
/// The backend may emit RFC 3339, RFC 2822 (`Tue, 18 Oct 2026 10:00:00 GMT`)
/// or a naive ISO 8601 timestamp without an offset, which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}
