//! Row and wire shapes for incident data.

use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// One incident record, as stored and as served.
///
/// `id` is assigned by the store at insert time and is unique only within its
/// vendor's store. `data` is the vendor-schema-dependent payload, stored as
/// text and re-parsed on read so responses nest it as JSON rather than a
/// string.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Incident {
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD`, no time component.
    pub incident_date: String,
    pub lat: f64,
    pub lng: f64,
    #[schema(value_type = Object)]
    pub data: JsonValue,
}

/// Derived aggregate: number of incidents recorded on one date.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct DateCount {
    pub incident_date: String,
    pub count: i64,
}
