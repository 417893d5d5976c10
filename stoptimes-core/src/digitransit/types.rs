//! Digitransit routing API response DTOs.
//!
//! These types map to the stoptimes query response of the Digitransit
//! GraphQL routing API. Omittable fields use `Option`. Departure rows
//! are kept as raw JSON values: each row is validated individually by
//! [`parse_departure`](super::parse_departure), and one malformed row
//! must not fail deserialization of the whole response.

use serde::Deserialize;
use serde_json::Value;

/// Response envelope of a stoptimes query.
#[derive(Debug, Clone, Deserialize)]
pub struct StoptimesResponse {
    /// The GraphQL `data` object.
    pub data: ResponseData,
}

/// The `data` object of a stoptimes response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseData {
    /// The queried stop, or `None` when the stop id matched nothing.
    pub stop: Option<StopDetails>,
}

/// A stop with its upcoming departure rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDetails {
    /// Human-readable stop name.
    pub name: String,

    /// Rider-facing stop code (e.g. "H2030"), if the stop has one.
    pub code: Option<String>,

    /// Raw departure rows, one per upcoming departure.
    #[serde(rename = "stoptimesWithoutPatterns")]
    pub stoptimes: Vec<Value>,
}
