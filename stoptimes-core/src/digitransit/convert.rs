//! Conversion from raw feed records to domain departures.
//!
//! This module handles the transformation of raw Digitransit departure
//! rows into validated [`Departure`] values: strict field validation,
//! vehicle classification and route code repair.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{Departure, RouteCode, VehicleKind};

/// Error raised when a raw departure record is structurally unusable.
///
/// One failing record yields no [`Departure`] at all; callers processing
/// a batch are expected to skip the failing record and continue with the
/// remainder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed departure record: `{field}` {problem}")]
pub struct MalformedRecord {
    field: &'static str,
    problem: &'static str,
}

impl MalformedRecord {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            problem: "is missing",
        }
    }

    fn wrong_type(field: &'static str, problem: &'static str) -> Self {
        Self { field, problem }
    }

    fn out_of_range(field: &'static str) -> Self {
        Self {
            field,
            problem: "yields an unrepresentable departure time",
        }
    }

    /// Dotted path of the offending field (e.g. `trip.route.type`).
    pub fn field(&self) -> &'static str {
        self.field
    }
}

/// Parse one raw feed record into a validated [`Departure`].
///
/// The record must carry the feed's departure-row shape:
///
/// ```json
/// {
///   "realtime": false,
///   "serviceDay": 1465851600,
///   "scheduledDeparture": 64620,
///   "realtimeDeparture": 64620,
///   "trip": {
///     "route": {
///       "shortName": "A",
///       "type": "RAIL"
///     },
///     "tripHeadsign": "Helsinki"
///   }
/// }
/// ```
///
/// `serviceDay` anchors the operating day in epoch seconds; the two
/// departure fields are second offsets past that anchor. Every element
/// above is mandatory except `trip.route.shortName`, whose absence is
/// repaired by [`RouteCode::from_feed`]. A missing or wrong-typed
/// mandatory element fails with [`MalformedRecord`] and yields no
/// departure at all. JSON `null` counts as absent.
pub fn parse_departure(record: &Value) -> Result<Departure, MalformedRecord> {
    let trip = object_field(record, "trip", "trip")?;
    let route = object_field(trip, "route", "trip.route")?;

    let service_day = int_field(record, "serviceDay")?;
    let scheduled_offset = int_field(record, "scheduledDeparture")?;
    let realtime_offset = int_field(record, "realtimeDeparture")?;
    let realtime = bool_field(record, "realtime")?;

    let scheduled_departure = instant(service_day, scheduled_offset, "scheduledDeparture")?;
    let realtime_departure = instant(service_day, realtime_offset, "realtimeDeparture")?;

    let vehicle = VehicleKind::from_feed_code(str_field(route, "type", "trip.route.type")?);

    let short_name = optional_str_field(route, "shortName", "trip.route.shortName")?;
    let route_code = RouteCode::from_feed(short_name, vehicle);

    let headsign = str_field(trip, "tripHeadsign", "trip.tripHeadsign")?.to_string();

    Ok(Departure {
        route: route_code,
        vehicle,
        headsign,
        scheduled_departure,
        realtime_departure,
        realtime,
    })
}

/// Look up `key` in `obj`, treating JSON `null` as absent.
fn lookup<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn object_field<'a>(
    obj: &'a Value,
    key: &str,
    path: &'static str,
) -> Result<&'a Value, MalformedRecord> {
    let value = lookup(obj, key).ok_or_else(|| MalformedRecord::missing(path))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(MalformedRecord::wrong_type(path, "is not an object"))
    }
}

fn int_field(obj: &Value, path: &'static str) -> Result<i64, MalformedRecord> {
    let value = lookup(obj, path).ok_or_else(|| MalformedRecord::missing(path))?;
    value
        .as_i64()
        .ok_or_else(|| MalformedRecord::wrong_type(path, "is not an integer"))
}

fn bool_field(obj: &Value, path: &'static str) -> Result<bool, MalformedRecord> {
    let value = lookup(obj, path).ok_or_else(|| MalformedRecord::missing(path))?;
    value
        .as_bool()
        .ok_or_else(|| MalformedRecord::wrong_type(path, "is not a boolean"))
}

fn str_field<'a>(
    obj: &'a Value,
    key: &str,
    path: &'static str,
) -> Result<&'a str, MalformedRecord> {
    let value = lookup(obj, key).ok_or_else(|| MalformedRecord::missing(path))?;
    value
        .as_str()
        .ok_or_else(|| MalformedRecord::wrong_type(path, "is not a string"))
}

/// Like [`str_field`], but absence (or JSON `null`) is not an error.
fn optional_str_field<'a>(
    obj: &'a Value,
    key: &str,
    path: &'static str,
) -> Result<Option<&'a str>, MalformedRecord> {
    match lookup(obj, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| MalformedRecord::wrong_type(path, "is not a string")),
    }
}

/// Resolve a departure offset against the operating-day anchor.
fn instant(
    service_day: i64,
    offset: i64,
    path: &'static str,
) -> Result<DateTime<Utc>, MalformedRecord> {
    let secs = service_day
        .checked_add(offset)
        .ok_or_else(|| MalformedRecord::out_of_range(path))?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| MalformedRecord::out_of_range(path))
}
