//! Digitransit stoptimes feed handling.
//!
//! The Digitransit routing API delivers upcoming departures for a stop
//! as JSON rows. Key characteristics of the feed:
//! - All time fields are epoch seconds. Each row carries a `serviceDay`
//!   operating-day anchor plus per-departure second offsets; an offset
//!   may exceed 86400 for late-night trips logically belonging to the
//!   previous day.
//! - `realtimeDeparture` is always present and merely repeats the
//!   schedule when `realtime` is false.
//! - The vehicle vocabulary (`trip.route.type`) evolves independently
//!   of this crate and may contain unknown labels.
//!
//! Fetching is the embedding application's concern; this module only
//! validates and converts records that something else has fetched.

mod convert;
mod types;

pub use convert::{MalformedRecord, parse_departure};
pub use types::{ResponseData, StopDetails, StoptimesResponse};
