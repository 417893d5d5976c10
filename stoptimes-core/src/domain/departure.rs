//! The normalized departure value object.

use chrono::{DateTime, Duration, Utc};

use super::{RouteCode, VehicleKind};

/// A single normalized upcoming departure.
///
/// Constructed atomically from one raw feed record by
/// [`parse_departure`](crate::digitransit::parse_departure) and never
/// mutated afterwards. A departure has no identity beyond its field
/// values; two departures with identical fields are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Route display code (e.g. "550" or "U"). Never empty.
    pub route: RouteCode,

    /// Vehicle classification of the route.
    pub vehicle: VehicleKind,

    /// Destination label shown to riders. May legitimately be empty.
    pub headsign: String,

    /// When the departure is scheduled to happen.
    pub scheduled_departure: DateTime<Utc>,

    /// When the departure is expected to happen based on live data.
    /// Equals the scheduled instant when the feed carries no live update.
    pub realtime_departure: DateTime<Utc>,

    /// Whether `realtime_departure` is an actual live prediction rather
    /// than a repeat of the schedule.
    pub realtime: bool,
}

impl Departure {
    /// Returns the best available departure instant (live if available,
    /// else scheduled).
    pub fn departure_time(&self) -> DateTime<Utc> {
        if self.realtime {
            self.realtime_departure
        } else {
            self.scheduled_departure
        }
    }

    /// Returns true if the live prediction is later than the schedule.
    ///
    /// Live predictions may also be *earlier* than the schedule (early
    /// departures); that is not a delay.
    pub fn is_delayed(&self) -> bool {
        self.realtime && self.realtime_departure > self.scheduled_departure
    }

    /// Returns the delay duration if delayed.
    pub fn delay(&self) -> Option<Duration> {
        if self.is_delayed() {
            Some(
                self.realtime_departure
                    .signed_duration_since(self.scheduled_departure),
            )
        } else {
            None
        }
    }
}
