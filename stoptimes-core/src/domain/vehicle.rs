//! Vehicle classification of feed route types.

/// Vehicle category of a departure's route.
///
/// Classified from the feed's free-text route type via
/// [`VehicleKind::from_feed_code`]. The feed vocabulary evolves
/// independently of this crate, so unknown labels classify as [`Bus`]
/// rather than failing; a departure must not be lost over an
/// unrecognized vehicle label.
///
/// [`Bus`]: VehicleKind::Bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// Regular bus service.
    Bus,
    /// Tram / light rail.
    Tram,
    /// Commuter train (feed label `RAIL`).
    CommuterTrain,
    /// Metro (feed label `SUBWAY`).
    Subway,
}

impl VehicleKind {
    /// Classify a feed-supplied vehicle type string.
    ///
    /// Matching is exact and case-sensitive on the feed vocabulary:
    /// `BUS`, `TRAM`, `RAIL` and `SUBWAY`. Anything else classifies as
    /// [`VehicleKind::Bus`] and emits a warning through the `tracing`
    /// facade.
    ///
    /// # Examples
    ///
    /// ```
    /// use stoptimes_core::domain::VehicleKind;
    ///
    /// assert_eq!(VehicleKind::from_feed_code("RAIL"), VehicleKind::CommuterTrain);
    /// assert_eq!(VehicleKind::from_feed_code("FERRY"), VehicleKind::Bus);
    /// ```
    pub fn from_feed_code(code: &str) -> Self {
        match code {
            "BUS" => VehicleKind::Bus,
            "TRAM" => VehicleKind::Tram,
            "RAIL" => VehicleKind::CommuterTrain,
            "SUBWAY" => VehicleKind::Subway,
            other => {
                tracing::warn!(vehicle_type = other, "unknown vehicle type, treating as bus");
                VehicleKind::Bus
            }
        }
    }
}
