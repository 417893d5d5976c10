//! Domain types for normalized departures.
//!
//! This module contains the core domain model types that represent
//! validated departure data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod departure;
mod route;
mod vehicle;

pub use departure::Departure;
pub use route::RouteCode;
pub use vehicle::VehicleKind;
