//! Departure normalization core for a stop-times display.
//!
//! Validates raw Digitransit departure rows and converts them into
//! immutable [`domain::Departure`] values: route identity, destination,
//! scheduled and live timing, and vehicle classification. Fetching,
//! rendering and refresh scheduling live in the embedding application;
//! this crate performs no I/O.

pub mod digitransit;
pub mod domain;
