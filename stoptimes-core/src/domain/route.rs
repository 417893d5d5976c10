//! Route display code normalization.

use std::fmt;

use super::VehicleKind;

/// Fallback display code for subway departures with no line designator.
const SUBWAY_FALLBACK: &str = "M";

/// Fallback display code for every other vehicle kind.
const GENERIC_FALLBACK: &str = "?";

/// A renderable route display code (e.g. "550", "A", "U").
///
/// Guaranteed non-empty: the only constructor, [`RouteCode::from_feed`],
/// substitutes a fallback when the feed supplies nothing usable. Route
/// codes are otherwise feed-controlled free text; no format validation
/// is applied.
///
/// # Examples
///
/// ```
/// use stoptimes_core::domain::{RouteCode, VehicleKind};
///
/// let kept = RouteCode::from_feed(Some("550"), VehicleKind::Bus);
/// assert_eq!(kept.as_str(), "550");
///
/// // Some subway entries carry no line designator at all.
/// let metro = RouteCode::from_feed(None, VehicleKind::Subway);
/// assert_eq!(metro.as_str(), "M");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteCode(String);

impl RouteCode {
    /// Normalize a feed-supplied route code.
    ///
    /// Three distinct defects are checked explicitly and collapse to the
    /// same fallback: a structurally absent field, a value that is empty
    /// after trimming, and the sentinel text `"null"`. The fallback is
    /// `"M"` for [`VehicleKind::Subway`] (the line is unambiguous to
    /// riders by vehicle kind alone) and `"?"` for everything else.
    ///
    /// A usable value is returned unchanged, untrimmed.
    pub fn from_feed(raw: Option<&str>, kind: VehicleKind) -> Self {
        let usable = match raw {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some("null") => None,
            Some(s) => Some(s),
        };

        match usable {
            Some(code) => RouteCode(code.to_string()),
            None if kind == VehicleKind::Subway => RouteCode(SUBWAY_FALLBACK.to_string()),
            None => RouteCode(GENERIC_FALLBACK.to_string()),
        }
    }

    /// Returns the display code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteCode({})", self.0)
    }
}

impl fmt::Display for RouteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_code_is_kept() {
        let code = RouteCode::from_feed(Some("550"), VehicleKind::Bus);
        assert_eq!(code.as_str(), "550");

        let code = RouteCode::from_feed(Some("U"), VehicleKind::CommuterTrain);
        assert_eq!(code.as_str(), "U");
    }

    #[test]
    fn present_code_wins_over_kind() {
        // A designated subway line keeps its designator.
        let code = RouteCode::from_feed(Some("A"), VehicleKind::Subway);
        assert_eq!(code.as_str(), "A");
    }

    #[test]
    fn present_code_is_kept_verbatim() {
        // Usable values are not trimmed.
        let code = RouteCode::from_feed(Some(" 550 "), VehicleKind::Bus);
        assert_eq!(code.as_str(), " 550 ");
    }

    #[test]
    fn absent_code_falls_back() {
        assert_eq!(RouteCode::from_feed(None, VehicleKind::Subway).as_str(), "M");
        assert_eq!(RouteCode::from_feed(None, VehicleKind::Tram).as_str(), "?");
        assert_eq!(RouteCode::from_feed(None, VehicleKind::Bus).as_str(), "?");
        assert_eq!(
            RouteCode::from_feed(None, VehicleKind::CommuterTrain).as_str(),
            "?"
        );
    }

    #[test]
    fn empty_code_falls_back() {
        assert_eq!(RouteCode::from_feed(Some(""), VehicleKind::Subway).as_str(), "M");
        assert_eq!(RouteCode::from_feed(Some(""), VehicleKind::Bus).as_str(), "?");
    }

    #[test]
    fn whitespace_only_code_falls_back() {
        assert_eq!(RouteCode::from_feed(Some("   "), VehicleKind::Subway).as_str(), "M");
        assert_eq!(RouteCode::from_feed(Some("\t "), VehicleKind::Tram).as_str(), "?");
    }

    #[test]
    fn sentinel_null_falls_back() {
        assert_eq!(RouteCode::from_feed(Some("null"), VehicleKind::Subway).as_str(), "M");
        assert_eq!(RouteCode::from_feed(Some("null"), VehicleKind::Bus).as_str(), "?");
    }

    #[test]
    fn display() {
        let code = RouteCode::from_feed(Some("550"), VehicleKind::Bus);
        assert_eq!(format!("{}", code), "550");
    }

    #[test]
    fn debug() {
        let code = RouteCode::from_feed(Some("A"), VehicleKind::Subway);
        assert_eq!(format!("{:?}", code), "RouteCode(A)");
    }

    #[test]
    fn equality() {
        let a = RouteCode::from_feed(Some("550"), VehicleKind::Bus);
        let b = RouteCode::from_feed(Some("550"), VehicleKind::Tram);
        let c = RouteCode::from_feed(Some("551"), VehicleKind::Bus);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_kind() -> impl Strategy<Value = VehicleKind> {
        prop_oneof![
            Just(VehicleKind::Bus),
            Just(VehicleKind::Tram),
            Just(VehicleKind::CommuterTrain),
            Just(VehicleKind::Subway),
        ]
    }

    proptest! {
        /// Normalization never yields an empty, whitespace-only or
        /// sentinel code, whatever the feed supplies.
        #[test]
        fn never_empty(
            raw in proptest::option::of(".{0,12}"),
            kind in any_kind(),
        ) {
            let code = RouteCode::from_feed(raw.as_deref(), kind);
            prop_assert!(!code.as_str().trim().is_empty());
            prop_assert_ne!(code.as_str(), "null");
        }

        /// Usable feed values are preserved verbatim regardless of kind.
        #[test]
        fn usable_values_preserved(
            raw in ".{1,12}".prop_filter(
                "must be usable",
                |s| !s.trim().is_empty() && s != "null",
            ),
            kind in any_kind(),
        ) {
            let code = RouteCode::from_feed(Some(&raw), kind);
            prop_assert_eq!(code.as_str(), raw.as_str());
        }
    }
}
