//! City identifiers and reference data.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid city identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city id: {reason}")]
pub struct InvalidCityId {
    reason: &'static str,
}

/// Maximum length of a city identifier.
const MAX_ID_LEN: usize = 32;

/// A validated city identifier slug, e.g. `grand-bassam`.
///
/// Identifiers are 1-32 characters of lowercase ASCII letters, digits and
/// single inner hyphens. Any `CityId` value is valid by construction and
/// cheap to clone.
///
/// # Examples
///
/// ```
/// use trip_server::domain::CityId;
///
/// let id = CityId::parse("grand-bassam").unwrap();
/// assert_eq!(id.as_str(), "grand-bassam");
///
/// // Uppercase is rejected
/// assert!(CityId::parse("Abidjan").is_err());
///
/// // Leading or trailing hyphens are rejected
/// assert!(CityId::parse("-abidjan").is_err());
/// assert!(CityId::parse("abidjan-").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(Arc<str>);

impl CityId {
    /// Parse a city identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidCityId> {
        if s.is_empty() {
            return Err(InvalidCityId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_ID_LEN {
            return Err(InvalidCityId {
                reason: "must be at most 32 characters",
            });
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(InvalidCityId {
                reason: "hyphens must separate words",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(InvalidCityId {
                reason: "must be lowercase ASCII letters, digits or hyphens",
            });
        }

        Ok(CityId(Arc::from(s)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.as_str())
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine::distance(
            haversine::Location {
                latitude: self.latitude,
                longitude: self.longitude,
            },
            haversine::Location {
                latitude: other.latitude,
                longitude: other.longitude,
            },
            haversine::Units::Kilometers,
        )
    }

    /// Returns true if both coordinates are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Broad classification of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CityCategory {
    Coastal,
    Capital,
    Mountain,
    Resort,
    Cultural,
    Other,
}

impl CityCategory {
    /// Label used in API responses.
    pub fn label(&self) -> &'static str {
        match self {
            CityCategory::Coastal => "coastal",
            CityCategory::Capital => "capital",
            CityCategory::Mountain => "mountain",
            CityCategory::Resort => "resort",
            CityCategory::Cultural => "cultural",
            CityCategory::Other => "other",
        }
    }
}

/// A destination city. Static reference data.
#[derive(Debug, Clone)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub location: GeoPoint,
    pub category: CityCategory,
    pub has_airport: bool,
    /// Dinner-then-nightlife evenings are scheduled here.
    pub nightlife: bool,
}

impl City {
    /// Great-circle distance between two cities, rounded to whole kilometres.
    pub fn distance_km(&self, other: &City) -> f64 {
        self.location.distance_km(&other.location).round()
    }
}
