//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from catalog and HTTP errors.

use super::CityId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A label (tier, mode, ...) did not match any known value
    #[error("unknown {kind}: {label}")]
    UnknownLabel { kind: &'static str, label: String },

    /// A cost was negative or not a number
    #[error("invalid cost for {item}: {cost}")]
    InvalidCost { item: String, cost: f64 },

    /// A duration was zero or negative where a positive one is required
    #[error("invalid duration for {0}")]
    InvalidDuration(String),

    /// An entry refers to a city that does not exist
    #[error("{item} refers to unknown city {city}")]
    UnknownCity { item: String, city: CityId },

    /// Coordinates were out of range or not a number
    #[error("invalid location for {0}")]
    InvalidLocation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::UnknownLabel {
            kind: "budget tier",
            label: "premium".into(),
        };
        assert_eq!(err.to_string(), "unknown budget tier: premium");

        let err = DomainError::InvalidCost {
            item: "Hotel Ivoire".into(),
            cost: -1.0,
        };
        assert_eq!(err.to_string(), "invalid cost for Hotel Ivoire: -1");

        let err = DomainError::InvalidDuration("Zone 4 Nightlife".into());
        assert_eq!(err.to_string(), "invalid duration for Zone 4 Nightlife");

        let err = DomainError::UnknownCity {
            item: "Chez Ambroise".into(),
            city: CityId::parse("atlantis").unwrap(),
        };
        assert_eq!(err.to_string(), "Chez Ambroise refers to unknown city atlantis");

        let err = DomainError::InvalidLocation("Assinie Lodge".into());
        assert_eq!(err.to_string(), "invalid location for Assinie Lodge");
    }
}
