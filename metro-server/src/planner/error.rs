//! Route planning errors.

use crate::topology::UnknownStation;

/// Errors from route planning.
///
/// All of these are input validation failures. None is transient, so
/// there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A station name does not resolve
    #[error(transparent)]
    UnknownStation(#[from] UnknownStation),

    /// Origin and destination are the same station
    #[error("origin and destination are both {0}")]
    SameStation(String),

    /// No single line serves both stations
    #[error("no single-line route from {origin} to {destination}")]
    NoRoute { origin: String, destination: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::SameStation("Aluva".into());
        assert_eq!(err.to_string(), "origin and destination are both Aluva");

        let err = RouteError::NoRoute {
            origin: "Aluva".into(),
            destination: "Infopark".into(),
        };
        assert_eq!(
            err.to_string(),
            "no single-line route from Aluva to Infopark"
        );

        let err = RouteError::from(UnknownStation {
            station: "Nonexistent".into(),
            line: None,
        });
        assert_eq!(err.to_string(), "unknown station \"Nonexistent\"");
    }
}
