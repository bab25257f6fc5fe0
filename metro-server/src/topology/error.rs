//! Topology error types.

/// Errors from building a topology.
///
/// These are construction-time failures: a topology that builds
/// successfully satisfies every ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A line was declared with no stations
    #[error("line {0} has no stations")]
    EmptyLine(String),

    /// Two lines share the same name
    #[error("line {0} is declared more than once")]
    DuplicateLine(String),

    /// A station appears twice in one line's sequence
    #[error("station {station} appears more than once on {line}")]
    DuplicateStation { line: String, station: String },

    /// A station name is empty
    #[error("line {0} contains an empty station name")]
    EmptyStationName(String),
}

/// A station name that does not resolve.
///
/// `line` is the line the lookup was restricted to, or `None` when the
/// name was looked up across the whole network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station {station:?}{}", on_line(.line))]
pub struct UnknownStation {
    pub station: String,
    pub line: Option<String>,
}

fn on_line(line: &Option<String>) -> String {
    line.as_deref()
        .map(|l| format!(" on {l}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TopologyError::EmptyLine("Blue Line".into());
        assert_eq!(err.to_string(), "line Blue Line has no stations");

        let err = TopologyError::DuplicateLine("Blue Line".into());
        assert_eq!(err.to_string(), "line Blue Line is declared more than once");

        let err = TopologyError::DuplicateStation {
            line: "Blue Line".into(),
            station: "Aluva".into(),
        };
        assert_eq!(
            err.to_string(),
            "station Aluva appears more than once on Blue Line"
        );

        let err = UnknownStation {
            station: "Nowhere".into(),
            line: Some("Blue Line".into()),
        };
        assert_eq!(err.to_string(), "unknown station \"Nowhere\" on Blue Line");

        let err = UnknownStation {
            station: "Nowhere".into(),
            line: None,
        };
        assert_eq!(err.to_string(), "unknown station \"Nowhere\"");
    }
}
