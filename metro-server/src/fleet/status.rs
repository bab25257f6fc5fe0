//! Train status types.

use std::fmt;

/// How full a train is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuality band of a train, derived from its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayStatus {
    /// On schedule or running ahead.
    OnTime,
    /// Up to two minutes late.
    Minor,
    /// More than two minutes late.
    Major,
}

impl DelayStatus {
    /// Classify a signed delay in minutes.
    pub fn from_delay(delay_mins: i32) -> Self {
        match delay_mins {
            i32::MIN..=0 => DelayStatus::OnTime,
            1..=2 => DelayStatus::Minor,
            _ => DelayStatus::Major,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DelayStatus::OnTime => "on_time",
            DelayStatus::Minor => "minor",
            DelayStatus::Major => "major",
        }
    }
}

/// Live status of one vehicle.
///
/// `id` and `line` identify the vehicle and never change during a session.
/// Everything else is mutable state that a simulation tick may rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStatus {
    /// Vehicle id (e.g., "ML-001")
    pub id: String,
    /// Owning line name
    pub line: String,
    pub current_station: String,
    pub next_station: String,
    /// Direction label (e.g., "Towards Aluva")
    pub direction: String,
    /// Signed delay in minutes; negative means running ahead of schedule.
    pub delay_mins: i32,
    pub crowd_level: CrowdLevel,
    /// Minutes to the next station, always at least the configured floor.
    pub eta_mins: u32,
}

impl TrainStatus {
    /// Returns the punctuality band for the current delay.
    pub fn delay_status(&self) -> DelayStatus {
        DelayStatus::from_delay(self.delay_mins)
    }

    /// Formats the delay the way departure boards show it ("+2", "0", "-1").
    pub fn delay_label(&self) -> String {
        if self.delay_mins > 0 {
            format!("+{}", self.delay_mins)
        } else {
            self.delay_mins.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(delay_mins: i32) -> TrainStatus {
        TrainStatus {
            id: "ML-001".into(),
            line: "Blue Line".into(),
            current_station: "MG Road".into(),
            next_station: "Lissie".into(),
            direction: "Towards Tripunithura".into(),
            delay_mins,
            crowd_level: CrowdLevel::Medium,
            eta_mins: 2,
        }
    }

    #[test]
    fn delay_status_bands() {
        assert_eq!(DelayStatus::from_delay(-3), DelayStatus::OnTime);
        assert_eq!(DelayStatus::from_delay(0), DelayStatus::OnTime);
        assert_eq!(DelayStatus::from_delay(1), DelayStatus::Minor);
        assert_eq!(DelayStatus::from_delay(2), DelayStatus::Minor);
        assert_eq!(DelayStatus::from_delay(3), DelayStatus::Major);
        assert_eq!(DelayStatus::from_delay(i32::MAX), DelayStatus::Major);
    }

    #[test]
    fn delay_label_signs() {
        assert_eq!(status(2).delay_label(), "+2");
        assert_eq!(status(0).delay_label(), "0");
        assert_eq!(status(-1).delay_label(), "-1");
    }

    #[test]
    fn crowd_level_display() {
        assert_eq!(CrowdLevel::Low.to_string(), "Low");
        assert_eq!(CrowdLevel::Medium.to_string(), "Medium");
        assert_eq!(CrowdLevel::High.to_string(), "High");
    }
}
