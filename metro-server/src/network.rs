//! Built-in Kochi metro network and initial fleet roster.

use crate::fleet::{CrowdLevel, TrainStatus};
use crate::topology::{Topology, TopologyBuilder, TopologyError};

pub const BLUE_LINE: &str = "Blue Line";
pub const GREEN_LINE: &str = "Green Line (Extension)";

/// Blue Line stations, Aluva end first.
const BLUE_LINE_STATIONS: &[&str] = &[
    "Aluva",
    "Pulinchode",
    "Companypady",
    "Ambattukavu",
    "Muttom",
    "Kalamassery",
    "Cusat",
    "Pathadipalam",
    "Edapally",
    "Changampuzha Park",
    "Palarivattom",
    "JLN Stadium",
    "Kaloor",
    "Lissie",
    "MG Road",
    "Maharajas",
    "Ernakulam South",
    "Kadavanthra",
    "Elamkulam",
    "Vytilla",
    "Thaikoodam",
    "Petta",
    "Devi",
    "Town Hall",
];

/// Placeholder extension stations. The extension is named on the network
/// map but its stops are not published; these names only give the line a
/// shape. No interchange with the Blue Line yet.
const GREEN_LINE_STATIONS: &[&str] = &["MG Road Extension", "Kakkanad", "Infopark"];

/// Create the Kochi metro topology.
pub fn kochi_metro() -> Result<Topology, TopologyError> {
    TopologyBuilder::new()
        .line(BLUE_LINE, BLUE_LINE_STATIONS)
        .line(GREEN_LINE, GREEN_LINE_STATIONS)
        .build()
}

/// Create the initial fleet roster.
///
/// Every train runs on the Blue Line; the extension has no service yet.
pub fn initial_roster() -> Vec<TrainStatus> {
    vec![
        train(
            "ML-001",
            "MG Road",
            "Lissie",
            "Towards Tripunithura",
            0,
            CrowdLevel::Medium,
            2,
        ),
        train(
            "ML-002",
            "Vytilla",
            "Thaikoodam",
            "Towards Aluva",
            1,
            CrowdLevel::Low,
            4,
        ),
        train(
            "ML-003",
            "Kalamassery",
            "Cusat",
            "Towards Tripunithura",
            -1,
            CrowdLevel::High,
            1,
        ),
        train(
            "ML-004",
            "Palarivattom",
            "JLN Stadium",
            "Towards Aluva",
            2,
            CrowdLevel::Medium,
            3,
        ),
    ]
}

fn train(
    id: &str,
    current: &str,
    next: &str,
    direction: &str,
    delay_mins: i32,
    crowd_level: CrowdLevel,
    eta_mins: u32,
) -> TrainStatus {
    TrainStatus {
        id: id.to_string(),
        line: BLUE_LINE.to_string(),
        current_station: current.to_string(),
        next_station: next.to_string(),
        direction: direction.to_string(),
        delay_mins,
        crowd_level,
        eta_mins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kochi_metro_builds() {
        let topo = kochi_metro().unwrap();

        assert_eq!(topo.lines().count(), 2);
        assert_eq!(topo.stations_of(BLUE_LINE).unwrap().len(), 24);
        assert_eq!(topo.position_of(BLUE_LINE, "Aluva"), Ok(0));
        assert_eq!(topo.position_of(BLUE_LINE, "Town Hall"), Ok(23));
    }

    #[test]
    fn lines_are_disjoint() {
        let topo = kochi_metro().unwrap();
        for station in GREEN_LINE_STATIONS {
            assert_eq!(topo.lines_serving(station).len(), 1);
        }
    }

    #[test]
    fn roster_stations_exist_on_their_line() {
        let topo = kochi_metro().unwrap();

        for train in initial_roster() {
            assert!(topo.position_of(&train.line, &train.current_station).is_ok());
            assert!(topo.position_of(&train.line, &train.next_station).is_ok());
            assert!(train.eta_mins >= 1);
        }
    }

    #[test]
    fn roster_ids_are_unique() {
        let roster = initial_roster();
        let mut ids: Vec<&str> = roster.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), roster.len());
    }
}
