//! Single-line route computation and costing.

use tracing::debug;

use crate::config::RouteConfig;
use crate::topology::{Line, Topology, UnknownStation};

use super::error::RouteError;

/// A computed route between two stations.
///
/// Plans are values: a new query produces a new plan, and nothing mutates
/// a plan after it has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    /// The line the whole route runs on.
    pub line: String,
    /// Stations visited, origin first and destination last.
    pub stations: Vec<String>,
    /// Number of station-to-station hops.
    pub hops: usize,
    pub distance_km: f64,
    pub duration_mins: i64,
    /// Fare in rupees.
    pub fare: u32,
    /// Always 0: routes never change lines.
    pub interchanges: usize,
}

/// Route planner over a topology.
pub struct RoutePlanner<'a> {
    topology: &'a Topology,
    config: &'a RouteConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(topology: &'a Topology, config: &'a RouteConfig) -> Self {
        Self { topology, config }
    }

    /// Plan a route between two stations on `line`.
    ///
    /// Fails with `SameStation` before any lookup if the names are equal,
    /// and with `UnknownStation` if either name is not on `line`.
    pub fn plan(
        &self,
        origin: &str,
        destination: &str,
        line: &str,
    ) -> Result<RoutePlan, RouteError> {
        if origin == destination {
            return Err(RouteError::SameStation(origin.to_string()));
        }

        let line = self.topology.line(line).ok_or_else(|| UnknownStation {
            station: origin.to_string(),
            line: Some(line.to_string()),
        })?;

        self.plan_on(line, origin, destination)
    }

    /// Plan a route between two stations, choosing the line.
    ///
    /// The first line (in topology order) serving both stations is used.
    /// If both stations exist but no single line serves them, the result
    /// is `NoRoute`.
    pub fn plan_any(&self, origin: &str, destination: &str) -> Result<RoutePlan, RouteError> {
        if origin == destination {
            return Err(RouteError::SameStation(origin.to_string()));
        }

        for station in [origin, destination] {
            if !self.topology.is_known(station) {
                return Err(UnknownStation {
                    station: station.to_string(),
                    line: None,
                }
                .into());
            }
        }

        let line = self
            .topology
            .lines()
            .find(|l| l.serves(origin) && l.serves(destination))
            .ok_or_else(|| RouteError::NoRoute {
                origin: origin.to_string(),
                destination: destination.to_string(),
            })?;

        self.plan_on(line, origin, destination)
    }

    fn plan_on(
        &self,
        line: &Line,
        origin: &str,
        destination: &str,
    ) -> Result<RoutePlan, RouteError> {
        let position = |station: &str| {
            line.position(station).ok_or_else(|| UnknownStation {
                station: station.to_string(),
                line: Some(line.name().to_string()),
            })
        };
        let from = position(origin)?;
        let to = position(destination)?;

        let mut stations = line.stations()[from.min(to)..=from.max(to)].to_vec();
        if from > to {
            stations.reverse();
        }

        let hops = from.abs_diff(to);
        let plan = RoutePlan {
            origin: origin.to_string(),
            destination: destination.to_string(),
            line: line.name().to_string(),
            stations,
            hops,
            distance_km: hops as f64 * self.config.km_per_hop,
            duration_mins: self.config.duration_mins_for(hops),
            fare: self.config.fare_for(hops),
            interchanges: 0,
        };

        debug!(
            origin,
            destination,
            line = line.name(),
            hops,
            fare = plan.fare,
            "route planned"
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{BLUE_LINE, GREEN_LINE, kochi_metro};

    fn planner_fixture() -> (Topology, RouteConfig) {
        (kochi_metro().unwrap(), RouteConfig::default())
    }

    #[test]
    fn forward_route() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let plan = planner.plan("Aluva", "Companypady", BLUE_LINE).unwrap();

        assert_eq!(plan.stations, vec!["Aluva", "Pulinchode", "Companypady"]);
        assert_eq!(plan.hops, 2);
        assert_eq!(plan.duration_mins, 16);
        assert_eq!(plan.fare, 14);
        assert!((plan.distance_km - 2.4).abs() < 1e-9);
        assert_eq!(plan.interchanges, 0);
        assert_eq!(plan.line, BLUE_LINE);
    }

    #[test]
    fn reverse_route_is_origin_first() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let plan = planner.plan("Lissie", "Kaloor", BLUE_LINE).unwrap();

        assert_eq!(plan.stations, vec!["Lissie", "Kaloor"]);
        assert_eq!(plan.origin, "Lissie");
        assert_eq!(plan.destination, "Kaloor");
    }

    #[test]
    fn one_hop_fare() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let plan = planner.plan("MG Road", "Maharajas", BLUE_LINE).unwrap();
        assert_eq!(plan.fare, 12);
        assert_eq!(plan.duration_mins, 14);
    }

    #[test]
    fn long_route_fare_is_capped() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        // 19 hops would cost 10 + 2 * 19 = 48 without the cap.
        let plan = planner.plan("Aluva", "Vytilla", BLUE_LINE).unwrap();
        assert_eq!(plan.hops, 19);
        assert_eq!(plan.fare, 40);

        let plan = planner.plan("Pulinchode", "Town Hall", BLUE_LINE).unwrap();
        assert_eq!(plan.hops, 22);
        assert_eq!(plan.fare, 40);
        assert_eq!(plan.duration_mins, 56);
    }

    #[test]
    fn custom_fare_config() {
        let topo = kochi_metro().unwrap();
        let config = RouteConfig::new(20, 5, 100, 5, 3, 1.0);
        let planner = RoutePlanner::new(&topo, &config);

        let plan = planner.plan("Aluva", "Muttom", BLUE_LINE).unwrap();
        assert_eq!(plan.fare, 40);
        assert_eq!(plan.duration_mins, 17);
        assert!((plan.distance_km - 4.0).abs() < 1e-9);
    }

    #[test]
    fn same_station_rejected() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        assert_eq!(
            planner.plan("Aluva", "Aluva", BLUE_LINE),
            Err(RouteError::SameStation("Aluva".into()))
        );
        // Checked before the names are resolved.
        assert_eq!(
            planner.plan("Nowhere", "Nowhere", BLUE_LINE),
            Err(RouteError::SameStation("Nowhere".into()))
        );
    }

    #[test]
    fn unknown_station_rejected() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let err = planner.plan("Nonexistent", "Aluva", BLUE_LINE).unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownStation(UnknownStation {
                station: "Nonexistent".into(),
                line: Some(BLUE_LINE.into()),
            })
        );

        let err = planner.plan("Aluva", "Infopark", BLUE_LINE).unwrap_err();
        assert!(matches!(err, RouteError::UnknownStation(ref e) if e.station == "Infopark"));
    }

    #[test]
    fn unknown_line_rejected() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let err = planner.plan("Aluva", "Muttom", "Purple Line").unwrap_err();
        assert!(matches!(err, RouteError::UnknownStation(_)));
    }

    #[test]
    fn plan_any_picks_serving_line() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let plan = planner.plan_any("Kakkanad", "MG Road Extension").unwrap();
        assert_eq!(plan.line, GREEN_LINE);
        assert_eq!(plan.stations, vec!["Kakkanad", "MG Road Extension"]);
    }

    #[test]
    fn plan_any_unknown_station() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let err = planner.plan_any("Nonexistent", "Aluva").unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownStation(UnknownStation {
                station: "Nonexistent".into(),
                line: None,
            })
        );
    }

    #[test]
    fn plan_any_across_lines_is_no_route() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let err = planner.plan_any("Aluva", "Infopark").unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRoute {
                origin: "Aluva".into(),
                destination: "Infopark".into(),
            }
        );
    }

    #[test]
    fn identical_queries_identical_plans() {
        let (topo, config) = planner_fixture();
        let planner = RoutePlanner::new(&topo, &config);

        let a = planner.plan_any("Edapally", "Petta").unwrap();
        let b = planner.plan_any("Edapally", "Petta").unwrap();
        assert_eq!(a, b);
    }
}
