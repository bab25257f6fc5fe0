//! Network topology: lines and the ordered stations they serve.
//!
//! A line is a total order of stations. Position in that order is the only
//! thing route computation relies on, so every invariant about it is
//! enforced when the topology is built: no empty lines, no duplicate
//! stations within a line, no duplicate line names. Code that holds a
//! `Topology` can trust every position lookup.

mod error;

use std::collections::HashMap;

pub use error::{TopologyError, UnknownStation};

/// A station as seen from one line.
///
/// A station name served by several lines yields one `Station` per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub line: String,
    /// Zero-based index in the line's track order.
    pub position: usize,
}

/// A named, ordered sequence of stations.
#[derive(Debug, Clone)]
pub struct Line {
    name: String,
    stations: Vec<String>,
    /// Station name -> position, for O(1) lookup.
    index: HashMap<String, usize>,
}

impl Line {
    /// Create a line from stations in track order.
    pub fn new(
        name: impl Into<String>,
        stations: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, TopologyError> {
        let name = name.into();
        let stations: Vec<String> = stations.into_iter().map(Into::into).collect();

        if stations.is_empty() {
            return Err(TopologyError::EmptyLine(name));
        }

        let mut index = HashMap::with_capacity(stations.len());
        for (position, station) in stations.iter().enumerate() {
            if station.is_empty() {
                return Err(TopologyError::EmptyStationName(name));
            }
            if index.insert(station.clone(), position).is_some() {
                return Err(TopologyError::DuplicateStation {
                    line: name,
                    station: station.clone(),
                });
            }
        }

        Ok(Self {
            name,
            stations,
            index,
        })
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns station names in track order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Returns the position of a station on this line, if it is served.
    pub fn position(&self, station: &str) -> Option<usize> {
        self.index.get(station).copied()
    }

    /// Check if this line serves a station.
    pub fn serves(&self, station: &str) -> bool {
        self.index.contains_key(station)
    }

    /// Returns the number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a constructed line; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn station_at(&self, position: usize) -> Station {
        Station {
            name: self.stations[position].clone(),
            line: self.name.clone(),
            position,
        }
    }
}

/// The immutable station/line structure of the network.
#[derive(Debug, Clone)]
pub struct Topology {
    lines: Vec<Line>,
}

impl Topology {
    /// Create a topology from validated lines.
    ///
    /// Line order is kept and used as the preference order when a station
    /// pair is served by more than one line.
    pub fn new(lines: Vec<Line>) -> Result<Self, TopologyError> {
        for (i, line) in lines.iter().enumerate() {
            if lines[..i].iter().any(|l| l.name == line.name) {
                return Err(TopologyError::DuplicateLine(line.name.clone()));
            }
        }
        Ok(Self { lines })
    }

    /// Returns all lines, in declaration order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Look up a line by name.
    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|l| l.name == name)
    }

    /// Returns the ordered stations of a line, or `None` for an unknown line.
    pub fn stations_of(&self, line: &str) -> Option<&[String]> {
        self.line(line).map(Line::stations)
    }

    /// Returns the position of `station` on `line`.
    ///
    /// An unknown line is reported the same way as an unknown station:
    /// the name is absent from the requested line's sequence either way.
    pub fn position_of(&self, line: &str, station: &str) -> Result<usize, UnknownStation> {
        self.line(line)
            .and_then(|l| l.position(station))
            .ok_or_else(|| UnknownStation {
                station: station.to_string(),
                line: Some(line.to_string()),
            })
    }

    /// Returns every line serving a station, in declaration order.
    pub fn lines_serving(&self, station: &str) -> Vec<&Line> {
        self.lines.iter().filter(|l| l.serves(station)).collect()
    }

    /// Check if any line serves a station.
    pub fn is_known(&self, station: &str) -> bool {
        self.lines.iter().any(|l| l.serves(station))
    }

    /// Returns one `Station` per line serving `name`.
    pub fn station(&self, name: &str) -> Vec<Station> {
        self.lines
            .iter()
            .filter_map(|l| l.position(name).map(|pos| l.station_at(pos)))
            .collect()
    }

    /// Search stations by case-insensitive substring.
    ///
    /// An empty query matches everything. Results follow line order, then
    /// track order. `line` restricts the search to a single line; an
    /// unknown line yields no results.
    pub fn search(&self, query: &str, line: Option<&str>) -> Vec<Station> {
        let needle = query.trim().to_lowercase();
        let needle = needle.as_str();

        self.lines
            .iter()
            .filter(|l| line.is_none_or(|name| l.name == name))
            .flat_map(move |l| {
                l.stations
                    .iter()
                    .enumerate()
                    .filter(move |(_, s)| s.to_lowercase().contains(needle))
                    .map(move |(pos, _)| l.station_at(pos))
            })
            .collect()
    }

    /// Returns the total number of station entries across all lines.
    pub fn station_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }
}

/// Builder for creating a topology.
///
/// Provides a fluent API for declaring lines; validation is deferred to
/// [`TopologyBuilder::build`].
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    lines: Vec<(String, Vec<String>)>,
}

impl TopologyBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a line with stations in track order.
    pub fn line(mut self, name: &str, stations: &[&str]) -> Self {
        self.lines.push((
            name.to_string(),
            stations.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Validate and build the topology.
    pub fn build(self) -> Result<Topology, TopologyError> {
        let lines = self
            .lines
            .into_iter()
            .map(|(name, stations)| Line::new(name, stations))
            .collect::<Result<Vec<_>, _>>()?;
        Topology::new(lines)
    }
}
