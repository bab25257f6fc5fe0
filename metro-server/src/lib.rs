//! Metro journey planner and live fleet tracker.
//!
//! Answers two questions about a metro network: "how do I get from this
//! station to that one, and what will it cost?" and "where are the trains
//! on this line right now?"

pub mod config;
pub mod fleet;
pub mod metro;
pub mod network;
pub mod planner;
pub mod topology;
pub mod web;
