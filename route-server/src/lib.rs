//! Subway line route server.
//!
//! Rebuilds the ordered, branch-aware station sequence of a single line
//! from an unordered snapshot of station records, and serves it as a
//! route diagram.

pub mod config;
pub mod diagram;
pub mod domain;
pub mod resolver;
pub mod stations;
pub mod topology;
pub mod web;
