//! Road trip cost planning server.
//!
//! Resolves free-text place names to coordinates, obtains a driving route,
//! estimates fuel and toll cost, and returns one consolidated trip result
//! (or one classified failure) for display.

pub mod config;
pub mod cost;
pub mod domain;
pub mod geocode;
pub mod geometry;
pub mod pipeline;
pub mod routing;
pub mod toll;
pub mod web;
