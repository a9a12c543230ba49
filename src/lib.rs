//! Infinite Snake simulation library
//!
//! The magnetic-attraction core of a snake arcade game: collectible entities
//! drift toward nearby live snakes under configurable per-type magnet
//! parameters, with a squared-distance fast path and frame-rate-independent
//! integration.

pub mod collectible;
pub mod config;
pub mod constants;
pub mod error;
pub mod magnet;
pub mod simulation;
pub mod snake;
pub mod testing;
