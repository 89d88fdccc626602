//! Reference host for retune: a transport simulation's tunable state.
//!
//! [`TransportWorld`] holds the global [`GameDefaults`], the four vehicle
//! rosters and the cities. It implements [`Host`](retune_runtime::Host), so
//! a [`Runtime`](retune_runtime::Runtime) can tune it at start-up, and
//! [`TransportWorld::grow_cities`] runs each city's level-up through the
//! runtime's growth gate.

mod city;
mod defaults;
mod vehicle;
mod world;

pub use city::{Building, City, Hub};
pub use defaults::GameDefaults;
pub use vehicle::Vehicle;
pub use world::TransportWorld;
