//! Configuration loading for retune.
//!
//! The document is a TOML file named `<identifier>.toml` inside a host-chosen
//! directory:
//!
//! ```toml
//! [options]
//! params = [{ name = "RawCityLevelLimit", type = "int", value = "10" }]
//!
//! [defaults]
//! params = [{ name = "Road_price", type = "long", value = "200000" }]
//!
//! [[entities]]
//! name = "vehicle_antero"
//! type = "road_vehicle"
//! params = [{ name = "Capacity", type = "int", value = "20" }]
//! ```
//!
//! A missing or unreadable document is never fatal: [`load`] logs the
//! failure and returns `None`, and everything that depends on the document
//! simply does nothing.

mod error;
mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_EXTENSION, Loader, config_path, dump_document, load, parse_document, try_load,
};
