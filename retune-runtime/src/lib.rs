//! Start-up runtime for retune.
//!
//! A host calls [`Runtime::start`] once, before its simulation begins. The
//! runtime loads the document, overwrites the host's defaults and vehicles,
//! and keeps the snapshot around for the growth policy. From then on the
//! host asks [`Runtime::permit_level_up`] wherever it is about to grow a
//! city.

mod host;
mod logging;
mod runtime;

pub use host::Host;
pub use logging::init_logging;
pub use runtime::{Runtime, StartupReport};
