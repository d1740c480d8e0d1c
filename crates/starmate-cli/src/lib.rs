//! Library side of the `starmate` command-line front end.

pub mod batch;
pub mod logging;
pub mod settings;
pub mod summary;
pub mod types;
