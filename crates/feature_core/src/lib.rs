//! Core domain logic for the feature status probe.
//! This crate owns the `Feature` record and the logging bootstrap.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::feature::{
    Feature, DEFAULT_ENABLED, DEFAULT_OPTIMIZED, DEFAULT_VERSION, STATUS_LINE,
};
