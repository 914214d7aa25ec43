//! Feature descriptor model.
//!
//! # Responsibility
//! - Hold the fixed capability flags set at construction.
//! - Emit the static status line on request.
//!
//! # Invariants
//! - `enabled`, `optimized` and `version` are `true`, `true`, `4` for every
//!   instance and never change after construction.
//! - The status line is a fixed literal; it is not derived from the fields.
//!
//! # See also
//! - [`crate::logging`] for where the `feature_*` events end up.

use log::{debug, error};
use serde::Serialize;
use std::io::{self, Write};

/// Value of `enabled` for every constructed feature.
pub const DEFAULT_ENABLED: bool = true;
/// Value of `optimized` for every constructed feature.
pub const DEFAULT_OPTIMIZED: bool = true;
/// Value of `version` for every constructed feature.
pub const DEFAULT_VERSION: i64 = 4;
/// Status line written by [`Feature::process`], without trailing newline.
pub const STATUS_LINE: &str = "Processing v4 with optimization";

/// Immutable capability descriptor.
///
/// Fields are private so no caller can change them after construction.
/// Only `Serialize` is derived: a deserialization path could forge values
/// other than the fixed defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Feature {
    enabled: bool,
    optimized: bool,
    version: i64,
}

impl Feature {
    /// Creates a feature with the fixed defaults.
    pub fn new() -> Self {
        debug!(
            "event=feature_construct module=model status=ok enabled={} optimized={} version={}",
            DEFAULT_ENABLED, DEFAULT_OPTIMIZED, DEFAULT_VERSION
        );
        Self {
            enabled: DEFAULT_ENABLED,
            optimized: DEFAULT_OPTIMIZED,
            version: DEFAULT_VERSION,
        }
    }

    /// Not read by any behavior of this type.
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Not read by any behavior of this type.
    pub const fn optimized(&self) -> bool {
        self.optimized
    }

    /// Display-only version number.
    pub const fn version(&self) -> i64 {
        self.version
    }

    /// Returns the fixed status line.
    ///
    /// The `v4` and `with optimization` parts are literal text and do not
    /// follow `version` or `optimized`.
    pub const fn status_line(&self) -> &'static str {
        STATUS_LINE
    }

    /// Writes the status line plus a newline to `out`.
    ///
    /// # Errors
    /// - Returns the underlying I/O error when `out` rejects the write.
    pub fn process_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.status_line())?;
        out.flush()
    }

    /// Writes the status line to standard output.
    ///
    /// A missing or closed stdout is a host condition; the failure is
    /// logged and otherwise ignored.
    pub fn process(&self) {
        // Why: one lock for line + flush keeps the output contiguous when
        // other threads also write to stdout.
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.process_to(&mut handle) {
            Ok(()) => debug!("event=feature_process module=model status=ok"),
            Err(err) => error!(
                "event=feature_process module=model status=error error_kind={:?}",
                err.kind()
            ),
        }
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::new()
    }
}
