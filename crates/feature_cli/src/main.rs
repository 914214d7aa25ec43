//! CLI entry point.
//!
//! # Responsibility
//! - Construct one `Feature` and print its status line.
//! - Keep stdout byte-exact: nothing else is printed.

use feature_core::Feature;

fn main() {
    Feature::new().process();
}
