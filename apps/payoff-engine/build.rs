//! Build Script for Payoff Engine
//!
//! Emits the `coverage` cfg when building under coverage instrumentation
//! (`cargo llvm-cov` or manual `-C instrument-coverage` flags) so code can
//! opt out with `#[cfg(not(coverage))]`.

use std::env;

fn main() {
    // Rerun build script if it changes
    println!("cargo:rerun-if-changed=build.rs");

    // Emit cfg for coverage detection
    if env::var("CARGO_LLVM_COV").is_ok()
        || env::var("LLVM_PROFILE_FILE").is_ok()
        || env::var("RUSTFLAGS")
            .map(|f| f.contains("instrument-coverage"))
            .unwrap_or(false)
    {
        println!("cargo:rustc-cfg=coverage");
    }
}
