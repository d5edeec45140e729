//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ettrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: a tiny probe validates core crate wiring independently from any
    // request-routing layer that may sit on top later.
    println!("ettrack_core ping={}", ettrack_core::ping());
    println!("ettrack_core version={}", ettrack_core::core_version());
    println!("ettrack_core db_path={}", ettrack_core::resolve_db_path().display());
}
