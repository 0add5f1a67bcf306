//! # ReservEase Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ReservEase                                       │
//! │                                                                         │
//! │  main.rs ────► collects arguments, reports failures                    │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, session state                          │
//! │                                                                         │
//! │  commands/ ──► availability_overview (printed as JSON)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! reservease --date 2025-04-15 --guests 4
//! RUST_LOG=debug reservease
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match reservease::run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
