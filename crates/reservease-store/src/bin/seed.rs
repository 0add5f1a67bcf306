//! # Demo Dataset Dump
//!
//! Prints the data a fresh session starts with.
//!
//! ## Usage
//! ```bash
//! # Everything (tables, slots, users, menu, reservations)
//! cargo run -p reservease-store --bin seed
//!
//! # Layout and menu only, no sample reservations
//! cargo run -p reservease-store --bin seed -- --empty
//! ```

use std::env;

use reservease_core::seed;
use reservease_store::{MenuStore, ReservationStore};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut empty = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--empty" | "-e" => empty = true,
            "--help" | "-h" => {
                println!("ReservEase Demo Dataset");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -e, --empty    Omit the sample reservations");
                println!("  -h, --help     Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }

    let store = if empty {
        ReservationStore::empty_layout()
    } else {
        ReservationStore::seeded()
    };

    let dump = json!({
        "tables": store.tables(),
        "timeSlots": store.time_slots(),
        "users": seed::users(),
        "menu": MenuStore::seeded().items(),
        "reservations": store.reservations(),
    });

    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
