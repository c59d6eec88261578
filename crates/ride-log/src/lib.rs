//! Ride Log Data Model
//!
//! Provides the in-memory sample table for motor controller telemetry and the
//! `;`-separated CSV reader/writer used to move it on and off disk.

mod columns;
mod error;
mod reader;
mod table;
mod writer;

pub use columns::*;
pub use error::LogError;
pub use reader::{load_csv, read_csv, DELIMITER};
pub use table::{Column, SampleTable};
pub use writer::{save_csv, write_csv};
