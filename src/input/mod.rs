//! Input document loading for the payroll engine.
//!
//! This module provides the typed model of the time-punch input document
//! and the [`InputLoader`] that reads it from a JSON file.
//!
//! # Example
//!
//! ```no_run
//! use punch_engine::input::InputLoader;
//!
//! let data = InputLoader::load("./data.json").unwrap();
//! println!("Loaded {} employees", data.employee_data.len());
//! ```

mod loader;
mod types;

pub use loader::InputLoader;
pub use types::{EmployeeRecord, PunchData};
