//! # Hostel Core
//!
//! Foundational helpers shared by the Hostel Admin crates.
//!
//! - [`dates`]: Calendar-date helpers and the injectable clock used for check-in/check-out
//! - [`serde`]: Custom serde helpers for the backend's loosely typed fields
//! - [`validation`]: Human-readable formatting of `validator` errors
//!
//! # Example
//!
//! ```ignore
//! use hostel_core::dates::{Clock, today};
//! use hostel_core::validation::format_errors;
//!
//! let clock: Clock = today;
//! println!("Checking in on {}", clock());
//! ```

pub mod dates;
pub mod serde;
pub mod validation;

// Re-export commonly used items at crate root
pub use dates::{Clock, today};
pub use validation::format_errors;
