//! # Hostel CLI
//!
//! Demo data utilities for a hostel management backend.
//!
//! Everything goes through the public REST API, so seeded data gets the same
//! derived capacity and bed counts as data entered by hand.
//!
//! ## Usage
//!
//! ```ignore
//! use hostel_cli::seeder::{seed_all, SeedConfig};
//!
//! let client = HostelClient::new(&ApiConfig::from_env())?;
//! seed_all(&client, SeedConfig::default()).await?;
//! ```

pub mod seeder;
