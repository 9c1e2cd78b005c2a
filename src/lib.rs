//! # Hostel Admin
//!
//! Terminal administration console for a hostel management backend.
//!
//! The console manages four collections over the backend's REST API:
//! students, hostels, rooms, and room allocations. Allocations follow a
//! small workflow (allocate, check in, check out) and the dashboard shows
//! headline counts.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/
//! │   ├── resource/     # Generic list/create/edit/delete screen
//! │   ├── students/
//! │   ├── hostels/
//! │   ├── rooms/
//! │   ├── allocations/  # Allocation workflow screen
//! │   └── dashboard/
//! ├── utils/            # Console interaction, prompts, tables
//! ├── logging.rs
//! ├── router.rs         # Page navigation
//! └── state.rs
//! ```
//!
//! Each entity module follows the same layout:
//!
//! - `service.rs`: binds the typed API client to the generic screen
//! - `view.rs`: table rows and detail views
//! - `form.rs`: prompts that fill the create/edit draft
//! - `controller.rs`: command handlers and the interactive page
//!
//! The HTTP client, models, and configuration live in the workspace crates
//! `hostel-client`, `hostel-models`, and `hostel-config`.
//!
//! ## Quick Start
//!
//! ```bash
//! HOSTEL_API_URL=http://localhost:8080/api cargo run
//! cargo run -- students list
//! cargo run -- allocations allocate --student 3 --room 7
//! ```

pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use hostel_client;
pub use hostel_config;
pub use hostel_models;
