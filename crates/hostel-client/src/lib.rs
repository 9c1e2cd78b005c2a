//! # Hostel Client
//!
//! Typed REST client for the hostel management backend.
//!
//! The client exposes the four resource groups of the backend, one method per
//! endpoint. Each method performs exactly one HTTP request and returns the
//! parsed body; failures surface unmodified as [`ApiError`].
//!
//! - [`StudentApi`]: `/students`
//! - [`HostelApi`]: `/hostels`
//! - [`RoomApi`]: `/rooms`
//! - [`AllocationApi`]: `/allocations`
//!
//! # Example
//!
//! ```ignore
//! use hostel_client::HostelClient;
//! use hostel_config::ApiConfig;
//!
//! let client = HostelClient::new(&ApiConfig::from_env())?;
//! let students = client.students().get_all().await?;
//! let active = client.allocations().get_active().await?;
//! ```

pub mod allocations;
pub mod error;
pub mod hostels;
mod http;
pub mod rooms;
pub mod students;

use hostel_config::ApiConfig;

pub use allocations::AllocationApi;
pub use error::ApiError;
pub use hostels::HostelApi;
pub use rooms::RoomApi;
pub use students::StudentApi;

use crate::http::Http;

/// Entry point to every resource group. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HostelClient {
    http: Http,
}

impl HostelClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::new(config)?,
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::with_client(client, base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    pub fn students(&self) -> StudentApi {
        StudentApi::new(self.http.clone())
    }

    pub fn hostels(&self) -> HostelApi {
        HostelApi::new(self.http.clone())
    }

    pub fn rooms(&self) -> RoomApi {
        RoomApi::new(self.http.clone())
    }

    pub fn allocations(&self) -> AllocationApi {
        AllocationApi::new(self.http.clone())
    }
}
