//! Landing page with four headline counts.

use hostel_client::HostelClient;
use tracing::{error, instrument};

use crate::utils::table::details;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_hostels: usize,
    pub active_allocations: usize,
    pub total_allocations: usize,
}

impl DashboardStats {
    /// Fetch the four collections concurrently. Any failure yields all zeros.
    #[instrument(skip(client))]
    pub async fn load(client: &HostelClient) -> Self {
        let students = client.students();
        let hostels = client.hostels();
        let allocations = client.allocations();
        let result = tokio::try_join!(
            students.get_all(),
            hostels.get_all(),
            allocations.get_all(),
            allocations.get_active(),
        );
        match result {
            Ok((students, hostels, all, active)) => Self {
                total_students: students.len(),
                total_hostels: hostels.len(),
                active_allocations: active.len(),
                total_allocations: all.len(),
            },
            Err(e) => {
                error!(error = %e, "Error fetching dashboard stats");
                Self::default()
            }
        }
    }

    pub fn render(&self) -> String {
        details(&[
            ("Total Students", self.total_students.to_string()),
            ("Total Hostels", self.total_hostels.to_string()),
            ("Active Allocations", self.active_allocations.to_string()),
            ("Total Allocations", self.total_allocations.to_string()),
        ])
    }
}

pub async fn show(client: &HostelClient) {
    let stats = DashboardStats::load(client).await;
    println!("\nDashboard\n");
    println!("{}", stats.render());
}
