//! Seeding and clearing of demo data.

pub mod hostels;
pub mod rooms;
pub mod students;

use std::time::Instant;

use hostel_client::HostelClient;

pub use hostels::{generate_hostels, seed_hostels};
pub use rooms::{generate_rooms, seed_rooms};
pub use students::{generate_students, seed_students};

pub type SeedResult<T> = Result<T, Box<dyn std::error::Error>>;

/// How much demo data to create.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub hostels: usize,
    pub rooms_per_hostel: usize,
    pub students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            hostels: 2,
            rooms_per_hostel: 10,
            students: 30,
        }
    }
}

/// Create hostels, then their rooms, then students.
pub async fn seed_all(client: &HostelClient, config: SeedConfig) -> SeedResult<()> {
    let start_time = Instant::now();
    println!("🌱 Seeding demo data...\n");

    let hostels = seed_hostels(client, config.hostels, config.rooms_per_hostel).await?;
    seed_rooms(client, &hostels, config.rooms_per_hostel).await?;
    seed_students(client, config.students).await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    Ok(())
}

/// Delete every allocation, room, student, and hostel, in that order so no
/// delete is refused for a dependent record.
pub async fn clear_all(client: &HostelClient) -> SeedResult<()> {
    let start_time = Instant::now();
    println!("🗑️  Clearing all data...\n");

    let allocations = client.allocations();
    let existing = allocations.get_all().await?;
    for allocation in &existing {
        allocations.delete(allocation.id).await?;
    }
    println!("   ✓ Deleted {} allocations", existing.len());

    let rooms = client.rooms();
    let existing = rooms.get_all().await?;
    for room in &existing {
        rooms.delete(room.id).await?;
    }
    println!("   ✓ Deleted {} rooms", existing.len());

    let students = client.students();
    let existing = students.get_all().await?;
    for student in &existing {
        students.delete(student.id).await?;
    }
    println!("   ✓ Deleted {} students", existing.len());

    let hostels = client.hostels();
    let existing = hostels.get_all().await?;
    for hostel in &existing {
        hostels.delete(hostel.id).await?;
    }
    println!("   ✓ Deleted {} hostels", existing.len());

    println!("\n✅ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
