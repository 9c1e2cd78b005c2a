//! Hostel seeding.

use std::time::Instant;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::name::en::Name;
use hostel_client::HostelClient;
use hostel_models::{Hostel, HostelDraft, HostelType};
use rayon::prelude::*;

use super::SeedResult;
use super::rooms::NOMINAL_BEDS_PER_ROOM;

const TREES: &[&str] = &[
    "Maple", "Cedar", "Oak", "Birch", "Willow", "Pine", "Acacia", "Mahogany", "Palm", "Baobab",
];

/// Generates hostel drafts in parallel using Rayon, alternating Boys and
/// Girls hostels.
pub fn generate_hostels(count: usize, rooms_per_hostel: usize) -> Vec<HostelDraft> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let city: String = CityName().fake();
            let street: String = StreetName().fake();
            let building: String = BuildingNumber().fake();
            let hostel_type = if i % 2 == 0 {
                HostelType::Boys
            } else {
                HostelType::Girls
            };
            let name = match i / TREES.len() {
                0 => format!("{} Hall", TREES[i % TREES.len()]),
                round => format!("{} Hall {}", TREES[i % TREES.len()], round + 1),
            };

            HostelDraft {
                name,
                hostel_type,
                total_rooms: rooms_per_hostel as i32,
                total_capacity: (rooms_per_hostel as i32) * NOMINAL_BEDS_PER_ROOM,
                warden: Name().fake(),
                address: format!("{} {}, {}", building, street, city),
                facilities: "Wi-Fi, Laundry, Study Room".to_string(),
            }
        })
        .collect()
}

/// Creates hostels through the API
pub async fn seed_hostels(
    client: &HostelClient,
    count: usize,
    rooms_per_hostel: usize,
) -> SeedResult<Vec<Hostel>> {
    let start_time = Instant::now();
    println!("🏠 Seeding {} hostels...", count);

    let api = client.hostels();
    let mut created = Vec::with_capacity(count);
    for draft in generate_hostels(count, rooms_per_hostel) {
        created.push(api.create(&draft).await?);
    }

    println!(
        "   ✓ Created {} hostels in {:?}",
        created.len(),
        start_time.elapsed()
    );
    Ok(created)
}
