//! Room seeding.

use std::time::Instant;

use hostel_client::HostelClient;
use hostel_models::{Hostel, HostelLink, Room, RoomDraft, RoomType};
use rand::Rng;
use rayon::prelude::*;

use super::SeedResult;

pub(crate) const NOMINAL_BEDS_PER_ROOM: i32 = 2;

const ROOMS_PER_FLOOR: usize = 10;

fn beds(room_type: RoomType) -> i32 {
    match room_type {
        RoomType::Single => 1,
        RoomType::Double => 2,
        RoomType::Triple => 3,
        RoomType::Quad => 4,
    }
}

/// Generates the rooms of one hostel. Room numbers encode the floor, ten
/// rooms per floor starting at 101.
pub fn generate_rooms(hostel: &Hostel, count: usize) -> Vec<RoomDraft> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let floor = i / ROOMS_PER_FLOOR + 1;
            let room_type = RoomType::ALL[rand::thread_rng().gen_range(0..RoomType::ALL.len())];

            RoomDraft {
                hostel: HostelLink {
                    id: Some(hostel.id),
                },
                room_number: format!("{}{:02}", floor, i % ROOMS_PER_FLOOR + 1),
                capacity: beds(room_type),
                floor: floor.to_string(),
                room_type,
            }
        })
        .collect()
}

/// Creates rooms for every hostel through the API
pub async fn seed_rooms(
    client: &HostelClient,
    hostels: &[Hostel],
    rooms_per_hostel: usize,
) -> SeedResult<Vec<Room>> {
    let start_time = Instant::now();
    println!(
        "🚪 Seeding {} rooms ({} per hostel)...",
        hostels.len() * rooms_per_hostel,
        rooms_per_hostel
    );

    let api = client.rooms();
    let mut created = Vec::with_capacity(hostels.len() * rooms_per_hostel);
    for hostel in hostels {
        for draft in generate_rooms(hostel, rooms_per_hostel) {
            created.push(api.create(&draft).await?);
        }
    }

    println!(
        "   ✓ Created {} rooms in {:?}",
        created.len(),
        start_time.elapsed()
    );
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_models::HostelId;

    fn hostel() -> Hostel {
        Hostel {
            id: HostelId(5),
            name: "Maple Hall".to_string(),
            hostel_type: Default::default(),
            total_rooms: 12,
            total_capacity: 24,
            occupied_capacity: 0,
            available_capacity: 24,
            warden: None,
            address: None,
            facilities: None,
        }
    }

    #[test]
    fn test_room_numbers_follow_floors() {
        let rooms = generate_rooms(&hostel(), 12);
        assert_eq!(rooms[0].room_number, "101");
        assert_eq!(rooms[9].room_number, "110");
        assert_eq!(rooms[10].room_number, "201");
        assert_eq!(rooms[10].floor, "2");
    }

    #[test]
    fn test_capacity_matches_room_type() {
        for room in generate_rooms(&hostel(), 20) {
            assert_eq!(room.capacity, beds(room.room_type));
            assert_eq!(room.hostel.id, Some(HostelId(5)));
        }
    }
}
