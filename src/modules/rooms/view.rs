use hostel_models::Room;

use crate::modules::resource::interactive::Listing;
use crate::utils::Table;
use crate::utils::table::details;

fn floor(room: &Room) -> String {
    room.floor.clone().unwrap_or_else(|| "N/A".to_string())
}

impl Listing for Room {
    fn table(items: &[Room]) -> Table {
        let mut table = Table::new([
            "Hostel",
            "Room Number",
            "Floor",
            "Type",
            "Capacity",
            "Occupied",
            "Available",
            "Status",
        ]);
        for r in items {
            table.row([
                r.hostel.name.clone(),
                r.room_number.clone(),
                floor(r),
                r.room_type.to_string(),
                r.capacity.to_string(),
                r.occupied_beds.to_string(),
                r.available_beds.to_string(),
                r.status_label().to_string(),
            ]);
        }
        table
    }

    fn label(&self) -> String {
        format!("{} - Room {}", self.hostel.name, self.room_number)
    }
}

pub fn room_details(room: &Room) -> String {
    details(&[
        ("ID", room.id.to_string()),
        ("Hostel", room.hostel.name.clone()),
        ("Room Number", room.room_number.clone()),
        ("Floor", floor(room)),
        ("Type", room.room_type.to_string()),
        ("Capacity", room.capacity.to_string()),
        ("Occupied", room.occupied_beds.to_string()),
        ("Available", room.available_beds.to_string()),
        ("Status", room.status_label().to_string()),
    ])
}
