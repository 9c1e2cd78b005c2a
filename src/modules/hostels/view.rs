use hostel_models::Hostel;

use crate::modules::resource::interactive::Listing;
use crate::utils::Table;
use crate::utils::table::details;

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

impl Listing for Hostel {
    fn table(items: &[Hostel]) -> Table {
        let mut table = Table::new([
            "Name",
            "Type",
            "Total Rooms",
            "Total Capacity",
            "Occupied",
            "Available",
            "Warden",
        ]);
        for h in items {
            table.row([
                h.name.clone(),
                h.hostel_type.to_string(),
                h.total_rooms.to_string(),
                h.total_capacity.to_string(),
                h.occupied_capacity.to_string(),
                h.available_capacity.to_string(),
                or_na(&h.warden),
            ]);
        }
        table
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.hostel_type)
    }
}

pub fn hostel_details(hostel: &Hostel) -> String {
    details(&[
        ("ID", hostel.id.to_string()),
        ("Name", hostel.name.clone()),
        ("Type", hostel.hostel_type.to_string()),
        ("Total Rooms", hostel.total_rooms.to_string()),
        ("Total Capacity", hostel.total_capacity.to_string()),
        ("Occupied", hostel.occupied_capacity.to_string()),
        ("Available", hostel.available_capacity.to_string()),
        ("Warden", or_na(&hostel.warden)),
        ("Address", or_na(&hostel.address)),
        ("Facilities", or_na(&hostel.facilities)),
    ])
}
