use hostel_models::Allocation;

use crate::utils::Table;
use crate::utils::table::details;

pub fn allocation_table(items: &[Allocation]) -> Table {
    let mut table = Table::new([
        "Student",
        "Roll Number",
        "Hostel",
        "Room",
        "Allocation Date",
        "Check-In",
        "Check-Out",
        "Status",
    ]);
    for a in items {
        table.row([
            a.student.name.clone(),
            a.student.roll_number.clone(),
            a.room.hostel.name.clone(),
            a.room.room_number.clone(),
            a.allocation_date.to_string(),
            a.check_in_label(),
            a.check_out_label(),
            a.status.to_string(),
        ]);
    }
    table
}

pub fn print_allocations(items: &[Allocation]) {
    let table = allocation_table(items);
    if table.is_empty() {
        println!("No allocations found.");
    } else {
        println!("{}", table.render());
    }
}

/// Label used when picking an allocation to act on.
pub fn allocation_label(allocation: &Allocation) -> String {
    format!(
        "{} ({}) - {} Room {}",
        allocation.student.name,
        allocation.student.roll_number,
        allocation.room.hostel.name,
        allocation.room.room_number
    )
}

pub fn allocation_details(allocation: &Allocation) -> String {
    details(&[
        ("ID", allocation.id.to_string()),
        (
            "Student",
            format!(
                "{} ({})",
                allocation.student.name, allocation.student.roll_number
            ),
        ),
        ("Hostel", allocation.room.hostel.name.clone()),
        ("Room", allocation.room.room_number.clone()),
        ("Allocation Date", allocation.allocation_date.to_string()),
        ("Check-In", allocation.check_in_label()),
        ("Check-Out", allocation.check_out_label()),
        ("Status", allocation.status.to_string()),
    ])
}
