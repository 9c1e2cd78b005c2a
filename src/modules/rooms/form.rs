use hostel_models::{Hostel, RoomDraft, RoomType};

use crate::utils::Console;
use crate::utils::prompts::{choice, number, text};

/// Prompt for the room fields. `hostels` feeds the hostel selector; with no
/// hostels the selection stays empty and the draft fails validation.
pub fn fill(draft: &mut RoomDraft, console: &Console, hostels: &[Hostel]) -> dialoguer::Result<()> {
    let theme = console.theme();
    if hostels.is_empty() {
        println!("No hostels available. Create a hostel first.");
    } else {
        let ids: Vec<_> = hostels.iter().map(|h| Some(h.id)).collect();
        draft.hostel.id = choice(theme, "Hostel *", &ids, draft.hostel.id, |id| {
            hostels
                .iter()
                .find(|h| Some(h.id) == *id)
                .map(|h| h.name.clone())
                .unwrap_or_default()
        })?;
    }
    draft.room_number = text(theme, "Room Number", &draft.room_number, true)?;
    draft.floor = text(theme, "Floor", &draft.floor, false)?;
    draft.room_type = choice(theme, "Room Type", RoomType::ALL, draft.room_type, |t| {
        t.to_string()
    })?;
    draft.capacity = number(theme, "Capacity", draft.capacity, Some(1))?;
    Ok(())
}
