use hostel_models::{HostelDraft, HostelType};

use crate::utils::Console;
use crate::utils::prompts::{choice, number, text};

pub fn fill(draft: &mut HostelDraft, console: &Console) -> dialoguer::Result<()> {
    let theme = console.theme();
    draft.name = text(theme, "Name", &draft.name, true)?;
    draft.hostel_type = choice(theme, "Type", HostelType::ALL, draft.hostel_type, |t| {
        t.to_string()
    })?;
    draft.total_rooms = number(theme, "Total Rooms", draft.total_rooms, None)?;
    draft.total_capacity = number(theme, "Total Capacity", draft.total_capacity, None)?;
    draft.warden = text(theme, "Warden", &draft.warden, false)?;
    draft.address = text(theme, "Address", &draft.address, false)?;
    draft.facilities = text(theme, "Facilities", &draft.facilities, false)?;
    Ok(())
}
