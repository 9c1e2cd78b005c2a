use hostel_models::value_types::{YEARS, year_label};
use hostel_models::{Gender, StudentDraft};

use crate::utils::Console;
use crate::utils::prompts::{choice, date, text};

pub fn fill(draft: &mut StudentDraft, console: &Console) -> dialoguer::Result<()> {
    let theme = console.theme();
    draft.name = text(theme, "Name", &draft.name, true)?;
    draft.email = text(theme, "Email", &draft.email, true)?;
    draft.roll_number = text(theme, "Roll Number", &draft.roll_number, true)?;
    draft.phone = text(theme, "Phone", &draft.phone, true)?;
    draft.gender = choice(theme, "Gender", Gender::ALL, draft.gender, |g| g.to_string())?;
    draft.department = text(theme, "Department", &draft.department, true)?;
    draft.year = choice(theme, "Year", &YEARS, draft.year, |y| year_label(*y))?;
    draft.date_of_birth = date(theme, "Date of Birth", draft.date_of_birth)?;
    draft.address = text(theme, "Address", &draft.address, false)?;
    Ok(())
}
