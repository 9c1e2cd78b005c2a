use hostel_models::Student;
use hostel_models::value_types::year_label;

use crate::modules::resource::interactive::Listing;
use crate::utils::Table;
use crate::utils::table::details;

impl Listing for Student {
    fn table(items: &[Student]) -> Table {
        let mut table = Table::new([
            "Roll No",
            "Name",
            "Email",
            "Phone",
            "Gender",
            "Department",
            "Year",
        ]);
        for s in items {
            table.row([
                s.roll_number.clone(),
                s.name.clone(),
                s.email.clone(),
                s.phone.clone(),
                s.gender.to_string(),
                s.department.clone(),
                s.year.to_string(),
            ]);
        }
        table
    }

    fn label(&self) -> String {
        self.selector_label()
    }
}

pub fn student_details(student: &Student) -> String {
    details(&[
        ("ID", student.id.to_string()),
        ("Name", student.name.clone()),
        ("Roll Number", student.roll_number.clone()),
        ("Email", student.email.clone()),
        ("Phone", student.phone.clone()),
        ("Gender", student.gender.to_string()),
        ("Department", student.department.clone()),
        ("Year", year_label(student.year)),
        (
            "Date of Birth",
            student
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Address",
            student.address.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_models::{Gender, StudentId};

    fn ada() -> Student {
        Student {
            id: StudentId(7),
            name: "Ada Obi".to_string(),
            email: "ada@uni.edu".to_string(),
            roll_number: "CS-001".to_string(),
            phone: "08030000000".to_string(),
            gender: Gender::Female,
            department: "Computer Science".to_string(),
            year: 2,
            date_of_birth: None,
            address: None,
        }
    }

    #[test]
    fn test_table_lists_year_as_number() {
        let rendered = Student::table(&[ada()]).render();
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.starts_with("CS-001"));
        assert!(row.ends_with("Computer Science  2"));
    }

    #[test]
    fn test_details_fill_missing_optional_fields() {
        let text = student_details(&ada());
        assert!(text.contains("Year           2nd Year"));
        assert!(text.contains("Date of Birth  N/A"));
        assert!(text.contains("Address        N/A"));
    }
}
