//! Student models and the student form draft.

use chrono::NaiveDate;
use hostel_core::serde::{deserialize_optional_date, deserialize_optional_string};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Resource;
use crate::ids::StudentId;
use crate::value_types::Gender;

/// A student as returned by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub department: String,
    #[serde(default = "first_year")]
    pub year: u8,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,
}

impl Student {
    /// Label used by the allocation form's student selector.
    pub fn selector_label(&self) -> String {
        format!("{} ({})", self.name, self.roll_number)
    }
}

fn first_year() -> u8 {
    1
}

/// Values of the student create/edit form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Roll number is required"))]
    pub roll_number: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub gender: Gender,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: u8,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            roll_number: String::new(),
            phone: String::new(),
            gender: Gender::Male,
            department: String::new(),
            year: 1,
            date_of_birth: None,
            address: String::new(),
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            roll_number: student.roll_number.clone(),
            phone: student.phone.clone(),
            gender: student.gender,
            department: student.department.clone(),
            year: student.year,
            date_of_birth: student.date_of_birth,
            address: student.address.clone().unwrap_or_default(),
        }
    }
}

impl Resource for Student {
    type Id = StudentId;
    type Draft = StudentDraft;

    const NOUN: &'static str = "Student";

    fn id(&self) -> StudentId {
        self.id
    }
}
