//! Student seeding.

use std::time::Instant;

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::CellNumber;
use hostel_client::HostelClient;
use hostel_models::{Gender, Student, StudentDraft};
use rand::Rng;
use rayon::prelude::*;

use super::SeedResult;

/// Departments and the prefix used in their roll numbers.
const DEPARTMENTS: &[(&str, &str)] = &[
    ("Computer Science", "CSC"),
    ("Electrical Engineering", "EEE"),
    ("Mechanical Engineering", "MEE"),
    ("Mathematics", "MTH"),
    ("Economics", "ECO"),
    ("Medicine", "MED"),
];

fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

/// Generates student drafts in parallel using Rayon.
///
/// Roll numbers are `<DEPT>-<index>`, unique within one run.
pub fn generate_students(count: usize) -> Vec<StudentDraft> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = rand::thread_rng();
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let (department, prefix) = DEPARTMENTS[i % DEPARTMENTS.len()];
            let street: String = StreetName().fake();
            let city: String = CityName().fake();

            StudentDraft {
                name: format!("{} {}", first_name, last_name),
                email: format!(
                    "{}.{}+{}@example.com",
                    slug(&first_name),
                    slug(&last_name),
                    i
                ),
                roll_number: format!("{}-{:04}", prefix, i + 1),
                phone: CellNumber().fake(),
                gender: if rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                },
                department: department.to_string(),
                year: rng.gen_range(1..=4),
                date_of_birth: NaiveDate::from_ymd_opt(
                    rng.gen_range(1998..=2007),
                    rng.gen_range(1..=12),
                    rng.gen_range(1..=28),
                ),
                address: format!("{}, {}", street, city),
            }
        })
        .collect()
}

/// Creates students through the API
pub async fn seed_students(client: &HostelClient, count: usize) -> SeedResult<Vec<Student>> {
    let start_time = Instant::now();
    println!("🎓 Seeding {} students...", count);

    let api = client.students();
    let mut created = Vec::with_capacity(count);
    for draft in generate_students(count) {
        created.push(api.create(&draft).await?);
    }

    println!(
        "   ✓ Created {} students in {:?}",
        created.len(),
        start_time.elapsed()
    );
    Ok(created)
}
