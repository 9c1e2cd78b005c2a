use dialoguer::Select;
use hostel_models::{Room, RoomId, Student, StudentId};

use super::{AllocationBackend, AllocationScreen};
use crate::utils::Console;

/// Prompt for the student and the room, starting on the current selections.
/// Dismissing a prompt leaves that selection as it was.
pub fn fill<B: AllocationBackend>(
    screen: &mut AllocationScreen<B>,
    console: &Console,
) -> dialoguer::Result<()> {
    let student = pick_student(screen.students(), screen.draft().student_id, console)?;
    screen.select_student(student);
    let room = pick_room(screen.available_rooms(), screen.draft().room_id, console)?;
    screen.select_room(room);
    Ok(())
}

fn pick_student(
    students: &[Student],
    current: Option<StudentId>,
    console: &Console,
) -> dialoguer::Result<Option<StudentId>> {
    if students.is_empty() {
        println!("No students found.");
        return Ok(None);
    }
    let labels: Vec<String> = students.iter().map(Student::selector_label).collect();
    let start = current
        .and_then(|id| students.iter().position(|s| s.id == id))
        .unwrap_or(0);
    let index = Select::with_theme(console.theme())
        .with_prompt("Student *")
        .items(&labels)
        .default(start)
        .interact_opt()?;
    Ok(index.map(|i| students[i].id).or(current))
}

fn pick_room(
    rooms: &[Room],
    current: Option<RoomId>,
    console: &Console,
) -> dialoguer::Result<Option<RoomId>> {
    if rooms.is_empty() {
        println!("No rooms with free beds.");
        return Ok(None);
    }
    let labels: Vec<String> = rooms.iter().map(Room::selector_label).collect();
    let start = current
        .and_then(|id| rooms.iter().position(|r| r.id == id))
        .unwrap_or(0);
    let index = Select::with_theme(console.theme())
        .with_prompt("Available Room *")
        .items(&labels)
        .default(start)
        .interact_opt()?;
    Ok(index.map(|i| rooms[i].id).or(current))
}
