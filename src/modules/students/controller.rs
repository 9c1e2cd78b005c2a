//! Command handlers for `hostel-admin students ...`.

use hostel_models::StudentId;

use super::StudentScreen;
use super::form::fill;
use super::view::student_details;
use crate::modules::resource::interactive::{self, print_listing};
use crate::state::AppState;
use crate::utils::Console;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let students = state.client.students().get_all().await?;
    print_listing(&students, false);
    Ok(())
}

pub async fn show(state: &AppState, id: StudentId) -> anyhow::Result<()> {
    let student = state.client.students().get_by_id(id).await?;
    println!("{}", student_details(&student));
    Ok(())
}

pub async fn find_by_roll_number(state: &AppState, roll_number: &str) -> anyhow::Result<()> {
    let student = state
        .client
        .students()
        .get_by_roll_number(roll_number)
        .await?;
    println!("{}", student_details(&student));
    Ok(())
}

pub async fn add(state: &AppState, console: &Console) -> anyhow::Result<()> {
    interactive::add(state.client.students(), console, fill).await
}

pub async fn edit(state: &AppState, console: &Console, id: StudentId) -> anyhow::Result<()> {
    let api = state.client.students();
    let student = api.get_by_id(id).await?;
    interactive::edit(api, console, &student, fill).await
}

pub async fn delete(state: &AppState, console: &Console, id: StudentId) -> anyhow::Result<()> {
    interactive::remove(state.client.students(), console, id).await
}

/// The Students page.
pub async fn manage(state: &AppState, console: &Console) -> anyhow::Result<()> {
    let mut screen = StudentScreen::new(state.client.students());
    screen.mount().await;
    interactive::run(&mut screen, console, fill).await
}
