//! Command handlers for `hostel-admin hostels ...`.

use hostel_models::{HostelId, HostelType};

use super::HostelScreen;
use super::form::fill;
use super::view::hostel_details;
use crate::modules::resource::interactive::{self, print_listing};
use crate::state::AppState;
use crate::utils::Console;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let hostels = state.client.hostels().get_all().await?;
    print_listing(&hostels, false);
    Ok(())
}

pub async fn show(state: &AppState, id: HostelId) -> anyhow::Result<()> {
    let hostel = state.client.hostels().get_by_id(id).await?;
    println!("{}", hostel_details(&hostel));
    Ok(())
}

pub async fn list_by_type(state: &AppState, hostel_type: HostelType) -> anyhow::Result<()> {
    let hostels = state.client.hostels().get_by_type(hostel_type).await?;
    print_listing(&hostels, false);
    Ok(())
}

pub async fn add(state: &AppState, console: &Console) -> anyhow::Result<()> {
    interactive::add(state.client.hostels(), console, fill).await
}

pub async fn edit(state: &AppState, console: &Console, id: HostelId) -> anyhow::Result<()> {
    let api = state.client.hostels();
    let hostel = api.get_by_id(id).await?;
    interactive::edit(api, console, &hostel, fill).await
}

pub async fn delete(state: &AppState, console: &Console, id: HostelId) -> anyhow::Result<()> {
    interactive::remove(state.client.hostels(), console, id).await
}

/// The Hostels page.
pub async fn manage(state: &AppState, console: &Console) -> anyhow::Result<()> {
    let mut screen = HostelScreen::new(state.client.hostels());
    screen.mount().await;
    interactive::run(&mut screen, console, fill).await
}
