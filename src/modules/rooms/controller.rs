//! Command handlers for `hostel-admin rooms ...`.

use hostel_models::{HostelId, RoomId};

use super::RoomScreen;
use super::form::fill;
use super::view::room_details;
use crate::modules::resource::interactive::{self, print_listing};
use crate::state::AppState;
use crate::utils::Console;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let rooms = state.client.rooms().get_all().await?;
    print_listing(&rooms, false);
    Ok(())
}

pub async fn show(state: &AppState, id: RoomId) -> anyhow::Result<()> {
    let room = state.client.rooms().get_by_id(id).await?;
    println!("{}", room_details(&room));
    Ok(())
}

/// Rooms of one hostel, optionally only those with a free bed.
pub async fn list_by_hostel(
    state: &AppState,
    hostel_id: HostelId,
    available_only: bool,
) -> anyhow::Result<()> {
    let api = state.client.rooms();
    let rooms = if available_only {
        api.get_available_by_hostel(hostel_id).await?
    } else {
        api.get_by_hostel(hostel_id).await?
    };
    print_listing(&rooms, false);
    Ok(())
}

pub async fn add(state: &AppState, console: &Console) -> anyhow::Result<()> {
    let hostels = state.client.hostels().get_all().await?;
    interactive::add(state.client.rooms(), console, |draft, console| {
        fill(draft, console, &hostels)
    })
    .await
}

pub async fn edit(state: &AppState, console: &Console, id: RoomId) -> anyhow::Result<()> {
    let api = state.client.rooms();
    let hostel_api = state.client.hostels();
    let (room, hostels) = tokio::try_join!(api.get_by_id(id), hostel_api.get_all())?;
    interactive::edit(api, console, &room, |draft, console| {
        fill(draft, console, &hostels)
    })
    .await
}

pub async fn delete(state: &AppState, console: &Console, id: RoomId) -> anyhow::Result<()> {
    interactive::remove(state.client.rooms(), console, id).await
}

/// The Rooms page.
pub async fn manage(state: &AppState, console: &Console) -> anyhow::Result<()> {
    let mut screen: RoomScreen = RoomScreen::new(state.client.rooms(), state.client.hostels());
    screen.mount().await;
    let hostels = screen.hostels().to_vec();
    interactive::run(screen.crud_mut(), console, |draft, console| {
        fill(draft, console, &hostels)
    })
    .await
}
