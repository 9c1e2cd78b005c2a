//! Command handlers for `hostel-admin allocations ...` and the Allocations
//! page.

use dialoguer::{Confirm, Select};
use hostel_models::{Allocation, AllocationAction, AllocationId, RoomId, StudentId};

use super::AllocationScreen;
use super::form::fill;
use super::view::{allocation_details, allocation_label, print_allocations};
use crate::modules::resource::Outcome;
use crate::state::AppState;
use crate::utils::Console;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let allocations = state.client.allocations().get_all().await?;
    print_allocations(&allocations);
    Ok(())
}

pub async fn show(state: &AppState, id: AllocationId) -> anyhow::Result<()> {
    let allocation = state.client.allocations().get_by_id(id).await?;
    println!("{}", allocation_details(&allocation));
    Ok(())
}

pub async fn list_active(state: &AppState) -> anyhow::Result<()> {
    let allocations = state.client.allocations().get_active().await?;
    print_allocations(&allocations);
    Ok(())
}

pub async fn list_by_student(state: &AppState, student_id: StudentId) -> anyhow::Result<()> {
    let allocations = state.client.allocations().get_by_student(student_id).await?;
    print_allocations(&allocations);
    Ok(())
}

pub async fn list_by_room(state: &AppState, room_id: RoomId) -> anyhow::Result<()> {
    let allocations = state.client.allocations().get_by_room(room_id).await?;
    print_allocations(&allocations);
    Ok(())
}

/// Allocate a room, prompting for whichever of student and room is missing.
pub async fn allocate(
    state: &AppState,
    console: &Console,
    student_id: Option<StudentId>,
    room_id: Option<RoomId>,
) -> anyhow::Result<()> {
    let mut screen = AllocationScreen::new(state.client.clone());
    screen.mount().await;
    screen.toggle_form();
    screen.select_student(student_id);
    screen.select_room(room_id);
    if screen.draft().request().is_none() {
        fill(&mut screen, console)?;
    }
    expect_applied(screen.submit(console).await, "Room was not allocated")
}

pub async fn check_in(state: &AppState, console: &Console, id: AllocationId) -> anyhow::Result<()> {
    let mut screen = mounted(state).await;
    ensure_offered(&screen, id, AllocationAction::CheckIn)?;
    expect_applied(screen.check_in(id, console).await, "Student was not checked in")
}

pub async fn check_out(state: &AppState, console: &Console, id: AllocationId) -> anyhow::Result<()> {
    let mut screen = mounted(state).await;
    ensure_offered(&screen, id, AllocationAction::CheckOut)?;
    expect_applied(screen.check_out(id, console).await, "Student was not checked out")
}

pub async fn delete(state: &AppState, console: &Console, id: AllocationId) -> anyhow::Result<()> {
    let mut screen = AllocationScreen::new(state.client.clone());
    expect_applied(screen.delete(id, console).await, "Allocation was not deleted")
}

async fn mounted(state: &AppState) -> AllocationScreen {
    let mut screen = AllocationScreen::new(state.client.clone());
    screen.mount().await;
    screen
}

fn ensure_offered(
    screen: &AllocationScreen,
    id: AllocationId,
    action: AllocationAction,
) -> anyhow::Result<()> {
    match screen.find(id) {
        None => anyhow::bail!("Allocation {} not found", id),
        Some(_) if !screen.offers(id, action) => {
            anyhow::bail!("{} is not available for allocation {}", action.label(), id)
        }
        Some(_) => Ok(()),
    }
}

fn expect_applied(outcome: Outcome, message: &str) -> anyhow::Result<()> {
    match outcome {
        Outcome::Applied | Outcome::Declined => Ok(()),
        Outcome::Incomplete | Outcome::Failed => anyhow::bail!("{}", message),
    }
}

/// The Allocations page.
pub async fn manage(state: &AppState, console: &Console) -> anyhow::Result<()> {
    let mut screen = mounted(state).await;
    loop {
        println!("\nRoom Allocations\n");
        if screen.is_loading() {
            println!("Loading allocations...");
        } else {
            print_allocations(screen.allocations());
        }

        let toggle = if screen.is_form_visible() {
            "Continue Allocation"
        } else {
            "Allocate New Room"
        };
        let items = [
            toggle,
            AllocationAction::CheckIn.label(),
            AllocationAction::CheckOut.label(),
            "Delete Allocation",
            "Refresh",
            "Back",
        ];
        let choice = Select::with_theme(console.theme())
            .with_prompt("Action")
            .items(&items)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                if !screen.is_form_visible() {
                    screen.toggle_form();
                }
                allocate_until_done(&mut screen, console).await?;
            }
            1 => {
                if let Some(id) = pick(&screen, console, AllocationAction::CheckIn)? {
                    screen.check_in(id, console).await;
                }
            }
            2 => {
                if let Some(id) = pick(&screen, console, AllocationAction::CheckOut)? {
                    screen.check_out(id, console).await;
                }
            }
            3 => {
                if let Some(id) = pick(&screen, console, AllocationAction::Delete)? {
                    screen.delete(id, console).await;
                }
            }
            4 => {
                screen.refresh_allocations().await;
                screen.refresh_rooms().await;
            }
            _ => return Ok(()),
        }
    }
}

/// Fill and submit the allocation form until it is applied or the user
/// gives up. A kept selection leaves the form open for the next visit.
async fn allocate_until_done(screen: &mut AllocationScreen, console: &Console) -> anyhow::Result<()> {
    loop {
        fill(screen, console)?;
        if screen.submit(console).await == Outcome::Applied {
            return Ok(());
        }
        let retry = Confirm::with_theme(console.theme())
            .with_prompt("Change the selection and try again?")
            .default(true)
            .interact()?;
        if !retry {
            break;
        }
    }
    let keep = Confirm::with_theme(console.theme())
        .with_prompt("Keep the selection for later?")
        .default(false)
        .interact()?;
    if !keep {
        screen.cancel();
    }
    Ok(())
}

/// Choose among allocations currently offering `action`.
fn pick(
    screen: &AllocationScreen,
    console: &Console,
    action: AllocationAction,
) -> dialoguer::Result<Option<AllocationId>> {
    let candidates: Vec<&Allocation> = screen
        .allocations()
        .iter()
        .filter(|a| a.actions().contains(&action))
        .collect();
    if candidates.is_empty() {
        println!("No allocations to {}.", action.label().to_lowercase());
        return Ok(None);
    }
    let labels: Vec<String> = candidates.iter().map(|a| allocation_label(a)).collect();
    let index = Select::with_theme(console.theme())
        .with_prompt(action.label())
        .items(&labels)
        .interact_opt()?;
    Ok(index.map(|i| candidates[i].id))
}
