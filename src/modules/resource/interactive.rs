//! Terminal loop for a [`CrudScreen`].
//!
//! The console form is modal: "Add" opens the form, fills the draft, and
//! submits. If the backend rejects the draft the user may retry with the same
//! values, keep the draft for later, or discard it.

use dialoguer::{Confirm, Select};
use hostel_models::Resource;

use super::{CrudScreen, DraftOf, IdOf, Outcome, ResourceApi, noun};
use crate::utils::{Console, Table};

/// How a resource is listed on screen.
pub trait Listing: Resource {
    fn table(items: &[Self]) -> Table;

    /// One-line label used when picking a row.
    fn label(&self) -> String;
}

#[derive(Clone, Copy)]
enum Action {
    Add,
    Edit,
    Delete,
    Refresh,
    Back,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Refresh,
        Action::Back,
    ];

    fn label(&self, noun: &str, form_open: bool) -> String {
        match self {
            Action::Add if form_open => format!("Continue New {}", noun),
            Action::Add => format!("Add New {}", noun),
            Action::Edit => format!("Edit {}", noun),
            Action::Delete => format!("Delete {}", noun),
            Action::Refresh => "Refresh".to_string(),
            Action::Back => "Back".to_string(),
        }
    }
}

/// Print the current collection, or a placeholder while empty.
pub fn print_listing<E: Listing>(items: &[E], loading: bool) {
    if loading {
        println!("Loading...");
        return;
    }
    let table = E::table(items);
    if table.is_empty() {
        println!("No {}s found.", noun(E::NOUN));
    } else {
        println!("{}", table.render());
    }
}

fn menu_labels<A: ResourceApi>(screen: &CrudScreen<A>) -> Vec<String> {
    Action::ALL
        .iter()
        .map(|a| a.label(A::Entity::NOUN, screen.is_form_visible()))
        .collect()
}

/// Run the list/add/edit/delete loop until the user picks "Back".
///
/// `fill` prompts for every form field, starting from the current draft.
pub async fn run<A, F>(screen: &mut CrudScreen<A>, console: &Console, mut fill: F) -> anyhow::Result<()>
where
    A: ResourceApi,
    A::Entity: Listing,
    F: FnMut(&mut DraftOf<A>, &Console) -> dialoguer::Result<()>,
{
    let title = format!("{}s", A::Entity::NOUN);
    loop {
        println!("\n{}\n", title);
        print_listing(screen.items(), screen.is_loading());

        let labels = menu_labels(screen);
        let choice = Select::with_theme(console.theme())
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Add => {
                if !screen.is_form_visible() {
                    screen.toggle_form();
                }
                edit_until_done(screen, console, &mut fill).await?;
            }
            Action::Edit => {
                if let Some(entity) = pick(screen.items(), console, "Edit which?")? {
                    screen.begin_edit(&entity);
                    edit_until_done(screen, console, &mut fill).await?;
                }
            }
            Action::Delete => {
                if let Some(entity) = pick(screen.items(), console, "Delete which?")? {
                    screen.delete(entity.id(), console).await;
                }
            }
            Action::Refresh => screen.refresh().await,
            Action::Back => return Ok(()),
        }
    }
}

async fn edit_until_done<A, F>(
    screen: &mut CrudScreen<A>,
    console: &Console,
    fill: &mut F,
) -> anyhow::Result<()>
where
    A: ResourceApi,
    F: FnMut(&mut DraftOf<A>, &Console) -> dialoguer::Result<()>,
{
    if run_form(screen, console, fill).await? == Outcome::Applied {
        return Ok(());
    }
    let keep = screen.editing().is_none()
        && Confirm::with_theme(console.theme())
            .with_prompt("Keep the draft for later?")
            .default(true)
            .interact()?;
    set_aside(screen, keep);
    Ok(())
}

/// Leave an unapplied form. A kept draft stays open so the menu offers to
/// continue it; anything else is reset.
fn set_aside<A: ResourceApi>(screen: &mut CrudScreen<A>, keep: bool) {
    if !keep {
        screen.cancel();
    }
}

/// Fill and submit the open form until it is applied or the user gives up.
pub async fn run_form<A, F>(
    screen: &mut CrudScreen<A>,
    console: &Console,
    fill: &mut F,
) -> anyhow::Result<Outcome>
where
    A: ResourceApi,
    F: FnMut(&mut DraftOf<A>, &Console) -> dialoguer::Result<()>,
{
    loop {
        fill(screen.draft_mut(), console)?;
        let outcome = screen.submit(console).await;
        if matches!(outcome, Outcome::Applied | Outcome::Declined) {
            return Ok(outcome);
        }
        let retry = Confirm::with_theme(console.theme())
            .with_prompt("Edit the form and try again?")
            .default(true)
            .interact()?;
        if !retry {
            return Ok(outcome);
        }
    }
}

/// One-shot create from the command line.
pub async fn add<A, F>(api: A, console: &Console, mut fill: F) -> anyhow::Result<()>
where
    A: ResourceApi,
    F: FnMut(&mut DraftOf<A>, &Console) -> dialoguer::Result<()>,
{
    let mut screen = CrudScreen::new(api);
    screen.toggle_form();
    ensure_applied::<A>(run_form(&mut screen, console, &mut fill).await?, "saved")
}

/// One-shot edit of `entity` from the command line.
pub async fn edit<A, F>(api: A, console: &Console, entity: &A::Entity, mut fill: F) -> anyhow::Result<()>
where
    A: ResourceApi,
    F: FnMut(&mut DraftOf<A>, &Console) -> dialoguer::Result<()>,
{
    let mut screen = CrudScreen::new(api);
    screen.begin_edit(entity);
    ensure_applied::<A>(run_form(&mut screen, console, &mut fill).await?, "saved")
}

/// One-shot delete from the command line. Declining is not an error.
pub async fn remove<A: ResourceApi>(api: A, console: &Console, id: IdOf<A>) -> anyhow::Result<()> {
    let mut screen = CrudScreen::new(api);
    match screen.delete(id, console).await {
        Outcome::Failed => ensure_applied::<A>(Outcome::Failed, "deleted"),
        _ => Ok(()),
    }
}

fn ensure_applied<A: ResourceApi>(outcome: Outcome, verb: &str) -> anyhow::Result<()> {
    match outcome {
        Outcome::Applied | Outcome::Declined => Ok(()),
        Outcome::Incomplete | Outcome::Failed => {
            anyhow::bail!("{} was not {}", A::Entity::NOUN, verb)
        }
    }
}

/// Let the user choose one row. `None` when there is nothing to choose or
/// the prompt was dismissed.
pub fn pick<E: Listing>(items: &[E], console: &Console, prompt: &str) -> dialoguer::Result<Option<E>> {
    if items.is_empty() {
        println!("No {}s found.", noun(E::NOUN));
        return Ok(None);
    }
    let labels: Vec<String> = items.iter().map(Listing::label).collect();
    let choice = Select::with_theme(console.theme())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| items[i].clone()))
}
