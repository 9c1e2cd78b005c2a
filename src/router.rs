//! Navigation between the five pages of the console.

use std::fmt;
use std::str::FromStr;

use dialoguer::Select;

use crate::modules::{allocations, dashboard, hostels, rooms, students};
use crate::state::AppState;
use crate::utils::Console;

pub const APP_TITLE: &str = "Hostel Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Students,
    Hostels,
    Rooms,
    Allocations,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Students,
        Route::Hostels,
        Route::Rooms,
        Route::Allocations,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Students => "/students",
            Route::Hostels => "/hostels",
            Route::Rooms => "/rooms",
            Route::Allocations => "/allocations",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Students => "Students",
            Route::Hostels => "Hostels",
            Route::Rooms => "Rooms",
            Route::Allocations => "Allocations",
        }
    }

    /// Mount the page and run it until the user navigates back.
    pub async fn mount(&self, state: &AppState, console: &Console) -> anyhow::Result<()> {
        match self {
            Route::Dashboard => {
                dashboard::show(&state.client).await;
                Ok(())
            }
            Route::Students => students::controller::manage(state, console).await,
            Route::Hostels => hostels::controller::manage(state, console).await,
            Route::Rooms => rooms::controller::manage(state, console).await,
            Route::Allocations => allocations::controller::manage(state, console).await,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| format!("Unknown route: {}", s))
    }
}

/// Interactive shell: show the dashboard, then a navigation menu until exit.
pub async fn run_shell(state: &AppState, console: &Console) -> anyhow::Result<()> {
    println!("{}", APP_TITLE);
    println!("{}", "=".repeat(APP_TITLE.len()));
    Route::Dashboard.mount(state, console).await?;

    let mut items: Vec<String> = Route::ALL.iter().map(|r| r.title().to_string()).collect();
    items.push("Exit".to_string());
    loop {
        let choice = Select::with_theme(console.theme())
            .with_prompt(APP_TITLE)
            .items(&items)
            .default(0)
            .interact()?;
        match Route::ALL.get(choice) {
            Some(route) => route.mount(state, console).await?,
            None => return Ok(()),
        }
    }
}
