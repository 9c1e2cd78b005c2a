use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use hostel_admin::logging::init_logging;
use hostel_admin::modules::{allocations, dashboard, hostels, rooms, students};
use hostel_admin::router::run_shell;
use hostel_admin::state::AppState;
use hostel_admin::utils::Console;
use hostel_config::{ApiConfig, LoggingConfig};
use hostel_models::{AllocationId, HostelId, HostelType, RoomId, StudentId};

#[derive(Parser)]
#[command(name = "hostel-admin")]
#[command(about = "Hostel Management System - administration console", long_about = None)]
struct Cli {
    /// Backend base URL (overrides HOSTEL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console (default)
    Shell,
    /// Show the headline counts
    Dashboard,
    /// Manage students
    Students {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Manage hostels
    Hostels {
        #[command(subcommand)]
        command: HostelCommands,
    },
    /// Manage rooms
    Rooms {
        #[command(subcommand)]
        command: RoomCommands,
    },
    /// Allocate rooms and record check-in/check-out
    Allocations {
        #[command(subcommand)]
        command: AllocationCommands,
    },
}

#[derive(Subcommand)]
enum StudentCommands {
    /// List all students
    List,
    /// Show one student
    Show { id: StudentId },
    /// Look up a student by roll number
    Roll { roll_number: String },
    /// Create a student
    Add,
    /// Edit a student
    Edit { id: StudentId },
    /// Delete a student
    Delete { id: StudentId },
}

#[derive(Subcommand)]
enum HostelCommands {
    /// List all hostels
    List,
    /// Show one hostel
    Show { id: HostelId },
    /// List hostels of one type (Boys or Girls)
    Type { hostel_type: HostelType },
    /// Create a hostel
    Add,
    /// Edit a hostel
    Edit { id: HostelId },
    /// Delete a hostel
    Delete { id: HostelId },
}

#[derive(Subcommand)]
enum RoomCommands {
    /// List all rooms
    List,
    /// Show one room
    Show { id: RoomId },
    /// List the rooms of one hostel
    Hostel {
        hostel_id: HostelId,

        /// Only rooms with a free bed
        #[arg(long)]
        available: bool,
    },
    /// Create a room
    Add,
    /// Edit a room
    Edit { id: RoomId },
    /// Delete a room
    Delete { id: RoomId },
}

#[derive(Subcommand)]
enum AllocationCommands {
    /// List all allocations
    List,
    /// Show one allocation
    Show { id: AllocationId },
    /// List active allocations
    Active,
    /// List the allocations of one student
    Student { student_id: StudentId },
    /// List the allocations of one room
    Room { room_id: RoomId },
    /// Allocate a room to a student (prompts for anything not given)
    Allocate {
        #[arg(short = 's', long)]
        student: Option<StudentId>,

        #[arg(short = 'r', long)]
        room: Option<RoomId>,
    },
    /// Record today's check-in
    CheckIn { id: AllocationId },
    /// Record today's check-out
    CheckOut { id: AllocationId },
    /// Delete an allocation
    Delete { id: AllocationId },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    init_logging(&LoggingConfig::from_env())?;

    let api_config = match cli.api_url {
        Some(url) => ApiConfig::from_env().with_base_url(url),
        None => ApiConfig::from_env(),
    };
    let state = AppState::new(api_config).context("Failed to create API client")?;
    let console = Console::new();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&state, &console).await,
        Commands::Dashboard => {
            dashboard::show(&state.client).await;
            Ok(())
        }
        Commands::Students { command } => handle_students(&state, &console, command).await,
        Commands::Hostels { command } => handle_hostels(&state, &console, command).await,
        Commands::Rooms { command } => handle_rooms(&state, &console, command).await,
        Commands::Allocations { command } => {
            handle_allocations(&state, &console, command).await
        }
    }
}

async fn handle_students(
    state: &AppState,
    console: &Console,
    command: StudentCommands,
) -> anyhow::Result<()> {
    use students::controller;

    match command {
        StudentCommands::List => controller::list(state).await,
        StudentCommands::Show { id } => controller::show(state, id).await,
        StudentCommands::Roll { roll_number } => {
            controller::find_by_roll_number(state, &roll_number).await
        }
        StudentCommands::Add => controller::add(state, console).await,
        StudentCommands::Edit { id } => controller::edit(state, console, id).await,
        StudentCommands::Delete { id } => controller::delete(state, console, id).await,
    }
}

async fn handle_hostels(
    state: &AppState,
    console: &Console,
    command: HostelCommands,
) -> anyhow::Result<()> {
    use hostels::controller;

    match command {
        HostelCommands::List => controller::list(state).await,
        HostelCommands::Show { id } => controller::show(state, id).await,
        HostelCommands::Type { hostel_type } => controller::list_by_type(state, hostel_type).await,
        HostelCommands::Add => controller::add(state, console).await,
        HostelCommands::Edit { id } => controller::edit(state, console, id).await,
        HostelCommands::Delete { id } => controller::delete(state, console, id).await,
    }
}

async fn handle_rooms(
    state: &AppState,
    console: &Console,
    command: RoomCommands,
) -> anyhow::Result<()> {
    use rooms::controller;

    match command {
        RoomCommands::List => controller::list(state).await,
        RoomCommands::Show { id } => controller::show(state, id).await,
        RoomCommands::Hostel {
            hostel_id,
            available,
        } => controller::list_by_hostel(state, hostel_id, available).await,
        RoomCommands::Add => controller::add(state, console).await,
        RoomCommands::Edit { id } => controller::edit(state, console, id).await,
        RoomCommands::Delete { id } => controller::delete(state, console, id).await,
    }
}

async fn handle_allocations(
    state: &AppState,
    console: &Console,
    command: AllocationCommands,
) -> anyhow::Result<()> {
    use allocations::controller;

    match command {
        AllocationCommands::List => controller::list(state).await,
        AllocationCommands::Show { id } => controller::show(state, id).await,
        AllocationCommands::Active => controller::list_active(state).await,
        AllocationCommands::Student { student_id } => {
            controller::list_by_student(state, student_id).await
        }
        AllocationCommands::Room { room_id } => controller::list_by_room(state, room_id).await,
        AllocationCommands::Allocate { student, room } => {
            controller::allocate(state, console, student, room).await
        }
        AllocationCommands::CheckIn { id } => controller::check_in(state, console, id).await,
        AllocationCommands::CheckOut { id } => controller::check_out(state, console, id).await,
        AllocationCommands::Delete { id } => controller::delete(state, console, id).await,
    }
}
