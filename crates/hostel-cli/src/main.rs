use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use hostel_cli::seeder::{self, SeedConfig};
use hostel_client::HostelClient;
use hostel_config::ApiConfig;

#[derive(Parser)]
#[command(name = "hostel-cli")]
#[command(about = "Hostel CLI - Demo data tools for the hostel management backend", long_about = None)]
struct Cli {
    /// Backend base URL (overrides HOSTEL_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the backend with fake hostels, rooms, and students
    Seed {
        /// Number of hostels to create
        #[arg(long, default_value = "2")]
        hostels: usize,

        /// Number of rooms per hostel
        #[arg(long, default_value = "10")]
        rooms_per_hostel: usize,

        /// Number of students to create
        #[arg(short = 's', long, default_value = "30")]
        students: usize,
    },
    /// Delete every allocation, room, student, and hostel
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => ApiConfig::from_env().with_base_url(url),
        None => ApiConfig::from_env(),
    };
    let client = match HostelClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Error creating API client: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Seed {
            hostels,
            rooms_per_hostel,
            students,
        } => {
            handle_seed(
                &client,
                SeedConfig {
                    hostels,
                    rooms_per_hostel,
                    students,
                },
            )
            .await
        }
        Commands::Clear { yes } => handle_clear(&client, yes).await,
    }
}

async fn handle_seed(client: &HostelClient, config: SeedConfig) {
    println!("Backend: {}\n", client.base_url());
    if let Err(e) = seeder::seed_all(client, config).await {
        eprintln!("\n❌ Error seeding data: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear(client: &HostelClient, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete ALL allocations, rooms, students, and hostels at {}?",
                client.base_url()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = seeder::clear_all(client).await {
        eprintln!("\n❌ Error clearing data: {}", e);
        std::process::exit(1);
    }
}
