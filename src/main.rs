use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use bhutantour::api::AppState;
use bhutantour::hotspots::{Catalog, Destination, Difficulty, NearbyAttraction, ScoredDestination};
use bhutantour::{ChatService, TourConfig, TourError, logging, web};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "bhutantour",
    version,
    about = "Bhutan travel assistant with hotspot suggestions for the Last Shangri-La"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "BHUTANTOUR_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest destinations for a chat message
    Suggest {
        #[arg(default_value = "")]
        query: String,
        /// Comma separated interests, e.g. "hiking,temple"
        #[arg(short, long, value_delimiter = ',')]
        interests: Vec<String>,
        /// Where the traveller currently is
        #[arg(short, long)]
        location: Option<String>,
    },
    /// List attractions near a destination
    Nearby { name: String },
    /// Destinations worth visiting in a month (defaults to the current month)
    Seasonal {
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Destinations of one category
    Category { category: String },
    /// Destinations of one difficulty level
    Difficulty {
        #[arg(default_value = "easy")]
        difficulty: Difficulty,
    },
    /// Ask the travel assistant a question
    Chat { message: String },
    /// Run the web API
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TourError>() {
                Some(tour_error) => eprintln!("Error: {}", tour_error.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = TourConfig::load_from_path(cli.config)?;
    logging::init(&config.logging, cli.verbose);

    let catalog = Arc::new(match &config.catalog.path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin().clone(),
    });
    let engine = bhutantour::SuggestionEngine::new(&catalog);

    match cli.command {
        Commands::Suggest {
            query,
            interests,
            location,
        } => {
            let suggestions =
                engine.generate_smart_suggestions(&query, location.as_deref(), &interests);
            print_output(cli.json, &suggestions, print_scored)?;
        }
        Commands::Nearby { name } => {
            let nearby = engine.get_nearby_attractions(&name);
            if nearby.is_empty() && !cli.json {
                println!("No destination matches '{name}'");
            }
            print_output(cli.json, &nearby, print_nearby)?;
        }
        Commands::Seasonal { month } => {
            let month = month.unwrap_or_else(|| chrono::Local::now().month());
            print_output(
                cli.json,
                &engine.get_seasonal_recommendations(month),
                print_destinations,
            )?;
        }
        Commands::Category { category } => {
            print_output(
                cli.json,
                &engine.get_recommendations_by_category(&category),
                print_destinations,
            )?;
        }
        Commands::Difficulty { difficulty } => {
            print_output(
                cli.json,
                &engine.get_recommendations_by_difficulty(difficulty),
                print_destinations,
            )?;
        }
        Commands::Chat { message } => {
            let chat = ChatService::from_config(catalog.clone(), &config.assistant)?;
            let reply = chat.respond(&message).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}\n", reply.reply);
                println!("You might also like:");
                for destination in &reply.suggestions {
                    println!("  - {} ({})", destination.name, destination.follow_up_query());
                }
            }
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let chat = ChatService::from_config(catalog.clone(), &config.assistant)?;
            web::run(Arc::new(AppState::new(chat)), &config.server).await?;
        }
    }

    Ok(())
}

fn print_output<T: Serialize>(json: bool, items: &[T], pretty: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        items.iter().for_each(pretty);
    }
    Ok(())
}

fn print_scored(suggestion: &ScoredDestination<'_>) {
    println!(
        "{} [score {}]",
        suggestion.destination.name, suggestion.relevance_score
    );
    print_details(suggestion.destination);
}

fn print_destinations(destination: &&Destination) {
    println!("{}", destination.name);
    print_details(destination);
}

fn print_nearby(attraction: &NearbyAttraction<'_>) {
    match attraction {
        NearbyAttraction::Known(destination) => {
            println!("{}", destination.name);
            print_details(destination);
        }
        NearbyAttraction::Placeholder(placeholder) => {
            println!("{}\n    {}", placeholder.name, placeholder.description);
        }
    }
}

fn print_details(destination: &Destination) {
    println!("    {}", destination.description);
    println!(
        "    {} | {} | {} | {}",
        destination.location, destination.category, destination.difficulty, destination.season
    );
    println!("    Tip: {}", destination.tips);
}
