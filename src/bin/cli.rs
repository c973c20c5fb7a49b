//! Userboard CLI
//!
//! Command-line view of a running Userboard server:
//! - Print the metric tiles
//! - Print the raw user grid and the location grid
//! - Check status
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use userboard::api::dto::HealthResponse;
use userboard::config::generate_default_config;
use userboard::dashboard::{location_grid, Dashboard, DataGrid};
use userboard::store::LoadPhase;

#[derive(Parser)]
#[command(name = "userboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal view of the user dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show average age, height and weight
    Summary,

    /// Show the raw user grid
    Users {
        /// Only print the first N rows
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only print these columns (default: all inferred columns)
        #[arg(short, long)]
        columns: Vec<String>,
    },

    /// Show the location grid
    Locations,

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let json = cli.format == "json";

    match cli.command {
        Commands::Summary => {
            let view = fetch_dashboard(&client, &cli.api_url).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&view.tiles)?);
            } else {
                println!("{}", view.title);
                println!();
                for tile in &view.tiles {
                    println!("{:<12} {}", tile.title, tile.display());
                }
                print_phase_note(view.phase);
            }
        }

        Commands::Users { limit, columns } => {
            let view = fetch_dashboard(&client, &cli.api_url).await?;
            let mut grid = view.user_grid;

            if !columns.is_empty() {
                grid.select_columns(&columns);
            }
            if let Some(n) = limit {
                grid.row_data.truncate(n);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&grid.row_data)?);
            } else {
                println!("{}", grid.title);
                println!();
                if grid.row_count() == 0 {
                    println!("No users loaded.");
                    print_phase_note(view.phase);
                } else {
                    print_grid(&grid);
                }
            }
        }

        Commands::Locations => {
            let grid = location_grid();
            if json {
                println!("{}", serde_json::to_string_pretty(&grid.row_data)?);
            } else {
                println!("{}", grid.title);
                println!();
                print_grid(&grid);
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                    } else {
                        println!("Userboard v{}", health.version);
                        println!();
                        println!("Status:  {}", health.status);
                        println!("Load:    {}", health.phase.as_str());
                        println!("Users:   {}", health.records);
                        println!("Uptime:  {}s", health.uptime_seconds);
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    print_connect_help(&cli.api_url, &e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn fetch_dashboard(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let response = match client.get(format!("{}/api/v1/dashboard", api_url)).send().await {
        Ok(r) => r,
        Err(e) => {
            print_connect_help(api_url, &e);
            std::process::exit(1);
        }
    };

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        eprintln!("Dashboard request failed ({}): {}", status, text);
        std::process::exit(1);
    }

    Ok(response.json().await?)
}

fn print_connect_help(api_url: &str, e: &reqwest::Error) {
    eprintln!("Cannot connect to Userboard API at {}", api_url);
    eprintln!("Error: {}", e);
    eprintln!();
    eprintln!("Make sure the Userboard server is running:");
    eprintln!("  cargo run --bin userboard");
}

fn print_phase_note(phase: LoadPhase) {
    match phase {
        LoadPhase::Pending => {
            println!();
            println!("(Users are still loading)");
        }
        LoadPhase::Failed => {
            println!();
            println!("(User fetch failed, see server log)");
        }
        LoadPhase::Loaded => {}
    }
}

/// Widest cell we print before truncating
const MAX_CELL_WIDTH: usize = 24;

fn print_grid(grid: &DataGrid) {
    let rows = grid.text_rows();
    let headers: Vec<&str> = grid.column_defs.iter().map(|c| c.header_name.as_str()).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", truncate(c, *w), w = *w))
            .collect::<Vec<_>>()
            .join(" ")
    };

    println!("{}", line(headers.iter().map(|h| h.to_string()).collect()));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1)));
    for row in rows {
        println!("{}", line(row));
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
