//! OpsDesk CLI
//!
//! Command-line interface for OpsDesk operations:
//! - Check bottlenecks and today's insight
//! - Submit orders and list recorded ones
//! - Check status
//! - Generate a config file

use clap::{Parser, Subcommand};
use opsdesk::api::dto::{BottleneckResponse, DailyInsightResponse, DecisionResponse, OrderRequest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opsdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decision-centric operations desk for small businesses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(
        long,
        env = "OPSDESK_API_URL",
        default_value = "http://127.0.0.1:8000",
        global = true
    )]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current operational bottlenecks
    Bottlenecks,

    /// Show today's insight
    Insight,

    /// Submit an order for a decision
    Order {
        /// Item to order
        item: String,
        /// Quantity (at least 1)
        quantity: u32,
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer email
        #[arg(long)]
        email: String,
        /// Customer phone
        #[arg(long)]
        phone: Option<String>,
    },

    /// List recorded orders, most recent first
    Orders {
        /// Maximum number of orders to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show system status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api_url = cli.api_url.trim_end_matches('/').to_string();
    let json_output = cli.format == "json";

    match cli.command {
        Commands::Bottlenecks => {
            let response = client.get(format!("{}/bottleneck", api_url)).send().await?;
            let response = ensure_success(response, "Bottleneck check failed").await;
            let data: BottleneckResponse = response.json().await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else if data.bottlenecks.is_empty() {
                println!("No bottlenecks. Stock and staffing look fine.");
            } else {
                println!("System Bottlenecks");
                println!("{}", "-".repeat(40));
                for issue in &data.bottlenecks {
                    println!("⚠️  {}", issue);
                }
            }
        }

        Commands::Insight => {
            let response = client
                .get(format!("{}/daily-insight", api_url))
                .send()
                .await?;
            let response = ensure_success(response, "Daily insight failed").await;
            let data: DailyInsightResponse = response.json().await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("📊 {}", data.text);
            }
        }

        Commands::Order {
            item,
            quantity,
            name,
            email,
            phone,
        } => {
            let body = OrderRequest {
                customer_name: name,
                customer_email: email,
                customer_phone: phone,
                item_name: item,
                quantity,
            };

            let response = client
                .post(format!("{}/order", api_url))
                .json(&body)
                .send()
                .await?;
            let response = ensure_success(response, "Order failed").await;
            let decision: DecisionResponse = response.json().await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                println!("Decision: {}", decision.decision);
                println!("Reason:   {}", decision.reason);
                if let Some(staff) = &decision.assigned_staff {
                    println!("Staff:    {}", staff);
                }
                if let Some(explanation) = &decision.explanation {
                    println!();
                    println!("{}", explanation);
                }
            }
        }

        Commands::Orders { limit } => {
            let response = client
                .get(format!("{}/orders?limit={}", api_url, limit))
                .send()
                .await?;
            let response = ensure_success(response, "Failed to fetch orders").await;
            let data: serde_json::Value = response.json().await?;

            if json_output {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_orders(&data);
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    if json_output {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!("OpsDesk v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!("Ledger:     {}", health["ledger"].as_str().unwrap_or("unknown"));
                    println!(
                        "LLM:        {}",
                        if health["llm_enabled"].as_bool().unwrap_or(false) {
                            "enabled"
                        } else {
                            "templates only"
                        }
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to OpsDesk API at {}", api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the OpsDesk API server is running:");
                    eprintln!("  cargo run --bin opsdesk-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = opsdesk::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Exit with the server's error message on a non-success status
async fn ensure_success(response: reqwest::Response, context: &str) -> reqwest::Response {
    if response.status().is_success() {
        return response;
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    eprintln!("{} ({}): {}", context, status, message);
    std::process::exit(1);
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_orders(data: &serde_json::Value) {
    let orders = match data["orders"].as_array() {
        Some(o) if !o.is_empty() => o,
        _ => {
            println!("No orders recorded yet.");
            return;
        }
    };

    println!(
        "{:<20} {:<18} {:<16} {:>5} {:<8} {}",
        "Time", "Customer", "Item", "Qty", "Decision", "Staff"
    );
    println!("{}", "-".repeat(80));

    for order in orders {
        println!(
            "{:<20} {:<18} {:<16} {:>5} {:<8} {}",
            order["timestamp"].as_str().unwrap_or("-"),
            order["customer_name"].as_str().unwrap_or("-"),
            order["item_name"].as_str().unwrap_or("-"),
            order["quantity"].as_u64().unwrap_or(0),
            order["decision"].as_str().unwrap_or("-"),
            order["assigned_staff"].as_str().unwrap_or("-"),
        );
    }

    if let Some(total) = data["total"].as_u64() {
        println!();
        println!("Showing {} of {} orders", orders.len(), total);
    }
}
