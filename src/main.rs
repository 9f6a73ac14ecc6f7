//! Kay Jay site services (Rust)
//!
//! Dual-mode application:
//! - Server mode (default): JSON HTTP API for the website frontend
//! - CLI mode: direct execution of the site operations
//!
//! Operations: property search, availability filtering, price quotes,
//! booking inquiries, contact/career submissions, blog reads and the
//! currency-rate diagnostic.

mod catalog;
mod cli;
mod clients;
mod config;
mod error;
mod http;
mod inquiry;
mod pricing;
mod search;
mod server;
mod state;
mod tools;

use anyhow::Result;
use clap::Parser;
use cli::{BlogCommands, Cli, Commands};
use config::Config;
use error::AppError;
use pricing::load_rates;
use state::SiteState;
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// Backstop guard around network-bound CLI commands
const CLI_TIMEOUT: Duration = Duration::from_secs(120);

#[tokio::main]
async fn main() -> Result<()> {
    // Detect mode: CLI if args present, API server otherwise
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        run_cli_mode().await
    } else {
        tracing_subscriber::fmt::init();
        let config = Config::from_env()?;
        server::serve(Arc::new(SiteState::new(config)), None).await
    }
}

/// Run in CLI mode
async fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let command = match cli.command {
        Some(command) => command,
        None => {
            eprintln!("Error: No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match command {
        Commands::Serve(args) => server::serve(Arc::new(SiteState::new(config)), args.addr).await,
        command => {
            let state = SiteState::new(config);
            match dispatch(command, &state).await {
                Ok(output) => {
                    println!("{}", output);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(get_exit_code(&e));
                }
            }
        }
    }
}

/// Execute one CLI command and render its markdown output
async fn dispatch(command: Commands, state: &SiteState) -> Result<String, AppError> {
    match command {
        Commands::Serve(_) => unreachable!("serve is handled before dispatch"),

        Commands::Search(args) => {
            let response = tools::search::execute_search(&args)?;
            Ok(tools::search::format_search_results(&response))
        }

        Commands::Properties(args) => tools::properties::execute_properties(&args),

        Commands::Availability(args) => {
            let response = tools::availability::execute_availability(&args)?;
            Ok(tools::availability::format_availability(&response))
        }

        Commands::Quote(args) => {
            // One-shot startup rate acquisition; falls back on failure
            load_rates(&state.currency, &state.rate_provider()).await;
            let response = tools::quote::execute_quote(&args, state)?;
            Ok(tools::quote::format_quote(&response))
        }

        Commands::Inquire(args) => {
            load_rates(&state.currency, &state.rate_provider()).await;
            let response = guarded(tools::inquire::execute_inquire(&args, state)).await?;
            Ok(tools::inquire::format_inquiry_outcome(&response))
        }

        Commands::Contact(args) => {
            let response = guarded(tools::contact::execute_contact(&args, state)).await?;
            Ok(tools::contact::format_contact_outcome(&response))
        }

        Commands::Careers(args) => {
            let response = guarded(tools::careers::execute_careers(&args, state)).await?;
            Ok(tools::careers::format_careers_outcome(&response))
        }

        Commands::Blog(args) => match args.command {
            BlogCommands::List { limit } => {
                let posts =
                    guarded(async { Ok(tools::blog::execute_blog_list(limit, state).await) })
                        .await?;
                Ok(tools::blog::format_post_list("Kay Jay Blog", &posts))
            }
            BlogCommands::Read { slug } => {
                let post = guarded(tools::blog::execute_blog_read(&slug, state)).await?;
                Ok(tools::blog::format_post(&post))
            }
            BlogCommands::Categories => {
                let categories =
                    guarded(async { Ok(tools::blog::execute_blog_categories(state).await) })
                        .await?;
                Ok(tools::blog::format_categories(&categories))
            }
            BlogCommands::Category { slug } => {
                let (category, posts) =
                    guarded(tools::blog::execute_blog_category(&slug, state)).await?;
                Ok(tools::blog::format_post_list(
                    &format!("Category: {}", category.name),
                    &posts,
                ))
            }
        },

        Commands::Rates(args) => {
            let response = tools::rates::execute_rates(&args, state).await;
            Ok(tools::rates::format_rates(&response))
        }
    }
}

async fn guarded<T, F>(operation: F) -> Result<T, AppError>
where
    F: std::future::Future<Output = Result<T, AppError>>,
{
    match timeout(CLI_TIMEOUT, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::Timeout(
            "Request exceeded 120 second timeout".to_string(),
        )),
    }
}

/// Map AppError to exit code
fn get_exit_code(err: &AppError) -> i32 {
    match err.error_code() {
        "invalid_input" => 1,
        "upstream_failed" | "parse_failed" | "storage_failed" | "mail_relay_failed" => 2,
        "not_found" => 3,
        "timeout" => 4,
        _ => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(get_exit_code(&AppError::InvalidInput("x".into())), 1);
        assert_eq!(get_exit_code(&AppError::StorageFailed("x".into())), 2);
        assert_eq!(get_exit_code(&AppError::NotFound("x".into())), 3);
        assert_eq!(get_exit_code(&AppError::Timeout("x".into())), 4);
        assert_eq!(get_exit_code(&AppError::Internal("x".into())), 5);
    }
}
