//! CLI command implementations

use anyhow::{Context, bail};
use clap::Subcommand;
use reelscout_core::{ReelscoutConfig, RuntimeMode};
use reelscout_search::service::{detail_error_message, search_error_message};
use reelscout_search::{MovieDetail, MovieSearchService, SearchItem, SortOrder};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (default 127.0.0.1, or REELSCOUT_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (default 3000, or REELSCOUT_PORT)
        #[arg(short, long)]
        port: Option<u16>,
        /// production talks to OMDb, development serves the demo catalogue
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Search titles and print one line per result
    Search {
        /// Title to search for
        term: String,
        /// Result order
        #[arg(long, value_parser = ["A_Z", "Z_A", "ASC", "DESC"])]
        sort: Option<String>,
        /// Data source, as for `server`
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
    /// Print the full record for one title
    Show {
        /// IMDb identifier, e.g. tt0133093
        imdb_id: String,
        /// Data source, as for `server`
        #[arg(long)]
        mode: Option<RuntimeMode>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns the configuration, server or search failure of the command
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = ReelscoutConfig::from_env().context("Failed to load configuration")?;

    match command {
        Commands::Server { host, port, mode } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            apply_mode(&mut config, mode);
            start_server(config).await
        }
        Commands::Search { term, sort, mode } => {
            apply_mode(&mut config, mode);
            let sort = SortOrder::from_param(sort.as_deref().unwrap_or_default());
            search_titles(&config, &term, sort).await
        }
        Commands::Show { imdb_id, mode } => {
            apply_mode(&mut config, mode);
            show_title(&config, &imdb_id).await
        }
    }
}

fn apply_mode(config: &mut ReelscoutConfig, mode: Option<RuntimeMode>) {
    if let Some(mode) = mode {
        config.mode = mode;
    }
}

/// Start the web server
async fn start_server(config: ReelscoutConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Reelscout in {} mode", config.mode);
    if config.mode.is_development() {
        tracing::info!("Serving the offline demo catalogue; OMDb is not contacted");
    }
    let service = MovieSearchService::from_config(&config)?;
    reelscout_web::run_server(&config.server, service).await?;
    Ok(())
}

/// Search titles and print the results
async fn search_titles(config: &ReelscoutConfig, term: &str, sort: SortOrder) -> anyhow::Result<()> {
    let service = MovieSearchService::from_config(config)?;

    let mut items = match service.search_titles(term).await {
        Ok(items) => items,
        Err(err) => bail!(search_error_message(&err, term.trim())),
    };

    if items.is_empty() {
        println!("No results found for {}. Try a different title!", term.trim());
        return Ok(());
    }

    sort.apply(&mut items);
    println!("{} results", items.len());
    for item in &items {
        println!("{}", result_line(item));
    }
    Ok(())
}

/// Look up one title and print its record
async fn show_title(config: &ReelscoutConfig, imdb_id: &str) -> anyhow::Result<()> {
    let service = MovieSearchService::from_config(config)?;

    match service.lookup_title(imdb_id).await {
        Ok(detail) => {
            print!("{}", detail_text(&detail));
            Ok(())
        }
        Err(err) => bail!(detail_error_message(&err)),
    }
}

fn result_line(item: &SearchItem) -> String {
    format!(
        "{:<10}  {:<9}  {:<7}  {}",
        item.imdb_id,
        item.year,
        item.media_type.as_str(),
        item.title
    )
}

fn detail_text(detail: &MovieDetail) -> String {
    let mut text = format!("{}\n", detail.heading());

    if let Some(plot) = detail.plot() {
        text.push_str(&format!("\n{plot}\n\n"));
    }

    for (label, value) in [
        ("Rated", &detail.rated),
        ("Released", &detail.released),
        ("Runtime", &detail.runtime),
        ("Genre", &detail.genre),
        ("Director", &detail.director),
        ("Actors", &detail.actors),
    ] {
        text.push_str(&format!("{label:<9} {value}\n"));
    }

    text.push_str("Ratings:\n");
    for rating in &detail.ratings {
        text.push_str(&format!("  {}: {}\n", rating.source, rating.value));
    }
    if let Some(metascore) = detail.metascore() {
        text.push_str(&format!("  Metascore: {metascore}\n"));
    }
    text.push_str(&format!(
        "IMDb Rating: {} ({} votes)\n",
        detail.imdb_rating, detail.imdb_votes
    ));

    text
}

#[cfg(test)]
mod tests {
    use reelscout_search::{DemoProvider, MovieDatabase};

    use super::*;

    #[tokio::test]
    async fn test_detail_text_lists_ratings() {
        let detail = DemoProvider::new().lookup_title("tt0133093").await.unwrap();
        let text = detail_text(&detail);

        assert!(text.starts_with("The Matrix (1999)\n"));
        assert!(text.contains("  Internet Movie Database: 8.7/10\n"));
        assert!(!text.contains("Metascore"));
        assert!(text.ends_with("IMDb Rating: 8.7 (N/A votes)\n"));
    }

    #[tokio::test]
    async fn test_result_line_columns() {
        let items = DemoProvider::new().search_titles("dark").await.unwrap();
        let line = result_line(&items[0]);

        assert!(line.starts_with("tt5753856"));
        assert!(line.contains("series"));
        assert!(line.ends_with("Dark"));
    }

    #[tokio::test]
    async fn test_development_search_runs_offline() {
        let config = ReelscoutConfig {
            mode: RuntimeMode::Development,
            ..Default::default()
        };
        assert!(search_titles(&config, "matrix", SortOrder::YearDesc).await.is_ok());
        assert!(show_title(&config, "tt0000000").await.is_err());
    }
}
