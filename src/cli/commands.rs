//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed
//! arguments and returns an `anyhow::Result<()>`.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tracing::info;

use crate::batch::{self, CancelToken};
use crate::cache::ResolutionCache;
use crate::error::Error;
use crate::export;
use crate::resolver::{GeniusClient, Outcome, Resolver};

/// Artist Scout CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single artist name
    Resolve {
        /// Artist name to search for
        name: String,
        /// Genius API access token (or set GENIUS_ACCESS_TOKEN env var)
        #[arg(short, long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,
    },
    /// Resolve a list of artist names and write a CSV dataset
    Batch {
        /// Text file with one artist name per line (`#` starts a comment)
        #[arg(default_value = "artists.txt")]
        artists: PathBuf,
        /// Genius API access token (or set GENIUS_ACCESS_TOKEN env var)
        #[arg(short, long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,
        /// Parallel workers (1-16)
        #[arg(short, long, default_value_t = batch::DEFAULT_CONCURRENCY)]
        workers: usize,
        /// Output CSV path
        #[arg(short, long, default_value = "data/genius_artists.csv")]
        out: PathBuf,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Resolve { name, access_token } => {
            cmd_resolve(&rt, name, access_token.as_deref())
        }
        Commands::Batch {
            artists,
            access_token,
            workers,
            out,
        } => cmd_batch(&rt, artists, access_token.as_deref(), *workers, out),
    }
}

// ============================================================================
// Individual command implementations
// ============================================================================

fn cmd_resolve(rt: &Runtime, name: &str, access_token: Option<&str>) -> anyhow::Result<()> {
    let token = require_token(access_token)?;

    rt.block_on(async {
        let resolver = Resolver::new(GeniusClient::new(token));
        let cache = ResolutionCache::default();

        match batch::resolve_one(&resolver, &cache, name).await {
            Outcome::Found(artist) => {
                println!("✓ {}", artist.name);
                println!("  ID:        {}", artist.id);
                if let Some(count) = artist.followers_count {
                    println!("  Followers: {count}");
                }
                if let Some(url) = &artist.url {
                    println!("  URL:       {url}");
                }
                if let Some(image) = &artist.image_url {
                    println!("  Image:     {image}");
                }
                Ok(())
            }
            Outcome::NotFound => {
                println!("✗ No results found. Try a different spelling.");
                Ok(())
            }
            Outcome::Error(reason) => anyhow::bail!("resolution failed: {reason}"),
        }
    })
}

fn cmd_batch(
    rt: &Runtime,
    artists_path: &Path,
    access_token: Option<&str>,
    workers: usize,
    out: &Path,
) -> anyhow::Result<()> {
    // The credential and the input are validated before anything touches
    // the network; a bad token fails here, not as N per-item errors.
    let token = require_token(access_token)?;
    let names = read_artists(artists_path)?;
    println!(
        "Found {} usable artist names in {}",
        names.len(),
        artists_path.display()
    );

    rt.block_on(async {
        let resolver = Resolver::new(GeniusClient::new(token));
        let cache = ResolutionCache::default();
        let cancel = CancelToken::new();

        // Ctrl-C lets in-flight lookups finish; the rest of the table is
        // drained as cancelled rows.
        let signal_token = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nCancellation requested; finishing in-flight lookups...");
                signal_token.cancel();
            }
        });

        let rows = batch::run_batch(
            &resolver,
            &cache,
            &names,
            workers,
            &cancel,
            |done, total| {
                print!("\rResolving artists... ({done}/{total})");
                use std::io::Write;
                let _ = std::io::stdout().flush();
            },
        )
        .await;
        println!();

        export::write_csv(out, &rows)?;

        let found = rows.iter().filter(|r| r.outcome.is_found()).count();
        let not_found = rows
            .iter()
            .filter(|r| r.outcome == Outcome::NotFound)
            .count();
        let errors = rows.len() - found - not_found;
        info!(found, not_found, errors, "batch complete");

        println!("Done! {found} resolved, {not_found} no match, {errors} errors");
        println!("Saved {} rows to {}", rows.len(), out.display());
        Ok(())
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Validate the credential before any batch starts.
fn require_token(token: Option<&str>) -> Result<String, Error> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::config(
            "Genius access token required. Pass --access-token or set GENIUS_ACCESS_TOKEN.",
        )),
    }
}

/// Read an artists file: UTF-8 (BOM tolerated), one name per line, blank
/// lines and `#` comments skipped.
fn read_artists(path: &Path) -> Result<Vec<String>, Error> {
    let raw = std::fs::read_to_string(path)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let names = batch::clean_artist_list(raw);
    if names.is_empty() {
        return Err(Error::invalid_input(format!(
            "no artist names parsed from {}",
            path.display()
        )));
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_require_token() {
        assert_eq!(require_token(Some("tok")).unwrap(), "tok");
        assert_eq!(require_token(Some("  tok  ")).unwrap(), "tok");
        assert!(matches!(require_token(None), Err(Error::Config(_))));
        assert!(matches!(require_token(Some("   ")), Err(Error::Config(_))));
    }

    #[test]
    fn test_read_artists_strips_bom_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}Rihanna\n# comment\n\nTycho\n").unwrap();

        let names = read_artists(file.path()).unwrap();
        assert_eq!(names, vec!["Rihanna".to_string(), "Tycho".to_string()]);
    }

    #[test]
    fn test_read_artists_rejects_empty_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\n# only comments here\n\n").unwrap();

        assert!(matches!(
            read_artists(file.path()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_artists_missing_file_is_io_error() {
        assert!(matches!(
            read_artists(Path::new("/definitely/not/here.txt")),
            Err(Error::Io(_))
        ));
    }
}
