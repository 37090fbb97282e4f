//! Portfolio Showcase CLI
//!
//! Checks a site's project manifest and content files with the same
//! repository code the web front end uses, reading from disk instead of
//! over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! # List projects in the manifest
//! portfolio --root ./public list
//!
//! # Show how a project's modal would be populated
//! portfolio --root ./public show alpha
//!
//! # Resolve every project; fails if anything is missing
//! portfolio --root ./public check
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_core::{
    ContentFetcher, ContentRepository, ManifestStatus, PortfolioError, PortfolioResult,
    SiteConfig,
};

/// Portfolio Showcase - manifest checker
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio Showcase - validate project manifests and content files")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site root that locators are resolved against (default: current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Manifest location relative to the site root
    #[arg(short, long, global = true)]
    manifest: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects with their section and screenshot counts
    List,

    /// Show the tabs and screenshots a project's modal would display
    Show {
        /// Project identifier
        project_id: String,
    },

    /// Resolve every project and report missing content
    Check,
}

/// Reads locators relative to a site root
struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ContentFetcher for FsFetcher {
    async fn fetch_text(&self, locator: &str) -> PortfolioResult<String> {
        let path = self.root.join(locator.trim_start_matches("./").trim_start_matches('/'));
        tracing::debug!(path = %path.display(), "Reading");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PortfolioError::Fetch {
                locator: locator.to_string(),
                reason: e.to_string(),
            })
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let mut config = SiteConfig::default();
    if let Some(manifest) = cli.manifest {
        config = config.with_manifest_url(manifest);
    }

    let mut repo = ContentRepository::new(FsFetcher::new(&root), &config);
    repo.load_manifest().await;

    if let ManifestStatus::Failed(reason) = repo.manifest_status() {
        anyhow::bail!("Could not load manifest {}: {}", config.manifest_url, reason);
    }

    match cli.command {
        Commands::List => {
            let manifest = repo.manifest();
            println!("Projects ({}):", manifest.len());
            for (id, project) in manifest.iter() {
                println!(
                    "  {}  {} sections, {} screenshots",
                    id,
                    project.sections.len(),
                    project.screenshots.len()
                );
            }
        }

        Commands::Show { project_id } => {
            if repo.manifest().get(&project_id).is_none() {
                anyhow::bail!(
                    "Project '{}' not found; the site would show the default description",
                    project_id
                );
            }
            let project = repo.resolve_project(&project_id).await;

            println!("Project: {}", project_id);
            println!();
            println!("Tabs:");
            for (i, section) in project.sections().iter().enumerate() {
                match &section.load_error {
                    None => println!(
                        "  {}. {} [{}] {} bytes",
                        i + 1,
                        section.title,
                        section.id,
                        section.content.len()
                    ),
                    Some(reason) => println!(
                        "  {}. {} [{}] FAILED: {}",
                        i + 1,
                        section.title,
                        section.id,
                        reason
                    ),
                }
            }
            println!();
            println!("Screenshots (lightbox index 0 is the card banner):");
            if project.screenshots().is_empty() {
                println!("  (none)");
            }
            for (i, shot) in project.screenshots().iter().enumerate() {
                match shot.caption() {
                    Some(caption) => println!("  {}. {} - {}", i + 1, shot.src(), caption),
                    None => println!("  {}. {}", i + 1, shot.src()),
                }
            }
        }

        Commands::Check => {
            let ids: Vec<String> = repo.manifest().ids().map(String::from).collect();
            let mut sections = 0;
            let mut failures = 0;

            for id in &ids {
                let project = repo.resolve_project(id).await;
                sections += project.sections().len();

                let failed: Vec<_> = project.failed_sections().collect();
                if failed.is_empty() {
                    println!("ok      {}", id);
                } else {
                    println!("FAILED  {}", id);
                    for section in &failed {
                        println!(
                            "        {} ({}): {}",
                            section.title,
                            section.id,
                            section.load_error.as_deref().unwrap_or("unknown error")
                        );
                    }
                    failures += failed.len();
                }
            }

            println!();
            println!(
                "Checked {} projects, {} sections, {} failures",
                ids.len(),
                sections,
                failures
            );
            if failures > 0 {
                anyhow::bail!("{} section(s) failed to load", failures);
            }
        }
    }

    Ok(())
}
