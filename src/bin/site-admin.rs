//! CLI administration tool for consulting-site.
//!
//! Inspects the compiled-in content and previews backdrop presets without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List service categories and their services
//! cargo run --bin site-admin -- catalog
//!
//! # List news posts, optionally filtered
//! cargo run --bin site-admin -- news --category compliance --search audit
//!
//! # Run a backdrop preset headlessly and report leaks
//! cargo run --bin site-admin -- backdrop tprm --frames 120
//!
//! # Validate configuration from the environment
//! cargo run --bin site-admin -- config check
//! ```
//!
//! # Features
//!
//! - **Catalog**: Categories, services and their page links
//! - **News**: Same filter as the news page
//! - **Backdrop**: Preset summary, seeded buffer stats and a leak check
//! - **Interactive Prompts**: Preset picker when no page is given
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use consulting_site::application::services::{BackdropService, CatalogService, NewsService};
use consulting_site::config::Config;
use consulting_site::domain::backdrop::{PagePreset, Viewport};
use consulting_site::domain::entities::NewsFilter;
use consulting_site::infrastructure::content::{StaticCatalogRepository, StaticPostRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Select;
use std::sync::Arc;

/// CLI tool for inspecting consulting-site.
#[derive(Parser)]
#[command(name = "site-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List the service catalog
    Catalog,

    /// List news posts
    News {
        /// Category to filter by (`all` for none)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over title, excerpt and tags
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Preview a backdrop preset on a headless host
    Backdrop {
        /// Page key (e.g. `home`, `tprm`); prompts when omitted
        page: Option<String>,

        /// Seed for reproducible buffers
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Frames to run before teardown
        #[arg(long, default_value_t = 60)]
        frames: u32,

        /// Simulated frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate configuration from the environment
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => list_catalog(),
        Commands::News { category, search } => list_news(category, search),
        Commands::Backdrop {
            page,
            seed,
            frames,
            fps,
        } => preview_backdrop(page, seed, frames, fps)?,
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
    }

    Ok(())
}

/// Prints every category with its services and page links.
fn list_catalog() {
    println!("{}", "Service Catalog".bright_blue().bold());
    println!();

    let catalog = CatalogService::new(Arc::new(StaticCatalogRepository::new()));

    for category in catalog.categories() {
        println!(
            "  {} {}",
            category.title.bright_white().bold(),
            category.href().bright_black()
        );
        for entry in category.entries {
            println!(
                "    {:<40} {}",
                entry.title.cyan(),
                category.entry_href(entry).bright_black()
            );
        }
        println!();
    }
}

/// Lists posts matching the filter, newest first.
fn list_news(category: Option<String>, search: Option<String>) {
    println!("{}", "News".bright_blue().bold());
    println!();

    let news = NewsService::new(Arc::new(StaticPostRepository::new()));
    let filter = NewsFilter::new(category.as_deref(), search.as_deref());
    let posts = news.list(&filter);

    if posts.is_empty() {
        println!("{}", "  No Articles Found".yellow());
        println!();
        println!("  Categories: {}", news.categories().join(", ").bright_cyan());
        return;
    }

    println!(
        "  {:<4} {:<12} {:<22} {}",
        "ID".bright_white().bold(),
        "Date".bright_white().bold(),
        "Category".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "-".repeat(80).bright_black());

    for post in &posts {
        println!(
            "  {:<4} {:<12} {:<22} {}",
            post.id.to_string().bright_black(),
            post.date.bright_black(),
            post.category.cyan(),
            post.title
        );
    }

    println!();
    println!(
        "  Showing: {} of {}",
        posts.len().to_string().bright_white().bold(),
        news.total()
    );
    println!();
}

/// Summarizes a preset, then mounts it headlessly and checks teardown.
fn preview_backdrop(page: Option<String>, seed: u64, frames: u32, fps: f64) -> Result<()> {
    println!("{}", "Backdrop Preview".bright_blue().bold());
    println!();

    let page = match page {
        Some(p) => p,
        None => {
            let keys: Vec<&str> = PagePreset::ALL.iter().map(|p| p.slug()).collect();
            let idx = Select::new()
                .with_prompt("Page")
                .items(&keys)
                .default(0)
                .interact()?;
            keys[idx].to_string()
        }
    };

    let service = BackdropService::new();
    let generated = service
        .generate(&page, Some(seed))
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let config = &generated.config;

    println!("  Page:       {}", generated.page.slug().cyan());
    println!(
        "  Particles:  {} in a {} cube",
        config.particle_count.to_string().bright_white().bold(),
        config.spread
    );
    println!(
        "  Palette:    {}",
        config
            .palette
            .entries()
            .iter()
            .map(|e| format!("{} {:.0}%", e.color.to_hex(), e.weight * 100.0))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Meshes:     {}", config.meshes.len());
    println!(
        "  Buffers:    {} bytes, max |coord| {:.2}",
        generated.buffers.byte_len(),
        generated.buffers.max_abs_coordinate()
    );
    println!();

    let report = service
        .preview(&page, Viewport::new(1920, 1080), frames, fps)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    if !report.activated {
        println!("{}", "  Backdrop did not activate".yellow());
    }
    println!(
        "  Frames rendered: {}",
        report.frames_rendered.to_string().bright_green().bold()
    );

    if report.leaked_resources == 0 {
        println!("{}", "  Teardown released every resource".green().bold());
    } else {
        println!(
            "{}",
            format!("  Teardown leaked {} resources", report.leaked_resources)
                .red()
                .bold()
        );
        anyhow::bail!("backdrop preset {page} leaks resources");
    }
    println!();

    Ok(())
}

/// Loads configuration from the environment and validates it.
fn check_config() -> Result<()> {
    println!("{}", "Checking configuration...".bright_blue());

    let config = Config::from_env();
    config.validate().context("Invalid configuration")?;

    println!("  Listen:      {}", config.listen_addr.bright_white());
    println!("  Static dir:  {}", config.static_dir.bright_white());
    println!("  Theme:       {}", config.default_theme.bright_white());
    println!(
        "  Inquiries:   {}",
        config
            .inquiry_log_path
            .as_deref()
            .unwrap_or("log")
            .bright_white()
    );
    println!("{}", "Configuration OK".green().bold());

    Ok(())
}
