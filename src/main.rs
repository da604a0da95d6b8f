use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use islet::config::read_config;
use islet::logger::configure_logger;
use islet::post_list::load_posts;
use islet::site_builder::build_site;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file location
    #[arg(short, long, default_value = "islet.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Loads and validates every post in the content store
    Check,
    /// Renders the whole site into the output directory
    Build,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = read_config(&args.config)?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    match args.command {
        Command::Check => {
            let posts = load_posts(&config.paths.posts_dir)?;
            info!("Content store is valid: {} posts", posts.len());
            for post in posts.iter() {
                println!("{}  {}  {}", post.publish_date, post.slug, post.title);
            }
        }
        Command::Build => {
            let report = build_site(&config)?;
            println!("Rendered {} posts into {} pages", report.post_count, report.page_count);
        }
    }

    Ok(())
}
