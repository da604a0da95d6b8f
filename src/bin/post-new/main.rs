/*
[DESCRIPTION]: # (Replace with a one-line description)
[DATE]: # (2024-04-22)
[AUTHOR]: # (Alice)

# Replace with title
 */

use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use clap::Parser;

use islet::text_utils::slugify;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Title of the new post; also the source of the slug
    #[arg(short, long)]
    title: String,

    /// Name of the author. If empty, OS user real name is being used
    #[arg(short, long)]
    author: Option<String>,

    /// Content store directory
    #[arg(short, long, default_value = "posts")]
    posts_dir: PathBuf,
}

fn get_author(args: &Args) -> String {
    if let Some(ref author) = args.author {
        return author.clone();
    }

    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}

fn render_header(author: &str, date: &str, title: &str) -> String {
    let mut buf = String::new();

    // No TAGS line: the header syntax has no empty value and the schema
    // defaults tags to [] anyway
    let _ = writeln!(&mut buf, "[DESCRIPTION]: # (Replace with a one-line description)");
    let _ = writeln!(&mut buf, "[DATE]: # ({})", date);
    let _ = writeln!(&mut buf, "[AUTHOR]: # ({})", author);
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "# {}", title);

    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");

    buf
}

fn main() -> Result<()> {
    let args = Args::parse();

    let slug = slugify(&args.title);
    if slug.is_empty() {
        bail!("Title {:?} does not produce a usable slug", args.title);
    }

    let post_dir = args.posts_dir.join(&slug);
    if post_dir.exists() {
        bail!("Post {} already exists", post_dir.display());
    }

    let author = get_author(&args);
    let date = Utc::now().format("%Y-%m-%d").to_string();

    let mut content = render_header(&author, &date, &args.title);
    content.push_str(&render_body());

    fs::create_dir_all(&post_dir)?;
    let file_path = post_dir.join("index.md");
    fs::write(&file_path, content)?;

    println!("Created {}", file_path.display());

    Ok(())
}
