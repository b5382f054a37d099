use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use mdsite::{Config, copy_dir, generate_pages_recursive};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from Markdown content")]
struct Cli {
    /// Base path the site will be served under (e.g. "/myrepo/")
    base_path: Option<String>,

    /// Site configuration file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Delete an existing output directory without asking
    #[arg(short, long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = Config::load(&cli.config);
    let base_path = cli.base_path.unwrap_or_else(|| config.base_path.clone());

    if config.output.exists() {
        if !cli.force && !confirm_delete(&config.output) {
            eprintln!("Aborted.");
            std::process::exit(1);
        }
        if let Err(e) = fs::remove_dir_all(&config.output) {
            eprintln!("Error removing {}: {}", config.output.display(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = copy_dir(&config.static_dir, &config.output) {
        eprintln!("Error copying static files: {e}");
        std::process::exit(1);
    }

    if let Err(e) =
        generate_pages_recursive(&config.content, &config.template, &config.output, &base_path)
    {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("Generated site in {}", config.output.display());
}

/// Ask before deleting the output directory. Anything but "y" declines.
fn confirm_delete(path: &std::path::Path) -> bool {
    print!("Delete existing output directory {}? [y/N] ", path.display());
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
