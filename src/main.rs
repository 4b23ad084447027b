use anyhow::Result;
use clap::Parser;
use clearout::{Cleaner, Mode, Wiper};
use colored::Colorize;
use env_logger::Env;
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Remove build artifacts from project trees (Maven, Grails, .clean.yml rules)",
    long_about = None
)]
struct Args {
    /// Directories to clean (defaults to current directory)
    #[arg(default_values_t = vec![String::from(".")])]
    paths: Vec<String>,

    /// Report what would be deleted without touching the filesystem
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Descend into every subdirectory instead of cleaning only the root
    #[arg(long, short)]
    recursive: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mode = Mode {
        readonly: args.dry_run,
        recursive: args.recursive,
    };
    let cleaner = Cleaner::new(mode);

    for path_str in &args.paths {
        let path = PathBuf::from(path_str);
        if !path.is_dir() {
            eprintln!("Warning: {} is not a directory, skipping", path.display());
            continue;
        }

        let mut wiper = Wiper::new(mode);
        cleaner.run(&mut wiper, &path);

        // The same path can be requested more than once in a pass (the Maven
        // entry-point case and the Maven definition overlap); report each
        // path once.
        let count = wiper.requested().iter().collect::<BTreeSet<_>>().len();
        if count == 0 {
            println!("{}: nothing to clean", path.display());
        } else if mode.readonly {
            println!(
                "{}",
                format!("{}: {} path(s) could be deleted", path.display(), count).bold()
            );
        } else {
            println!(
                "{}",
                format!("{}: {} deletion(s) requested", path.display(), count).green()
            );
        }
    }

    Ok(())
}
