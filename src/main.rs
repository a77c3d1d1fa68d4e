use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use track_bump::bump::{bump_project, latest_tag_for_branch, BumpOptions};
use track_bump::config::{self, CiIdentity};
use track_bump::git::{Git2Repository, Repository};
use track_bump::ui;

#[derive(Parser)]
#[command(
    name = "track-bump",
    version,
    about = "Bump project versions based on branch release channels"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bump the project version: resolve the next tag for the current
    /// branch's channel, patch version files, commit and tag
    Bump {
        #[arg(short, long, default_value = ".", help = "Project path")]
        project: PathBuf,

        #[arg(long, help = "Sign commits")]
        sign: bool,

        #[arg(long, help = "Branch to bump (defaults to the current branch)")]
        branch: Option<String>,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,

        #[arg(long, help = "Force fetch tags")]
        force: bool,
    },

    /// Print the latest tag for a branch's release channel
    LatestTag {
        #[arg(short, long, default_value = ".", help = "Project path")]
        project: PathBuf,

        #[arg(long, help = "Branch to query (defaults to the current branch)")]
        branch: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bump {
            project,
            sign,
            branch,
            dry_run,
            force,
        } => run_bump(project, sign, branch, dry_run, force),
        Commands::LatestTag { project, branch } => run_latest_tag(project, branch),
    };

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run_bump(
    project: PathBuf,
    sign: bool,
    branch: Option<String>,
    dry_run: bool,
    force: bool,
) -> track_bump::Result<()> {
    // Identity is read at the edge and only required for mutating runs
    let identity = if dry_run {
        CiIdentity::from_env().ok()
    } else {
        Some(CiIdentity::from_env()?)
    };

    let repo = Git2Repository::open(&project)?;
    let options = BumpOptions {
        branch,
        sign_commits: sign,
        dry_run,
        force_fetch: force,
    };

    ui::display_status(&format!(
        "Bumping project in {} (dry-run: {})",
        project.display(),
        dry_run
    ));
    let outcome = bump_project(&repo, &project, identity.as_ref(), &options)?;
    ui::display_outcome(&outcome);
    Ok(())
}

fn run_latest_tag(project: PathBuf, branch: Option<String>) -> track_bump::Result<()> {
    let main_branch = match config::find_config_file(&project) {
        Ok(path) => config::load_config(&path)?.main_branch,
        Err(_) => "main".to_string(),
    };

    let repo = Git2Repository::open(&project)?;
    let branch = match branch {
        Some(branch) => branch,
        None => repo.current_branch()?,
    };

    if let Some(tag) = latest_tag_for_branch(&repo, &branch, &main_branch)? {
        println!("{}", tag);
    }
    Ok(())
}
