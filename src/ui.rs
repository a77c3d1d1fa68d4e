//! Terminal output helpers

use crate::bump::BumpOutcome;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("\u{2713}").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("\u{2192}").yellow(), message);
}

/// Report what a bump run resolved and, for dry runs, what it would change
pub fn display_outcome(outcome: &BumpOutcome) {
    println!(
        "Stable tag: {} | Latest {} tag: {} | New version: {} (branch: {})",
        style(&outcome.stable_tag.name).cyan(),
        outcome.channel,
        match &outcome.latest_channel_tag {
            Some(tag) => style(tag.name.as_str()).cyan().to_string(),
            None => "none".to_string(),
        },
        style(&outcome.new_version).green(),
        outcome.branch,
    );

    if outcome.dry_run {
        println!(
            "{} Would replace version {} with {} in files:",
            style("[dry-run]").magenta(),
            outcome.current_version,
            outcome.new_version
        );
        for file in &outcome.files {
            println!("  - {}", file);
        }
        println!(
            "{} Would commit with message: {} and tag: {}",
            style("[dry-run]").magenta(),
            style(&outcome.commit_message).cyan(),
            style(&outcome.tag.name).cyan()
        );
    } else {
        display_success(&format!(
            "Committed '{}' and created tag {}",
            outcome.commit_message, outcome.tag.name
        ));
    }
}
