//! Command execution handlers

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::checker::{print_pretty, render_json, Checker};
use crate::cloner::{plan, CloneOutcome, Cloner};
use crate::config::Config;
use crate::error::{ReposError, Result};
use crate::git::Git;
use crate::manifest::Manifest;

/// Execute the clone command
pub fn execute_clone(args: &super::CloneArgs, config: &Config, quiet: bool) -> Result<()> {
    let git = Git::new()?;
    let manifest = Manifest::resolve(config)?;
    let specs = manifest.filtered(args.category.as_deref())?;

    if specs.is_empty() {
        println!("No repositories to process.");
        return Ok(());
    }

    let plan = plan(&specs);
    if plan.to_clone.is_empty() {
        if !quiet {
            println!(
                "All {} repositories already present under {}",
                specs.len(),
                manifest.root.display()
            );
        }
        return Ok(());
    }

    if !quiet {
        println!(
            "Cloning {} repositories into {} ({} already present)\n",
            plan.to_clone.len(),
            manifest.root.display(),
            plan.present
        );
        for spec in &plan.to_clone {
            println!(
                "  {}/{}  {}",
                spec.category,
                spec.name,
                style(&spec.url).dim()
            );
        }
        println!();
    }

    let skip_prompt = args.yes || config.general.auto_yes || quiet;
    if plan.to_clone.len() > 1 && !skip_prompt && !confirm("Proceed?")? {
        println!("Aborted.");
        return Ok(());
    }

    let bar_style = ProgressStyle::with_template(
        "{prefix:.bold.dim} [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .unwrap()
    .progress_chars("█▓▒░ ");

    let pb = ProgressBar::new(plan.to_clone.len() as u64);
    pb.set_style(bar_style);
    pb.set_prefix("clone");

    let cloner = Cloner::new(&git);
    let mut cloned = 0usize;
    let mut skipped = plan.present;
    let mut failed = 0usize;

    for spec in &plan.to_clone {
        pb.set_message(format!("{}/{}", spec.category, spec.name));

        match cloner.clone_one(spec) {
            CloneOutcome::Cloned => {
                cloned += 1;
                pb.println(format!(
                    "{} {}/{}",
                    style("cloned").green(),
                    spec.category,
                    spec.name
                ));
            }
            CloneOutcome::Skipped => {
                skipped += 1;
            }
            CloneOutcome::Failed(reason) => {
                failed += 1;
                pb.println(format!(
                    "{} {}/{}: {}",
                    style("failed").red().bold(),
                    spec.category,
                    spec.name,
                    reason
                ));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if !quiet {
        println!(
            "\n{} cloned, {} skipped, {} failed",
            style(cloned).green().bold(),
            skipped,
            style(failed).red().bold()
        );
    }

    if failed > 0 {
        return Err(ReposError::CloneFailed {
            failed,
            total: plan.to_clone.len(),
        });
    }
    Ok(())
}

/// Execute the check command
pub fn execute_check(args: &super::CheckArgs, config: &Config) -> Result<()> {
    let git = Git::new()?;
    let manifest = Manifest::resolve(config)?;
    let specs = manifest.filtered(args.category.as_deref())?;

    if specs.is_empty() {
        println!("No repositories to check.");
        return Ok(());
    }

    // The untracked scan covers the whole root, so it only makes sense
    // when no category filter narrows the spec list
    let checker = Checker::new(&git);
    let report = checker.check(&manifest.root, &specs, args.category.is_none())?;

    match args.format {
        super::ReportFormat::Pretty => print_pretty(&report),
        super::ReportFormat::Json => println!("{}", render_json(&report)?),
    }

    if !report.is_ok() {
        return Err(ReposError::CheckFailed {
            failing: report.failing(),
        });
    }
    Ok(())
}

/// Ask a yes/no question on the terminal
///
/// Non-interactive streams proceed without prompting.
fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    if !console::user_attended() {
        return Ok(true);
    }

    print!("{} [y/N] ", style(prompt).bold());
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
