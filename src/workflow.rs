use crate::agents::{CandidateLoader, CatalogFile, ProjectScannerAgent};
use crate::catalog::{AnnotationReport, CatalogOutcome, CatalogUpdater, UpdateCandidates};
use crate::error::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the update workflow: annotate declarations with available versions
pub fn execute_update<P: AsRef<Path>>(
    project_path: P,
    catalog: Option<PathBuf>,
    candidates_path: &Path,
    stable_only: bool,
    dry_run: bool,
) -> Result<()> {
    println!(
        "{}",
        "Annotating version catalog with available updates..."
            .cyan()
            .bold()
    );

    // Step 1: Locate the catalog
    println!("\n{}", "1. Validating project structure...".yellow());
    let scanner = ProjectScannerAgent::new(project_path).with_catalog(catalog);
    let project_info = scanner.validate()?;
    println!("{}", "✓ Project structure is valid".green());

    // Step 2: Load candidates
    println!("\n{}", "2. Loading update candidates...".yellow());
    let candidates = CandidateLoader::new(stable_only).load(candidates_path)?;
    println!(
        "   Loaded candidates for {} dependencies{}",
        candidates.len(),
        if stable_only { " (stable only)" } else { "" }
    );

    // Step 3: Annotate
    println!("\n{}", "3. Updating annotations...".yellow());
    let file = CatalogFile::new(&project_info.toml_path);
    let content = file.read();
    let outcome = annotate(&content, &candidates);

    finish(
        &file,
        &content,
        outcome,
        project_info.has_catalog,
        dry_run,
        print_update_report,
    )
}

/// Execute the cleanup workflow: strip every annotation
pub fn execute_cleanup<P: AsRef<Path>>(
    project_path: P,
    catalog: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    println!(
        "{}",
        "Removing update annotations from version catalog..."
            .cyan()
            .bold()
    );

    println!("\n{}", "1. Validating project structure...".yellow());
    let scanner = ProjectScannerAgent::new(project_path).with_catalog(catalog);
    let project_info = scanner.validate()?;
    println!("{}", "✓ Project structure is valid".green());

    println!("\n{}", "2. Removing annotations...".yellow());
    let file = CatalogFile::new(&project_info.toml_path);
    let content = file.read();
    let candidates = UpdateCandidates::default();
    let outcome = CatalogUpdater::new(&content, &candidates).cleanup_comments();

    finish(
        &file,
        &content,
        outcome,
        project_info.has_catalog,
        dry_run,
        print_cleanup_report,
    )
}

fn annotate(content: &str, candidates: &UpdateCandidates) -> Option<CatalogOutcome> {
    CatalogUpdater::new(content, candidates).update_new_versions()
}

fn finish(
    file: &CatalogFile,
    content: &str,
    outcome: Option<CatalogOutcome>,
    has_catalog: bool,
    dry_run: bool,
    print_report: fn(&AnnotationReport),
) -> Result<()> {
    let Some(outcome) = outcome else {
        println!(
            "{}",
            format!(
                "⚠ Catalog '{}' {}, nothing to do",
                file.path().display(),
                missing_or_empty(has_catalog)
            )
            .yellow()
        );
        return Ok(());
    };

    print_report(&outcome.report);

    if dry_run {
        println!("\n{}", "Dry run, resulting catalog:".dimmed());
        println!("{}", outcome.text);
        return Ok(());
    }

    if file.write_if_changed(content, &outcome.text)? {
        println!(
            "\n{}",
            format!("✓ Wrote {}", file.path().display()).green()
        );
    } else {
        println!("\n{}", "Catalog already up to date".yellow());
    }

    println!("\n{}", "✨ Done!".green().bold());
    Ok(())
}

fn missing_or_empty(has_catalog: bool) -> &'static str {
    if has_catalog { "is empty" } else { "not found" }
}

fn print_update_report(report: &AnnotationReport) {
    if report.annotated.is_empty() {
        println!("\n{}", "No available updates to annotate".yellow());
    } else {
        println!("\n{}", "Annotated declarations:".cyan().bold());
        println!(
            "{}",
            format!("Total annotations: {}", report.total_annotations()).green()
        );

        for entry in &report.annotated {
            println!(
                "  • [{}] {} ({}) → {}",
                entry.section.to_string().dimmed(),
                entry.key.white().bold(),
                entry.coordinate.to_string().dimmed(),
                entry.versions.join(", ").green()
            );
        }
    }

    if report.removed > 0 {
        println!(
            "{}",
            format!("   Replaced {} previous annotation(s)", report.removed).dimmed()
        );
    }
}

fn print_cleanup_report(report: &AnnotationReport) {
    if report.removed == 0 {
        println!("\n{}", "No annotations found".yellow());
    } else {
        println!(
            "\n{}",
            format!("Removed {} annotation(s)", report.removed).green()
        );
    }
}
