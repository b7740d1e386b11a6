//! CLI implementation of the default install run
//!
//! Installs the bundled packages and prints a summary.

use std::path::Path;

use anyhow::{Context, Result};

use super::output::{create_spinner, status, OutputConfig};
use crate::core::install::{InstallEvent, InstallReport, Installer};
use crate::core::package::{self, PackageDescriptor};
use crate::error::InstallError;
use crate::infra::download::Fetcher;

/// Resolve `--only` names to descriptors, keeping the bundled order
pub fn select_packages(only: &[String]) -> Result<Vec<PackageDescriptor>, InstallError> {
    if only.is_empty() {
        return Ok(package::bundled().to_vec());
    }

    for name in only {
        if package::find(name).is_none() {
            return Err(InstallError::UnknownPackage { name: name.clone() });
        }
    }

    Ok(package::bundled()
        .iter()
        .filter(|p| only.iter().any(|name| p.repo.eq_ignore_ascii_case(name)))
        .copied()
        .collect())
}

/// Execute the install run
pub async fn execute(
    root: &Path,
    base_url: &str,
    only: &[String],
    output: &OutputConfig,
) -> Result<()> {
    let packages = select_packages(only)?;

    let mut installer = Installer::new(root, Fetcher::new()).with_base_url(base_url);

    let spinner = output
        .show_progress()
        .then(|| create_spinner("Preparing..."));
    if let Some(pb) = spinner.clone() {
        installer = installer.with_events(Box::new(move |event| match event {
            InstallEvent::PackageStarted { repo } => pb.set_message(format!("Installing {repo}")),
            InstallEvent::DirectoryCreated { path } => {
                pb.set_message(format!("Created {}", path.display()));
            }
            InstallEvent::FileDownloaded { url, .. } => pb.set_message(format!("Fetched {url}")),
            InstallEvent::PackageInstalled { repo } => pb.set_message(format!("Installed {repo}")),
        }));
    }

    let result = installer
        .install_all(&packages)
        .await
        .with_context(|| format!("Failed to install packages into {}", root.display()));

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let report = result?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if output.human() {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &InstallReport) {
    for pkg in &report.packages {
        println!("{} Installed {}", status::SUCCESS, pkg.repo);
        for file in &pkg.files {
            println!("    {} ({} bytes)", file.path.display(), file.size);
        }
        for file in pkg.non_success() {
            println!(
                "{} {} returned HTTP {}; the response body was written as-is",
                status::WARNING,
                file.url,
                file.status
            );
        }
    }
}
