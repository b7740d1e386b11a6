//! CLI implementation of `--list`
//!
//! Shows the bundled packages and the URLs they are fetched from without
//! touching the network or the filesystem.

use anyhow::Result;
use serde::Serialize;

use super::output::OutputConfig;
use crate::config::urls::DEFAULT_BRANCH;
use crate::core::package::{self, PackageDescriptor};

#[derive(Debug, Serialize)]
struct ListedFile {
    url: String,
    local: &'static str,
}

#[derive(Debug, Serialize)]
struct ListedPackage {
    repo: &'static str,
    directory: &'static str,
    files: Vec<ListedFile>,
}

fn describe(package: &PackageDescriptor, base_url: &str) -> ListedPackage {
    ListedPackage {
        repo: package.repo,
        directory: package.dir,
        files: package
            .files
            .iter()
            .map(|entry| ListedFile {
                url: package.url_for(base_url, DEFAULT_BRANCH, entry.remote),
                local: entry.local,
            })
            .collect(),
    }
}

/// Execute `--list`
pub fn execute(base_url: &str, output: &OutputConfig) -> Result<()> {
    let listed: Vec<_> = package::bundled()
        .iter()
        .map(|p| describe(p, base_url))
        .collect();

    if output.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    for pkg in &listed {
        println!("{} -> {}/", pkg.repo, pkg.directory);
        for file in &pkg.files {
            println!("    {} -> {}", file.url, file.local);
        }
    }

    Ok(())
}
