//! Package installation logic
//!
//! Recreates each package directory and fills it with the files named in the
//! package's install mapping. Packages are installed one at a time and each
//! file is downloaded and written before the next request is sent. The first
//! error aborts the run; nothing already written is rolled back.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::urls::{DEFAULT_BRANCH, RAW_CONTENT_HOST};
use crate::core::package::PackageDescriptor;
use crate::error::InstallError;
use crate::infra::download::Fetcher;
use crate::infra::filesystem;

/// Progress notifications emitted while installing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// A package is about to be installed
    PackageStarted { repo: String },
    /// The package directory was (re)created
    DirectoryCreated { path: PathBuf },
    /// One file of the install mapping was written
    FileDownloaded { url: String, path: PathBuf },
    /// Every file of the package was written
    PackageInstalled { repo: String },
}

/// Observer callback for [`InstallEvent`]s
pub type EventCallback = Box<dyn Fn(&InstallEvent) + Send + Sync>;

/// What was written for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// URL the body was fetched from
    pub url: String,
    /// Path the body was written to
    pub path: PathBuf,
    /// HTTP status code of the response
    pub status: u16,
    /// Size in bytes
    pub size: u64,
    /// SHA256 of the written content
    pub sha256: String,
}

/// Result of installing one package
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    /// Repository name
    pub repo: String,
    /// Directory that was recreated
    pub directory: PathBuf,
    /// Files written, in install order
    pub files: Vec<FileReport>,
}

impl PackageReport {
    /// Files whose response was not a 2xx status
    pub fn non_success(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !(200..300).contains(&f.status))
    }
}

/// Result of a full run
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    /// Installed packages, in install order
    pub packages: Vec<PackageReport>,
}

/// Installs package descriptors relative to a root directory
pub struct Installer {
    root: PathBuf,
    fetcher: Fetcher,
    base_url: String,
    branch: String,
    on_event: Option<EventCallback>,
}

impl Installer {
    /// Create an installer writing under `root` and fetching from GitHub
    pub fn new(root: impl Into<PathBuf>, fetcher: Fetcher) -> Self {
        Self {
            root: root.into(),
            fetcher,
            base_url: RAW_CONTENT_HOST.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            on_event: None,
        }
    }

    /// Fetch from another raw-content host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register a progress observer
    #[must_use]
    pub fn with_events(mut self, callback: EventCallback) -> Self {
        self.on_event = Some(callback);
        self
    }

    /// URL a descriptor's remote file is fetched from
    pub fn url_for(&self, package: &PackageDescriptor, remote: &str) -> String {
        package.url_for(&self.base_url, &self.branch, remote)
    }

    fn emit(&self, event: InstallEvent) {
        if let Some(cb) = &self.on_event {
            cb(&event);
        }
    }

    /// Install a single package
    ///
    /// Afterwards the package directory exists and holds exactly the files
    /// of its install mapping.
    pub async fn install_package(
        &self,
        package: &PackageDescriptor,
    ) -> Result<PackageReport, InstallError> {
        tracing::info!("Installing {}", package.repo);
        self.emit(InstallEvent::PackageStarted {
            repo: package.repo.to_string(),
        });

        let directory = self.root.join(package.dir);
        tracing::info!("Creating directory {}", directory.display());
        filesystem::recreate_dir(&directory)?;
        self.emit(InstallEvent::DirectoryCreated {
            path: directory.clone(),
        });

        let mut files = Vec::with_capacity(package.files.len());
        for entry in package.files {
            let url = self.url_for(package, entry.remote);
            let dest = self.root.join(entry.local);

            let pending = self.fetcher.get(&url).await?;
            let file = filesystem::create_file(&dest).await?;
            let result = pending.save(file, &dest).await?;

            self.emit(InstallEvent::FileDownloaded {
                url: url.clone(),
                path: dest,
            });
            files.push(FileReport {
                url,
                path: result.path,
                status: result.status,
                size: result.size,
                sha256: result.checksum,
            });
        }

        tracing::info!("Installed {}", package.repo);
        self.emit(InstallEvent::PackageInstalled {
            repo: package.repo.to_string(),
        });

        Ok(PackageReport {
            repo: package.repo.to_string(),
            directory,
            files,
        })
    }

    /// Install packages in the given order, stopping at the first error
    pub async fn install_all(
        &self,
        packages: &[PackageDescriptor],
    ) -> Result<InstallReport, InstallError> {
        let mut report = InstallReport::default();
        for package in packages {
            report.packages.push(self.install_package(package).await?);
        }
        Ok(report)
    }
}
