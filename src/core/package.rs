//! Package descriptors
//!
//! The three bundled dependencies of QInstallerBridge and the files each one
//! contributes. Descriptors are static and never mutated.

use serde::Serialize;

/// One remote file and where it lands locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallEntry {
    /// Path relative to the repository root on the remote branch
    pub remote: &'static str,
    /// Destination path relative to the install root
    pub local: &'static str,
}

/// A remote repository and the files to vendor from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    /// GitHub account owning the repository
    pub account: &'static str,
    /// Repository name
    pub repo: &'static str,
    /// Directory recreated before the files are written
    pub dir: &'static str,
    /// Install mapping, in download order
    pub files: &'static [InstallEntry],
}

impl PackageDescriptor {
    /// URL of `remote` in this repository
    ///
    /// Plain concatenation of `{base}/{account}/{repo}/{branch}/{remote}`.
    pub fn url_for(&self, base: &str, branch: &str, remote: &str) -> String {
        format!(
            "{}/{}/{}/{branch}/{remote}",
            base.trim_end_matches('/'),
            self.account,
            self.repo
        )
    }
}

pub const QINSTALLER_BRIDGE: PackageDescriptor = PackageDescriptor {
    account: "antony-jr",
    repo: "QInstallerBridge",
    dir: "QInstallerBridge",
    files: &[
        InstallEntry {
            remote: "QInstallerBridge.hpp",
            local: "QInstallerBridge/QInstallerBridge.hpp",
        },
        InstallEntry {
            remote: "LICENSE",
            local: "QInstallerBridge/LICENSE",
        },
    ],
};

pub const QARCHIVE: PackageDescriptor = PackageDescriptor {
    account: "antony-jr",
    repo: "QArchive",
    dir: "QInstallerBridge/QArchive",
    files: &[
        InstallEntry {
            remote: "QArchive.hpp",
            local: "QInstallerBridge/QArchive/QArchive.hpp",
        },
        InstallEntry {
            remote: "LICENSE",
            local: "QInstallerBridge/QArchive/LICENSE",
        },
    ],
};

pub const QEASY_DOWNLOADER: PackageDescriptor = PackageDescriptor {
    account: "antony-jr",
    repo: "QEasyDownloader",
    dir: "QInstallerBridge/QEasyDownloader",
    files: &[
        InstallEntry {
            remote: "QEasyDownloader.hpp",
            local: "QInstallerBridge/QEasyDownloader/QEasyDownloader.hpp",
        },
        InstallEntry {
            remote: "LICENSE",
            local: "QInstallerBridge/QEasyDownloader/LICENSE",
        },
    ],
};

static BUNDLED: [PackageDescriptor; 3] = [QINSTALLER_BRIDGE, QARCHIVE, QEASY_DOWNLOADER];

/// All bundled descriptors in install order
///
/// QInstallerBridge comes first: recreating its directory wipes the nested
/// QArchive and QEasyDownloader directories.
pub fn bundled() -> &'static [PackageDescriptor] {
    &BUNDLED
}

/// Look up a bundled descriptor by repository name (case-insensitive)
pub fn find(repo: &str) -> Option<&'static PackageDescriptor> {
    BUNDLED.iter().find(|p| p.repo.eq_ignore_ascii_case(repo))
}
