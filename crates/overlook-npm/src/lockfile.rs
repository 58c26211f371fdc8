//! Lock artifact detection

use std::path::Path;

/// Package manager whose lock artifact is present in the audited directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// npm (package-lock.json), the baseline manager
    Npm,
    /// pnpm (pnpm-lock.yaml)
    Pnpm,
    /// yarn (yarn.lock)
    Yarn,
}

impl PackageManager {
    /// Detect the package manager from the lock artifacts in `dir`.
    ///
    /// No lock file at all defaults to npm.
    pub fn detect(dir: &Path) -> Self {
        if dir.join("package-lock.json").is_file() {
            Self::Npm
        } else if dir.join("pnpm-lock.yaml").is_file() {
            Self::Pnpm
        } else if dir.join("yarn.lock").is_file() {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    /// Display name of the manager
    pub fn name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}
