//! package.json override reader

use crate::{Error, Result};
use overlook_core::OverrideDeclaration;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    overrides: Option<serde_json::Map<String, Value>>,

    #[serde(default)]
    pnpm: Option<PnpmSection>,
}

#[derive(Debug, Deserialize)]
struct PnpmSection {
    #[serde(default)]
    overrides: Option<serde_json::Map<String, Value>>,
}

/// Read the override declarations from `<dir>/package.json`.
///
/// Declarations come from the top-level `overrides` map and the pnpm-nested
/// `pnpm.overrides` map, merged first-wins on name with declaration order
/// preserved. Only string-valued entries are declarations; npm's nested
/// conditional-override objects are skipped.
///
/// # Errors
/// - [`Error::ManifestNotFound`] when no package.json exists at `dir`
/// - [`Error::ManifestUnreadable`] when it cannot be read or parsed
pub fn read_overrides(dir: &Path) -> Result<Vec<OverrideDeclaration>> {
    let path = dir.join("package.json");
    if !path.is_file() {
        return Err(Error::ManifestNotFound(dir.to_path_buf()));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::ManifestUnreadable(path.clone(), e.to_string()))?;
    let pkg: PackageJson = serde_json::from_str(&content)
        .map_err(|e| Error::ManifestUnreadable(path.clone(), e.to_string()))?;

    let mut declarations: Vec<OverrideDeclaration> = Vec::new();
    let maps = [
        pkg.overrides,
        pkg.pnpm.and_then(|section| section.overrides),
    ];
    for map in maps.into_iter().flatten() {
        for (name, value) in &map {
            let Value::String(spec) = value else {
                continue;
            };
            if !declarations.iter().any(|d| &d.name == name) {
                declarations.push(OverrideDeclaration::new(name.as_str(), spec.as_str()));
            }
        }
    }

    Ok(declarations)
}
