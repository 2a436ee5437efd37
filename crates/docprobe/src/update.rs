//! Update availability check against a local JSON manifest.
//!
//! Compares installed component versions with a manifest of published
//! releases. This is a check only; nothing is downloaded or installed.

use crate::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A published release entry in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateEntry {
    /// Component name; core entries may omit it.
    #[serde(default)]
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size_kb: u64,
}

/// Manifest shape: `{ "core_updates": [...], "plugin_updates": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateManifest {
    #[serde(default)]
    pub core_updates: Vec<UpdateEntry>,
    #[serde(default)]
    pub plugin_updates: Vec<UpdateEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Core,
    Plugin,
}

/// An update the manifest offers over the installed version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableUpdate {
    pub kind: UpdateKind,
    pub name: String,
    pub version: String,
    pub description: String,
    pub size_kb: u64,
}

/// Installed component versions, keyed by component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentVersions {
    versions: IndexMap<String, String>,
}

pub const CORE_COMPONENT: &str = "core";

impl Default for ComponentVersions {
    /// This build's components at the crate version.
    fn default() -> Self {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let mut versions = IndexMap::new();
        versions.insert(CORE_COMPONENT.to_string(), version.clone());
        versions.insert("docx-analyzer".to_string(), version.clone());
        versions.insert("pdf-analyzer".to_string(), version);
        Self { versions }
    }
}

impl ComponentVersions {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.versions.insert(name.into(), version.into());
    }
}

/// Load a manifest from a JSON file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<UpdateManifest> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}

/// Collect the updates the manifest offers over `installed`.
///
/// An entry counts as an update only when its version is strictly newer
/// under dotted-numeric comparison; unknown components are skipped.
pub fn check_updates(manifest: &UpdateManifest, installed: &ComponentVersions) -> Vec<AvailableUpdate> {
    let mut available = Vec::new();

    for entry in &manifest.core_updates {
        let name = if entry.name.is_empty() {
            CORE_COMPONENT
        } else {
            entry.name.as_str()
        };
        if let Some(current) = installed.get(CORE_COMPONENT) {
            if is_newer(&entry.version, current) {
                available.push(AvailableUpdate {
                    kind: UpdateKind::Core,
                    name: name.to_string(),
                    version: entry.version.clone(),
                    description: entry.description.clone(),
                    size_kb: entry.size_kb,
                });
            }
        }
    }

    for entry in &manifest.plugin_updates {
        let Some(current) = installed.get(&entry.name) else {
            tracing::debug!(plugin = %entry.name, "manifest names an uninstalled plugin, skipping");
            continue;
        };
        if is_newer(&entry.version, current) {
            available.push(AvailableUpdate {
                kind: UpdateKind::Plugin,
                name: entry.name.clone(),
                version: entry.version.clone(),
                description: entry.description.clone(),
                size_kb: entry.size_kb,
            });
        }
    }

    available
}

/// Dotted-numeric version comparison: is `candidate` strictly newer than
/// `current`? Missing segments count as zero; non-numeric segments compare
/// as zero.
fn is_newer(candidate: &str, current: &str) -> bool {
    let parse = |version: &str| -> Vec<u64> {
        version
            .split('.')
            .map(|segment| segment.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };

    let candidate = parse(candidate);
    let current = parse(current);
    let len = candidate.len().max(current.len());

    for i in 0..len {
        let a = candidate.get(i).copied().unwrap_or(0);
        let b = current.get(i).copied().unwrap_or(0);
        if a != b {
            return a > b;
        }
    }

    false
}
