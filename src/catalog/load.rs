// src/catalog/load.rs
//! Reads catalog JSON from a file or a directory of files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use super::store::Catalog;
use super::types::{Resource, ResourceReference};
use crate::error::{Result, SeekerError};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Resource>),
    Full {
        resources: Vec<Resource>,
        #[serde(default)]
        references: Option<Vec<ResourceReference>>,
    },
}

/// Loads a catalog from a JSON file or every `*.json` file under a directory.
///
/// When no file supplies explicit references they are derived from the
/// resources' `relatedResources`.
///
/// # Errors
/// Returns an error on unreadable files, malformed JSON or duplicate ids.
pub fn load_path(path: &Path) -> Result<Catalog> {
    let files = if path.is_dir() {
        collect_json_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut resources = Vec::new();
    let mut references: Option<Vec<ResourceReference>> = None;

    for file in &files {
        match read_file(file)? {
            CatalogFile::Bare(items) => resources.extend(items),
            CatalogFile::Full {
                resources: items,
                references: refs,
            } => {
                resources.extend(items);
                if let Some(refs) = refs {
                    references.get_or_insert_with(Vec::new).extend(refs);
                }
            }
        }
    }

    tracing::info!(files = files.len(), resources = resources.len(), "read catalog");

    match references {
        Some(refs) => Catalog::new(resources, refs),
        None => Catalog::from_resources(resources),
    }
}

/// Parses a catalog from an in-memory JSON string.
///
/// # Errors
/// Returns an error on malformed JSON or duplicate ids.
pub fn from_json_str(content: &str) -> Result<Catalog> {
    let parsed: CatalogFile = serde_json::from_str(content).map_err(|source| SeekerError::Json {
        source,
        path: PathBuf::from("<memory>"),
    })?;
    match parsed {
        CatalogFile::Bare(items) => Catalog::from_resources(items),
        CatalogFile::Full {
            resources,
            references: Some(refs),
        } => Catalog::new(resources, refs),
        CatalogFile::Full {
            resources,
            references: None,
        } => Catalog::from_resources(resources),
    }
}

fn read_file(path: &Path) -> Result<CatalogFile> {
    let content = fs::read_to_string(path).map_err(|source| SeekerError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    serde_json::from_str(&content).map_err(|source| SeekerError::Json {
        source,
        path: path.to_path_buf(),
    })
}

fn collect_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        let is_json = entry.path().extension().is_some_and(|e| e == "json");
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
