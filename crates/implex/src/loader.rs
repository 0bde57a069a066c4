//! Fragment Loader
//!
//! Scans fragment directories, parses JSON, validates, returns loaded
//! fragments.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{FragmentError, MAX_FRAGMENT_BYTES};
use crate::types::Fragment;

/// Load all fragments from a directory tree (recursive).
///
/// Files that fail to parse or validate are skipped with a warning; loading
/// continues with the rest.
pub fn load_fragments(base_dir: &Path) -> Result<Vec<Fragment>, FragmentError> {
    let mut fragments = Vec::new();

    if !base_dir.exists() {
        info!("Fragment directory does not exist: {:?}", base_dir);
        return Ok(fragments);
    }

    load_fragments_recursive(base_dir, &mut fragments)?;

    info!("Loaded {} fragments from {:?}", fragments.len(), base_dir);
    Ok(fragments)
}

fn load_fragments_recursive(
    dir: &Path,
    fragments: &mut Vec<Fragment>,
) -> Result<(), FragmentError> {
    let entries = fs::read_dir(dir)?;

    for entry in entries {
        let path = entry?.path();

        // Skip dotfiles and temp files
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name.ends_with(".tmp") || name.ends_with(".swp") {
                continue;
            }
        }

        if path.is_dir() {
            load_fragments_recursive(&path, fragments)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("json") {
            match load_fragment_file(&path) {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => {
                    warn!("Failed to load fragment {:?}: {}", path, e);
                    // Continue loading other fragments
                }
            }
        }
    }

    Ok(())
}

fn load_fragment_file(path: &Path) -> Result<Fragment, FragmentError> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_FRAGMENT_BYTES {
        return Err(FragmentError::TooLarge(metadata.len()));
    }

    let content = fs::read_to_string(path)?;
    let fragment: Fragment = serde_json::from_str(&content)?;

    fragment.validate()?;

    info!("Loaded fragment: {}", fragment.trait_path);
    Ok(fragment)
}

/// Get default fragment directory
pub fn default_fragment_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".implex")
        .join("fragments")
}
