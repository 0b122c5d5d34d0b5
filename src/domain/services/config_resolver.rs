//! Config hierarchy resolver
//!
//! Builds the [`ConfigTree`] for an entry path: the chain of `save.toml`
//! files above the entry's config and every config nested below it.

use std::path::{Path, PathBuf};

use crate::config::{is_config_file, load_config, ConfigWarning};
use crate::domain::entities::{ConfigId, ConfigTree};
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::file_tree::{find_all_files_matching, find_config_in, parent_dirs};
use crate::error::{SaveError, SaveResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResolution {
    /// Canonical form of the entry path
    pub entry: PathBuf,
    pub tree: ConfigTree,
    /// Node governing the entry path
    pub target: ConfigId,
    /// Unknown keys met while loading any of the files
    pub warnings: Vec<ConfigWarning>,
}

#[derive(Default)]
struct Collected {
    tree: ConfigTree,
    warnings: Vec<ConfigWarning>,
}

/// Resolves the `save.toml` hierarchy around an entry path.
///
/// The entry may be a directory, a `save.toml` itself, or any resource file
/// (in which case the nearest config above it is used).
pub struct ConfigResolver<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    #[tracing::instrument(skip_all, fields(entry = %entry.display()))]
    pub fn resolve(&self, entry: &Path) -> SaveResult<ConfigResolution> {
        // Parent configs are only reachable through an absolute path.
        let entry = self.fs.canonicalize(entry).map_err(|err| match err {
            FsError::NotFound(_) => SaveError::ConfigNotFound {
                path: entry.to_path_buf(),
            },
            other => other.into(),
        })?;
        let location = self.locate_config(&entry)?;
        tracing::debug!(config = %location.display(), "entry config located");

        let mut collected = Collected::default();
        let target = self.insert_with_parents(&location, &mut collected)?;
        self.insert_descendants(target, &mut collected)?;

        tracing::debug!(nodes = collected.tree.len(), "config hierarchy resolved");
        Ok(ConfigResolution {
            entry,
            tree: collected.tree,
            target,
            warnings: collected.warnings,
        })
    }

    /// Config file governing `entry`
    fn locate_config(&self, entry: &Path) -> SaveResult<PathBuf> {
        let not_found = || SaveError::ConfigNotFound {
            path: entry.to_path_buf(),
        };

        if self.fs.is_dir(entry) {
            return find_config_in(self.fs, entry)?.ok_or_else(not_found);
        }
        if is_config_file(entry) {
            return if self.fs.is_file(entry) {
                Ok(entry.to_path_buf())
            } else {
                Err(not_found())
            };
        }
        for dir in parent_dirs(entry) {
            if let Some(found) = find_config_in(self.fs, dir)? {
                return Ok(found);
            }
        }
        Err(not_found())
    }

    /// Insert `location` after recursively inserting the configs above it
    fn insert_with_parents(
        &self,
        location: &Path,
        collected: &mut Collected,
    ) -> SaveResult<ConfigId> {
        let mut parent_location = None;
        // First entry is the config's own directory.
        for dir in parent_dirs(location).skip(1) {
            if let Some(found) = find_config_in(self.fs, dir)? {
                parent_location = Some(found);
                break;
            }
        }

        let parent = match parent_location {
            Some(parent_location) => Some(self.insert_with_parents(&parent_location, collected)?),
            None => None,
        };
        let (configs, warnings) = load_config(self.fs, location)?;
        collected.warnings.extend(warnings);
        Ok(collected
            .tree
            .insert(location.to_path_buf(), parent, configs))
    }

    /// Attach every config nested below `target`'s directory.
    ///
    /// Locations arrive depth-first, so the nearest config above a location is
    /// the latest preceding one whose directory contains it.
    fn insert_descendants(
        &self,
        target: ConfigId,
        collected: &mut Collected,
    ) -> SaveResult<()> {
        let directory = collected.tree.get(target).directory().to_path_buf();
        let locations: Vec<PathBuf> =
            find_all_files_matching(self.fs, &directory, &|p| is_config_file(p))?
                .into_iter()
                .flatten()
                .collect();

        for (index, location) in locations.iter().enumerate() {
            if collected.tree.find(location).is_some() {
                continue;
            }
            let above: Vec<&Path> = parent_dirs(location).skip(1).collect();
            let parent = locations[..index]
                .iter()
                .rev()
                .find(|candidate| candidate.parent().is_some_and(|dir| above.contains(&dir)))
                .and_then(|candidate| collected.tree.find(candidate))
                .unwrap_or(target);

            let (configs, warnings) = load_config(self.fs, location)?;
            collected.warnings.extend(warnings);
            collected
                .tree
                .insert(location.clone(), Some(parent), configs);
            tracing::trace!(config = %location.display(), "nested config attached");
        }
        Ok(())
    }
}
