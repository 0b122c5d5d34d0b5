//! File tree utilities
//!
//! Directory walking helpers over the [`FileSystem`] port. Directory listings
//! are sorted, so every traversal here is deterministic.

use std::path::{Path, PathBuf};

use crate::config::is_config_file;
use crate::domain::ports::{FileSystem, FsResult};

/// Files below `dir` matching `condition`, grouped by directory.
///
/// The files of `dir` itself come first, then nested directories are visited
/// depth-first. Directories without matches produce no group.
pub fn find_all_files_matching(
    fs: &dyn FileSystem,
    dir: &Path,
    condition: &dyn Fn(&Path) -> bool,
) -> FsResult<Vec<Vec<PathBuf>>> {
    let (directories, files): (Vec<PathBuf>, Vec<PathBuf>) =
        fs.list_dir(dir)?.into_iter().partition(|p| fs.is_dir(p));

    let mut groups = Vec::new();
    let matching: Vec<PathBuf> = files.into_iter().filter(|f| condition(f)).collect();
    if !matching.is_empty() {
        groups.push(matching);
    }
    for nested in &directories {
        groups.extend(find_all_files_matching(fs, nested, condition)?);
    }
    Ok(groups)
}

/// First direct child of `dir` matching `condition`
pub fn find_child(
    fs: &dyn FileSystem,
    dir: &Path,
    condition: &dyn Fn(&Path) -> bool,
) -> FsResult<Option<PathBuf>> {
    if !fs.is_dir(dir) {
        return Ok(None);
    }
    Ok(fs.list_dir(dir)?.into_iter().find(|p| condition(p)))
}

/// Directory containing a `save.toml` directly
pub fn find_config_in(fs: &dyn FileSystem, dir: &Path) -> FsResult<Option<PathBuf>> {
    find_child(fs, dir, &|p| is_config_file(p) && fs.is_file(p))
}

/// Containing directories of `path`, nearest first
pub fn parent_dirs(path: &Path) -> impl Iterator<Item = &Path> {
    path.ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
}

/// Directories below `dir` whose every level satisfies `predicate`.
///
/// A directory rejected by `predicate` is pruned together with its whole
/// subtree; a predicate error aborts the walk. `dir` itself is included when
/// `with_self` is set.
pub fn find_descendant_directories(
    fs: &dyn FileSystem,
    dir: &Path,
    with_self: bool,
    predicate: &dyn Fn(&Path) -> FsResult<bool>,
) -> FsResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    if with_self {
        found.push(dir.to_path_buf());
    }
    for child in fs.list_dir(dir)? {
        if fs.is_dir(&child) && predicate(&child)? {
            found.extend(find_descendant_directories(fs, &child, true, predicate)?);
        }
    }
    Ok(found)
}

/// Directories under `root` whose resources belong to `root`'s config.
///
/// Subtrees with their own `save.toml` belong to a nested scope and are skipped.
pub fn resource_directories(fs: &dyn FileSystem, root: &Path) -> FsResult<Vec<PathBuf>> {
    find_descendant_directories(fs, root, true, &|dir| {
        Ok(find_config_in(fs, dir)?.is_none())
    })
}

/// Directory of `path` relative to `root_dir`; empty when they coincide
/// or when `path` is outside of `root_dir`.
pub fn relative_dir(path: &Path, root_dir: &Path) -> PathBuf {
    path.parent()
        .and_then(|dir| dir.strip_prefix(root_dir).ok())
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
