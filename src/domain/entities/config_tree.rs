//! Config tree entity
//!
//! Nodes live in an arena; parent links are plain indices used for upward
//! lookups, the `children` lists are the only ownership path.

use std::path::{Path, PathBuf};

use crate::config::{merge_with_parents, PluginConfig};

/// Index of a node inside its [`ConfigTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigId(usize);

/// One `save.toml` and the directory scope it governs
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
    location: PathBuf,
    directory: PathBuf,
    parent: Option<ConfigId>,
    children: Vec<ConfigId>,
    plugin_configs: Vec<PluginConfig>,
}

impl ConfigNode {
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn parent(&self) -> Option<ConfigId> {
        self.parent
    }

    pub fn children(&self) -> &[ConfigId] {
        &self.children
    }

    /// Sections declared in this node's own file
    pub fn plugin_configs(&self) -> &[PluginConfig] {
        &self.plugin_configs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigTree {
    nodes: Vec<ConfigNode>,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent`.
    ///
    /// Locations are unique: inserting a known location returns the existing id.
    pub fn insert(
        &mut self,
        location: PathBuf,
        parent: Option<ConfigId>,
        plugin_configs: Vec<PluginConfig>,
    ) -> ConfigId {
        if let Some(existing) = self.find(&location) {
            return existing;
        }

        let directory = location
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let id = ConfigId(self.nodes.len());
        self.nodes.push(ConfigNode {
            location,
            directory,
            parent,
            children: Vec::new(),
            plugin_configs,
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn get(&self, id: ConfigId) -> &ConfigNode {
        &self.nodes[id.0]
    }

    pub fn find(&self, location: &Path) -> Option<ConfigId> {
        self.nodes
            .iter()
            .position(|node| node.location == location)
            .map(ConfigId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: ConfigId) -> impl Iterator<Item = ConfigId> + '_ {
        std::iter::successors(self.get(id).parent, move |current| self.get(*current).parent)
    }

    /// Top-most config above (or equal to) `id`
    pub fn root_of(&self, id: ConfigId) -> ConfigId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// `id` and all of its descendants in pre-order (children in discovery order)
    pub fn subtree(&self, id: ConfigId) -> Vec<ConfigId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.get(current).children.iter().rev().copied());
        }
        order
    }

    /// Own sections merged over those of every ancestor
    pub fn merged_configs(&self, id: ConfigId) -> Vec<PluginConfig> {
        merge_with_parents(
            self.get(id).plugin_configs(),
            self.ancestors(id)
                .map(|ancestor| self.get(ancestor).plugin_configs()),
        )
    }
}
