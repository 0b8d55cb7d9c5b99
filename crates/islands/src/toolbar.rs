//! The build-menu toolbar tree and locator-addressed insertion.
//!
//! The toolbar is a rooted tree built once at startup. Packs address an
//! insertion point with a [`ToolbarLocator`] (an index path from the root)
//! and an [`InsertLocation`] relative to the located node's children.

use std::fmt;

use bevy::prelude::*;

use crate::registry::IslandId;

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// One node of the build menu: either a grouping with children or a leaf
/// entry the player can select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarNode {
    pub label: String,
    /// Set on entries that place a registered island.
    pub island: Option<IslandId>,
    pub children: Vec<ToolbarNode>,
}

impl ToolbarNode {
    /// A grouping node with no children yet.
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            island: None,
            children: Vec::new(),
        }
    }

    /// A stock leaf entry handled by the host itself.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::group(label)
    }

    /// A leaf entry that places the given registered island.
    pub fn entry(label: impl Into<String>, island: IslandId) -> Self {
        Self {
            label: label.into(),
            island: Some(island),
            children: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Locators
// ---------------------------------------------------------------------------

/// Index path from the toolbar root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarLocator {
    path: Vec<usize>,
}

impl ToolbarLocator {
    /// Locator addressing the root node itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the path by one child index.
    pub fn child_at(mut self, index: usize) -> Self {
        self.path.push(index);
        self
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

/// Where a new node lands relative to the located node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertLocation {
    /// Append after the last existing child.
    AfterLastChild,
    /// Prepend before the first existing child.
    FirstChild,
}

// ---------------------------------------------------------------------------
// Tree resource
// ---------------------------------------------------------------------------

/// The build menu, rooted at an unlabeled node whose children are the
/// top-level categories.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ToolbarTree {
    pub root: ToolbarNode,
}

impl Default for ToolbarTree {
    /// The host game's stock build-menu skeleton. Category and group
    /// positions are stable; packs address them by index.
    fn default() -> Self {
        let mut root = ToolbarNode::group("");
        root.children = vec![
            ToolbarNode::group("Belts"),
            ToolbarNode::group("Buildings"),
            ToolbarNode::group("Fluids"),
            ToolbarNode::group("Wires"),
            ToolbarNode::group("Trains"),
            platforms_category(),
            ToolbarNode::group("Decorations"),
        ];
        Self { root }
    }
}

/// Root child 5: the platform placement category.
fn platforms_category() -> ToolbarNode {
    let mut platforms = ToolbarNode::group("Platforms");
    let mut line_foundations = ToolbarNode::group("Line foundations");
    line_foundations.children = vec![
        ToolbarNode::leaf("Platform 1x1"),
        ToolbarNode::leaf("Platform line"),
    ];
    platforms.children = vec![
        ToolbarNode::group("Starter platforms"),
        ToolbarNode::group("Square platforms"),
        ToolbarNode::group("Space belts"),
        ToolbarNode::group("Space pipes"),
        line_foundations,
    ];
    platforms
}

impl ToolbarTree {
    /// Resolves a locator to the node it addresses.
    pub fn node(&self, locator: &ToolbarLocator) -> Result<&ToolbarNode, ToolbarError> {
        let mut current = &self.root;
        for &index in locator.path() {
            current = current.children.get(index).ok_or_else(|| {
                ToolbarError::InvalidPath {
                    path: locator.path().to_vec(),
                }
            })?;
        }
        Ok(current)
    }

    /// Inserts a node among the children of the located node.
    pub fn insert(
        &mut self,
        locator: &ToolbarLocator,
        location: InsertLocation,
        node: ToolbarNode,
    ) -> Result<(), ToolbarError> {
        let mut current = &mut self.root;
        for &index in locator.path() {
            current = current.children.get_mut(index).ok_or_else(|| {
                ToolbarError::InvalidPath {
                    path: locator.path().to_vec(),
                }
            })?;
        }
        match location {
            InsertLocation::AfterLastChild => current.children.push(node),
            InsertLocation::FirstChild => current.children.insert(0, node),
        }
        Ok(())
    }

    /// Depth-first search for the entry placing the given island.
    pub fn find_island(&self, id: &IslandId) -> Option<&ToolbarNode> {
        fn walk<'a>(node: &'a ToolbarNode, id: &IslandId) -> Option<&'a ToolbarNode> {
            if node.island.as_ref() == Some(id) {
                return Some(node);
            }
            node.children.iter().find_map(|child| walk(child, id))
        }
        walk(&self.root, id)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    /// The locator path does not address an existing node.
    InvalidPath { path: Vec<usize> },
}

impl fmt::Display for ToolbarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolbarError::InvalidPath { path } => {
                write!(f, "toolbar path {path:?} does not exist")
            }
        }
    }
}

impl std::error::Error for ToolbarError {}
