//! Parent-pointer forest construction.
//!
//! The taxonomy is stored flat (each event row carries an optional parent
//! id) and arranged into a nested forest for every page load. The builder
//! never mutates its input semantics: roots and children keep the relative
//! order of the flat list, and nothing is sorted.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// Anything that can be arranged into a parent-pointer forest.
pub trait TreeItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// One node of the assembled forest: the item plus its children in input order.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

/// Result of arranging a flat item list into a forest.
///
/// `orphans` holds the id of every input item that did not make it into
/// `roots`: items whose parent id resolves to nothing, the members of any
/// parent-reference cycle, and everything stranded beneath either. The
/// rendered tree omits them (they are neither a root nor any node's child),
/// but the ids are reported here so callers can log or surface the
/// data-integrity problem instead of losing records silently.
#[derive(Debug, Clone)]
pub struct Forest<T> {
    pub roots: Vec<TreeNode<T>>,
    pub orphans: Vec<DbId>,
}

impl<T> Forest<T> {
    /// Total number of items attached to the forest (excludes orphans).
    pub fn attached_count(&self) -> usize {
        fn count<T>(node: &TreeNode<T>) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

/// Arrange a flat item list into a rooted forest.
///
/// Single pass partitioning items into roots and per-parent child lists,
/// then one walk down from the roots attaching children. Items on a
/// parent-reference cycle are never reached from a root and therefore end
/// up in `orphans` rather than crashing or looping the builder.
pub fn build_forest<T: TreeItem>(items: Vec<T>) -> Forest<T> {
    let known: HashSet<DbId> = items.iter().map(TreeItem::id).collect();
    let input_order: Vec<DbId> = items.iter().map(TreeItem::id).collect();

    let mut top_level = Vec::new();
    let mut children_of: HashMap<DbId, Vec<T>> = HashMap::new();
    for item in items {
        match item.parent_id() {
            None => top_level.push(item),
            Some(parent) if known.contains(&parent) => {
                children_of.entry(parent).or_default().push(item);
            }
            // Dangling parent reference: not a root, never a child.
            Some(_) => {}
        }
    }

    let mut attached = HashSet::new();
    let roots = top_level
        .into_iter()
        .map(|item| attach(item, &mut children_of, &mut attached))
        .collect();

    let orphans = input_order
        .into_iter()
        .filter(|id| !attached.contains(id))
        .collect();

    Forest { roots, orphans }
}

fn attach<T: TreeItem>(
    item: T,
    children_of: &mut HashMap<DbId, Vec<T>>,
    attached: &mut HashSet<DbId>,
) -> TreeNode<T> {
    attached.insert(item.id());
    let children = children_of
        .remove(&item.id())
        .map(|kids| {
            kids.into_iter()
                .map(|kid| attach(kid, children_of, attached))
                .collect()
        })
        .unwrap_or_default();
    TreeNode { item, children }
}
