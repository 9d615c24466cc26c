//! The hierarchical tagged-tree index over a library playlist's tags.
//!
//! Nodes are stored in a flat arena ([`Index::arena`]) rather than as a
//! classic owned tree, so that `parent` back-pointers can be plain
//! indices instead of a cyclic `Rc`/`Weak` pair. Ownership is still
//! top-down: a node's children map owns the *path* to its child nodes
//! via [`ItemId`], and the arena is the sole owner of the [`ItemNode`]
//! storage. Nothing here is Genre's child map; Genre nodes are
//! inserted straight into the root and never descended into (see
//! [`Index::build`]).

use std::collections::HashMap;

use crate::model::{Key, SearchField};

/// An opaque reference to a node in an [`Index`].
///
/// Stable for the lifetime of the `Index` that produced it: the index
/// is never mutated in place (see module docs on invalidation), so an
/// `ItemId` handed out by one build is never reused to mean something
/// else until the whole index is rebuilt.
pub type ItemId = usize;

struct ItemNode {
    field: SearchField,
    name: String,
    folded: String,
    parent: Option<ItemId>,
    children: HashMap<Key, ItemId>,
    matches: Vec<usize>,
}

/// A non-owning view onto one node of an [`Index`].
///
/// Mirrors the spec's "non-owning reference to an Item" — callers hold
/// an `ItemId` (or a `ItemRef`, which just pairs one with the index) and
/// never get to mutate the node through it.
#[derive(Clone, Copy)]
pub struct ItemRef<'a> {
    index: &'a Index,
    id: ItemId,
}

impl<'a> ItemRef<'a> {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn field(&self) -> SearchField {
        self.node().field
    }

    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    pub fn folded(&self) -> &'a str {
        &self.node().folded
    }

    pub fn matches(&self) -> &'a [usize] {
        &self.node().matches
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn parent(&self) -> Option<ItemRef<'a>> {
        self.node().parent.map(|id| ItemRef {
            index: self.index,
            id,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = ItemRef<'a>> + 'a {
        let index = self.index;
        self.node().children.values().map(move |&id| ItemRef { index, id })
    }

    fn node(&self) -> &'a ItemNode {
        &self.index.arena[self.id]
    }
}

/// The hierarchical tag index built from a playlist snapshot.
///
/// Invariants (spec §3):
/// 1. For any non-Genre node, root-to-node path is `Artist -> Album ->
///    Title`; Genre nodes are top-level siblings only, never have
///    children.
/// 2. A [`Key`] is unique within its parent's children map; repeated
///    tag tuples merge into the same node and append to its `matches`.
/// 3. `folded` is a pure function of `name`.
/// 4. `parent` is `None` iff the node is top-level.
/// 5. `matches` entries are only valid against the snapshot the index
///    was built from; any playlist mutation invalidates the index.
#[derive(Default)]
pub struct Index {
    arena: Vec<ItemNode>,
    root: HashMap<Key, ItemId>,
    valid: bool,
}

/// One playlist entry's tag values, keyed by field. Empty strings mean
/// the tag is absent and that field is skipped during insertion.
pub type EntryTags = [String; 4];

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the index reflects a complete, consistent scan. `false`
    /// both before the first build and immediately after [`Index::invalidate`].
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Clear the index back to empty and invalid. Called on any
    /// playlist-update event at or above `Metadata` detail, and on
    /// plugin teardown.
    pub fn invalidate(&mut self) {
        self.arena.clear();
        self.root.clear();
        self.valid = false;
    }

    /// Rebuild the index from scratch over `entries`, where `tags(e)`
    /// returns the up-to-four tag values for playlist entry `e`.
    ///
    /// The index is INVALID for the whole duration of this call; it
    /// flips valid only after the full pass completes, so callers never
    /// observe a partially built tree (spec §5 ordering guarantee #1).
    pub fn build(&mut self, entry_count: usize, mut tags: impl FnMut(usize) -> EntryTags) {
        self.invalidate();

        for entry in 0..entry_count {
            let fields = tags(entry);
            let mut parent: Option<ItemId> = None;
            // `current` borrows either the root map or a node's children
            // map; we re-borrow each iteration since Rust can't express
            // "pointer into self that outlives a push to self.arena".
            for (field, value) in SearchField::ALL.into_iter().zip(fields) {
                if value.is_empty() {
                    continue;
                }

                let key = Key::new(field, value.clone());
                let children = match parent {
                    Some(p) => &mut self.arena[p].children,
                    None => &mut self.root,
                };

                let id = match children.get(&key) {
                    Some(&id) => id,
                    None => {
                        let id = self.arena.len();
                        self.arena.push(ItemNode {
                            field,
                            name: value.clone(),
                            folded: crate::fold::fold(&value),
                            parent,
                            children: HashMap::new(),
                            matches: Vec::new(),
                        });
                        children.insert(key, id);
                        id
                    }
                };

                self.arena[id].matches.push(entry);

                // Genre is outside the normal hierarchy: flat, a sibling
                // dimension. We never descend into it.
                if field != SearchField::Genre {
                    parent = Some(id);
                }
            }
        }

        self.valid = true;
    }

    pub fn root(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.root.values().map(move |&id| ItemRef { index: self, id })
    }

    pub fn get(&self, id: ItemId) -> ItemRef<'_> {
        ItemRef { index: self, id }
    }
}

#[cfg(test)]
pub(crate) fn tags(
    genre: &str,
    artist: &str,
    album: &str,
    title: &str,
) -> EntryTags {
    [genre.to_string(), artist.to_string(), album.to_string(), title.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beatles_and_radiohead() -> Vec<EntryTags> {
        vec![
            tags("", "The Beatles", "Abbey Road", "Come Together"),
            tags("", "The Beatles", "Abbey Road", "Something"),
            tags("", "Radiohead", "OK Computer", "Karma Police"),
        ]
    }

    #[test]
    fn build_is_invalid_until_complete() {
        let mut idx = Index::new();
        assert!(!idx.is_valid());
        idx.build(0, |_| tags("", "", "", ""));
        assert!(idx.is_valid());
    }

    #[test]
    fn duplicate_tuples_merge_and_append_matches() {
        let entries = beatles_and_radiohead();
        let mut idx = Index::new();
        idx.build(entries.len(), |e| entries[e].clone());

        let artist = idx
            .root()
            .find(|r| r.name() == "The Beatles")
            .expect("artist node");
        assert_eq!(artist.matches(), &[0, 1]);
        assert_eq!(artist.child_count(), 1); // one Album child: Abbey Road

        let album = artist.children().next().unwrap();
        assert_eq!(album.name(), "Abbey Road");
        assert_eq!(album.matches(), &[0, 1]);
        assert_eq!(album.child_count(), 2); // two Title children
    }

    #[test]
    fn genre_is_flat_and_never_has_children() {
        let entries = vec![tags("Rock", "The Beatles", "Abbey Road", "Something")];
        let mut idx = Index::new();
        idx.build(entries.len(), |e| entries[e].clone());

        let genre = idx.root().find(|r| r.field() == SearchField::Genre).unwrap();
        assert_eq!(genre.child_count(), 0);
        assert!(genre.parent().is_none());
    }

    #[test]
    fn empty_tag_is_skipped_without_error() {
        let entries = vec![tags("", "", "Abbey Road", "Something")];
        let mut idx = Index::new();
        idx.build(entries.len(), |e| entries[e].clone());

        // No Artist node at all; Album is top-level instead.
        assert!(idx.root().all(|r| r.field() != SearchField::Artist));
        let album = idx.root().find(|r| r.field() == SearchField::Album).unwrap();
        assert!(album.parent().is_none());
    }

    #[test]
    fn folded_is_pure_function_of_name() {
        let entries = vec![tags("", "THE BEATLES", "", "")];
        let mut idx = Index::new();
        idx.build(entries.len(), |e| entries[e].clone());
        let artist = idx.root().next().unwrap();
        assert_eq!(artist.folded(), crate::fold::fold(artist.name()));
    }

    #[test]
    fn rebuild_over_same_snapshot_is_structurally_equal() {
        let entries = beatles_and_radiohead();
        let build = || {
            let mut idx = Index::new();
            idx.build(entries.len(), |e| entries[e].clone());
            idx
        };
        let a = build();
        let b = build();

        let mut names_a: Vec<_> = a.root().map(|r| (r.field(), r.name().to_string())).collect();
        let mut names_b: Vec<_> = b.root().map(|r| (r.field(), r.name().to_string())).collect();
        names_a.sort();
        names_b.sort();
        assert_eq!(names_a, names_b);
    }
}
