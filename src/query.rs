//! Masked recursive substring search over an [`Index`], plus the
//! ordering and two-pass rank/trim that turn raw matches into a
//! display-ready row list.

use std::cmp::Ordering;

use crate::index::{Index, ItemId, ItemRef};

/// One term still needing a match is one bit of this mask. Clearing a
/// bit means "this term is satisfied by this node or an ancestor of
/// it"; search prunes a subtree the moment none of its nodes, walked so
/// far, can ever clear the remaining bits.
type TermMask = u32;

/// Search over `index` for playlist entries whose tag path matches
/// every term in `terms` (AND semantics), in some order, against some
/// field along the Genre/Artist/Album/Title path.
///
/// Returns result rows sorted for display, plus a count of rows hidden
/// by the `max_results` cap.
pub struct SearchResult {
    pub rows: Vec<ItemId>,
    pub hidden: usize,
}

/// Run a full search pass: recurse with the mask over all terms,
/// stable two-pass sort, trim to `max_results`.
pub fn search(index: &Index, terms: &[String], max_results: usize) -> SearchResult {
    if terms.is_empty() {
        return SearchResult {
            rows: Vec::new(),
            hidden: 0,
        };
    }

    let initial_mask: TermMask = if terms.len() >= TermMask::BITS as usize {
        TermMask::MAX
    } else {
        (1 << terms.len()) - 1
    };

    let mut rows: Vec<ItemId> = Vec::new();
    for root in index.root() {
        search_recurse(root, initial_mask, terms, &mut rows);
    }

    rows.sort_by(|&a, &b| item_compare_pass1(index.get(a), index.get(b)));

    let hidden = rows.len().saturating_sub(max_results);
    rows.truncate(max_results);

    rows.sort_by(|&a, &b| item_compare(index.get(a), index.get(b)));

    SearchResult { rows, hidden }
}

/// The core pruning recursion (original: `search_recurse`).
///
/// For each bit still set in `mask`, test whether `item`'s folded name
/// contains that term; clear the bit on a hit. If no hit occurred this
/// call and the node has no children, the whole branch is dead — bail
/// without recursing or emitting. Otherwise emit the node (iff
/// `mask == 0` and it isn't a pass-through single-child wrapper), then
/// recurse into every child with the (possibly reduced) mask.
fn search_recurse(item: ItemRef<'_>, mask: TermMask, terms: &[String], out: &mut Vec<ItemId>) {
    let mut mask = mask;
    let mut matched_any = false;

    for (i, term) in terms.iter().enumerate() {
        let bit = 1 << i;
        if mask & bit == 0 {
            continue;
        }
        if item.folded().contains(term.as_str()) {
            mask &= !bit;
            matched_any = true;
        }
    }

    if !matched_any && mask != 0 && item.child_count() == 0 {
        return;
    }

    if mask == 0 && item.child_count() != 1 {
        out.push(item.id());
    }

    for child in item.children() {
        search_recurse(child, mask, terms, out);
    }
}

/// Canonical order used both as the final display sort and as the
/// tie-break within [`item_compare_pass1`]: field ordinal, then
/// byte-wise name, then recursively by parent (a node with a parent
/// sorts after one without; two parentless nodes are equal at this
/// level).
pub fn item_compare(a: ItemRef<'_>, b: ItemRef<'_>) -> Ordering {
    a.field()
        .cmp(&b.field())
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| match (a.parent(), b.parent()) {
            (Some(pa), Some(pb)) => item_compare(pa, pb),
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
        })
}

/// Ranking used before the `max_results` trim: most matches first,
/// falling back to [`item_compare`] for a stable order among ties.
pub fn item_compare_pass1(a: ItemRef<'_>, b: ItemRef<'_>) -> Ordering {
    b.matches()
        .len()
        .cmp(&a.matches().len())
        .then_with(|| item_compare(a, b))
}
