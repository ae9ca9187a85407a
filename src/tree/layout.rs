use super::walk::RawEntry;
use super::{TreeEntry, BLANK, LAST_CONNECTOR, MID_CONNECTOR, RAIL};

/// Compute is_last flags and prefix strings for a pre-order entry list.
pub(crate) fn compute_tree_structure(raw: &[RawEntry]) -> Vec<TreeEntry> {
    let mut entries: Vec<TreeEntry> = raw
        .iter()
        .enumerate()
        .map(|(i, r)| TreeEntry {
            name: r.name.clone(),
            path: r.path.clone(),
            depth: r.depth,
            kind: r.kind.clone(),
            is_last: is_last_sibling(raw, i),
            prefix: String::new(), // computed below
        })
        .collect();

    compute_prefixes(&mut entries);

    entries
}

/// Determine if entry at index `i` is the last sibling in its parent group.
fn is_last_sibling(raw: &[RawEntry], i: usize) -> bool {
    let depth = raw[i].depth;
    for next in &raw[i + 1..] {
        if next.depth == depth {
            return false; // there's another sibling
        }
        if next.depth < depth {
            return true; // parent's scope ended, we were last
        }
        // deeper means it's a descendant of us, keep looking
    }
    true
}

/// Compute prefix strings for all entries.
///
/// `ancestor_is_last[d]` records whether the most recent entry at depth `d`
/// was the last sibling; an entry at depth `n` draws one token per level
/// `0..n` followed by its own connector.
fn compute_prefixes(entries: &mut [TreeEntry]) {
    let mut ancestor_is_last: Vec<bool> = Vec::new();

    for entry in entries.iter_mut() {
        let depth = entry.depth;

        // A missing level can only come from a malformed list; draw a rail.
        ancestor_is_last.resize(depth, false);

        let mut prefix = String::with_capacity((depth + 1) * 4);
        for &last in &ancestor_is_last {
            prefix.push_str(if last { BLANK } else { RAIL });
        }
        prefix.push_str(if entry.is_last {
            LAST_CONNECTOR
        } else {
            MID_CONNECTOR
        });
        entry.prefix = prefix;

        ancestor_is_last.push(entry.is_last);
    }
}
