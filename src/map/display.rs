use core::fmt;

use super::BPlusTreeMap;

/// The stable textual form of the tree.
///
/// Depth-first with deeper-keyed subtrees first: each leaf entry prints as
/// `<key> <value>` on its own line, each internal node prints a
/// parenthesized separator key between successive child subtrees (none
/// before its leftmost child), and every line is indented one tab per depth
/// level. An empty map formats as the empty string.
///
/// The format is stable and exercised byte-for-byte in tests; tools that
/// parse it can rely on it not changing.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for BPlusTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.write_tree(f)
    }
}
