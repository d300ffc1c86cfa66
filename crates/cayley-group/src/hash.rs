use cayley_rewrite::hash::update_word;
use sha2::{Digest, Sha256};

use crate::group::Group;

/// Computes the canonical hash of a group's element list and table.
pub fn table_hash(group: &Group) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"cayley-table");
    hasher.update(cayley_rewrite::rules_hash(group.rules()).as_bytes());
    hasher.update((group.order() as u64).to_le_bytes());
    for element in group.elements() {
        update_word(element, &mut hasher);
    }
    for cell in group.table().iter().flatten() {
        update_word(cell, &mut hasher);
    }
    hex::encode(hasher.finalize())
}
