use crate::outcome::Named;
use ahash::AHashSet;

/// Appends `own` to the inherited items, skipping any whose name is already present.
///
/// Inherited items always win: a node cannot override an ancestor's item by reusing its
/// name, the node's copy is dropped. Names compare exactly, case included.
pub fn merge_by_name<T: Named + Clone>(inherited: &[T], own: &[T]) -> Vec<T> {
    let mut seen: AHashSet<&str> = inherited.iter().map(|item| item.name()).collect();
    let mut merged = inherited.to_vec();
    for item in own {
        if seen.insert(item.name()) {
            merged.push(item.clone());
        }
    }
    merged
}
