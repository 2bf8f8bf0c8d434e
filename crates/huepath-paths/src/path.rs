use std::collections::HashMap;

use huepath_core::Pos;

/// Rebuild the start→goal path from a predecessor table.
///
/// Walks `came_from` backwards from `goal` until reaching a position with no
/// predecessor, then appends `start`. The walk is capped at one hop per
/// table entry, so a malformed table cannot loop forever.
pub fn reconstruct(came_from: &HashMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut node = goal;
    while let Some(&prev) = came_from.get(&node) {
        if path.len() > came_from.len() {
            break;
        }
        path.push(node);
        node = prev;
    }
    path.push(start);
    path.reverse();
    path
}
