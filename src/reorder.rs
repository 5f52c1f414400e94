//! Position-based list edits shared by the category list and entry lists
//!
//! Positions are validated before anything is touched, so a bad position
//! leaves the list exactly as it was.

use std::collections::BTreeSet;

use crate::error::{CategoriesError, CategoriesResult};

/// Deduplicate `positions` and check that each one is inside `0..len`
pub fn checked_positions(positions: &[usize], len: usize) -> CategoriesResult<BTreeSet<usize>> {
    let set: BTreeSet<usize> = positions.iter().copied().collect();
    match set.iter().next_back() {
        Some(&index) if index >= len => Err(CategoriesError::IndexOutOfBounds { index, len }),
        _ => Ok(set),
    }
}

/// Remove the items at `positions`, returning them in their original order
pub fn remove_positions<T>(items: &mut Vec<T>, positions: &[usize]) -> CategoriesResult<Vec<T>> {
    let set = checked_positions(positions, items.len())?;

    let mut removed = Vec::with_capacity(set.len());
    let mut kept = Vec::with_capacity(items.len() - set.len());
    for (i, item) in items.drain(..).enumerate() {
        if set.contains(&i) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;

    Ok(removed)
}

/// Move the items at `from` as one block so it starts at index `to`
///
/// The selected items are taken out first (keeping their relative order);
/// `to` then indexes into what is left, and may equal its length to move the
/// block to the end. Moving `{0}` to `2` in `[A, B, C, D]` gives
/// `[B, C, A, D]`.
pub fn move_positions<T>(items: &mut Vec<T>, from: &[usize], to: usize) -> CategoriesResult<()> {
    let set = checked_positions(from, items.len())?;
    let remaining = items.len() - set.len();
    if to > remaining {
        return Err(CategoriesError::IndexOutOfBounds {
            index: to,
            len: remaining,
        });
    }

    let mut moved = Vec::with_capacity(set.len());
    let mut kept = Vec::with_capacity(remaining);
    for (i, item) in items.drain(..).enumerate() {
        if set.contains(&i) {
            moved.push(item);
        } else {
            kept.push(item);
        }
    }
    let tail = kept.split_off(to);
    kept.extend(moved);
    kept.extend(tail);
    *items = kept;

    Ok(())
}
