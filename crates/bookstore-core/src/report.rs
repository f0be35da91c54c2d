//! # Report Ranking
//!
//! The two reports (top spenders, best sellers) share one shape: compute a
//! metric for every entity, sort descending, keep the first few.
//!
//! ```text
//! clients in id order        metric           ranked (stable)      top 3
//! ─────────────────────      ──────           ───────────────      ─────
//! #1 Ada                     $15.00           #4 Linus  $40.00     #4
//! #2 Grace                   $10.00    ──►    #1 Ada    $15.00 ──► #1
//! #3 Alan                    $15.00           #3 Alan   $15.00     #3
//! #4 Linus                   $40.00           #2 Grace  $10.00
//! ```
//!
//! Ties keep their original (enumeration) order, so #1 stays ahead of #3.

/// Returns the `n` items with the largest key, largest first.
///
/// Equal keys keep the order they had in `items`.
///
/// ## Example
/// ```rust
/// use bookstore_core::report::top_n_by_key;
///
/// let sales = vec![("a", 3), ("b", 1), ("c", 4), ("d", 1), ("e", 5)];
/// let top = top_n_by_key(sales, 3, |(_, count)| *count);
/// assert_eq!(top, vec![("e", 5), ("c", 4), ("a", 3)]);
/// ```
pub fn top_n_by_key<T, K, F>(mut items: Vec<T>, n: usize, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // sort_by is stable
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items.truncate(n);
    items
}
