//! Presentation-order shuffle for the three statements.

use rand::Rng;

/// Uniformly shuffle exactly three items.
///
/// Pure function over an injected entropy source so discovery stays
/// side-effect-free and the distribution is testable. Each discovery
/// call re-randomizes independently; the accused statement is tracked
/// by content, not position, so callers never need the inverse mapping.
pub fn shuffle3<T, R: Rng + ?Sized>(mut items: [T; 3], rng: &mut R) -> [T; 3] {
    // Fisher-Yates over a fixed-size array.
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}
