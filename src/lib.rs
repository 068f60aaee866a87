//! # vose-alias
//!
//! O(1) sampling from a discrete probability distribution via
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method).
//!
//! Give it a distribution (any iterator of `(item, probability)` pairs whose
//! probabilities sum to 1) and an O(n) preprocessing pass folds it into two
//! parallel arrays (`prob` and `alias`) from which every subsequent draw
//! costs exactly one random index and one random coin flip.
//!
//! There are two primary ways to use it:
//!
//! 1. **Ad-hoc distributions** with [`VoseAlias::from_dist`]
//! 2. **Compile-time enums** with the [`VoseEnum`] derive macro (from the
//!    companion `vose_alias_macros` crate).
//!
//! ## Quick start (map)
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use vose_alias::VoseAlias;
//!
//! # fn main() -> Result<(), vose_alias::VoseError> {
//! let coin = VoseAlias::from_dist(HashMap::from([("heads", 0.2), ("tails", 0.8)]))?;
//!
//! let mut rng = rand::rng();
//! let face = coin.sample(&mut rng); // &str
//! println!("flipped: {face}");
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust,ignore
//! use vose_alias::{VoseAlias, VoseEnum};
//!
//! #[derive(Copy, Clone, Debug, VoseEnum)]
//! enum Coin {
//!     #[probability(1/5)] Heads,
//!     #[probability(4/5)] Tails,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let coin: VoseAlias<Coin> = Coin::vose()?;
//! let mut rng = rand::rng();
//! let flip = coin.sample(&mut rng);        // &Coin
//! let owned = coin.sample_owned(&mut rng); // Coin (cloned)
//! # Ok(()) }
//! ```
//!
//! ## Building distributions from data
//!
//! The [`corpus`] module holds the plumbing the tests (and the demos) lean
//! on: [`read_words`] tokenizes a text file and [`to_distribution`] turns any
//! observed sequence into an empirical `count / total` distribution.
//!
//! ## Performance
//! * **Build**: O(n) over the input distribution.
//! * **Sample**: O(1) per draw (2 random numbers, 1 branch).
//! * **Space**: 2 vectors of length `n` (f64 + usize) plus the items.
//!
//! ## Gotchas
//! * Probabilities must be **non-negative** and sum to 1 (checked with an
//!   absolute tolerance of [`SUM_TOLERANCE`]); `NaN`/∞ are rejected.
//! * The table is immutable after construction. Changed your distribution?
//!   Build a new table.
//! * The table never owns an RNG: pass any [`rand::Rng`] to each draw. An
//!   immutable table may be shared across threads as long as each thread
//!   brings its own generator.

pub mod corpus;
mod error;
mod vose;

pub use corpus::{read_words, to_distribution};
pub use error::VoseError;
pub use vose::{AliasTable, SUM_TOLERANCE};

use rand::Rng;

/// Derive macro imported from `vose_alias_macros`.
/// See the crate-level example for usage.
pub use vose_alias_macros::VoseEnum;

/// An alias table over items of type `T`: the index-level [`AliasTable`]
/// plus the item sequence that fixes the index→item mapping.
///
/// Build it from any iterator of `(item, probability)` pairs summing to 1.
#[derive(Debug, Clone)]
pub struct VoseAlias<T> {
    table: AliasTable,
    items: Vec<T>,
}

/// Trait implemented by the `VoseEnum` derive macro.
///
/// Each variant and its probability is exposed via [`VoseEnum::ENTRIES`],
/// which enables building a ready-to-sample [`VoseAlias`].
pub trait VoseEnum: Sized + 'static {
    /// All `(variant, probability)` pairs for the enum.
    const ENTRIES: &'static [(Self, f64)];

    /// Convenience constructor that builds a [`VoseAlias`] from the enum
    /// entries.
    ///
    /// # Errors
    /// See [`VoseAlias::from_dist`] and [`VoseError`]: the annotated
    /// probabilities go through the same validation as any distribution, so
    /// they must be non-negative and sum to 1.
    fn vose() -> Result<VoseAlias<Self>, VoseError>
    where
        Self: Copy,
    {
        VoseAlias::from_dist(Self::ENTRIES.iter().copied())
    }
}

impl<T> VoseAlias<T> {
    /// Build from any `(item, probability)` iterator.
    ///
    /// # Errors
    /// * [`VoseError::Empty`] if there are no items.
    /// * [`VoseError::Negative`] if any probability is negative.
    /// * [`VoseError::NotNormalized`] if the probabilities do not sum to 1
    ///   within [`SUM_TOLERANCE`], or the sum is not finite.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_dist<I>(dist: I) -> Result<Self, VoseError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let mut items = Vec::new();
        let mut probabilities = Vec::new();
        for (item, p) in dist {
            items.push(item);
            probabilities.push(p);
        }
        let table = AliasTable::from_probabilities(&probabilities)?;
        Ok(Self { table, items })
    }

    /// Draw one item **by reference** (no `Clone` bound). Each call is an
    /// independent trial.
    ///
    /// # Panics
    /// Never panics for a well-constructed table.
    ///
    /// # Examples
    /// ```rust,ignore
    /// # use vose_alias::VoseAlias;
    /// # let coin = VoseAlias::from_dist([("h", 0.2), ("t", 0.8)]).unwrap();
    /// let mut rng = rand::rng();
    /// let s = coin.sample(&mut rng); // &str
    /// ```
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a T {
        let idx = self.table.sample_index(rng);
        &self.items[idx]
    }

    /// Draw one item **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don’t need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> T
    where
        T: Clone,
    {
        self.items[self.table.sample_index(rng)].clone()
    }

    /// Draw `k` independent samples by reference, in draw order.
    ///
    /// `k = 0` yields an empty vector.
    pub fn sample_n<'a, R: Rng + ?Sized>(&'a self, rng: &mut R, k: usize) -> Vec<&'a T> {
        (0..k).map(|_| self.sample(rng)).collect()
    }

    /// Draw `k` independent samples by value, in draw order.
    pub fn sample_n_owned<R: Rng + ?Sized>(&self, rng: &mut R, k: usize) -> Vec<T>
    where
        T: Clone,
    {
        (0..k).map(|_| self.sample_owned(rng)).collect()
    }

    /// Number of distinct items in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty (never true for a constructed table).
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The items in slot order. The order is an artifact of the input
    /// iterator; only the slot→item mapping matters.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}
