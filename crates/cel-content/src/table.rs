//! Content tables and the selector.
//!
//! A [`ContentTable`] is an ordered, non-empty list of variants. A
//! [`KeyedTable`] is a total mapping from every sign (or every moon phase) to
//! a value. Both refuse to exist in a broken state, so selection at request
//! time cannot fail.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use cel_core::{ContentCategory, CoreError, MoonPhase, ZodiacSign};

use crate::seed::Seed;

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// A selected variant together with the index it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a, T> {
    pub index: usize,
    pub item: &'a T,
}

/// Pick `table[seed mod len]`.
///
/// An empty slice is a deployment defect and yields
/// [`CoreError::Configuration`].
pub fn select<T>(
    seed: Seed,
    table: &[T],
    category: ContentCategory,
) -> Result<Selection<'_, T>, CoreError> {
    if table.is_empty() {
        return Err(CoreError::configuration(
            category.as_str(),
            "table is empty",
        ));
    }
    let index = seed.index_into(table.len());
    Ok(Selection {
        index,
        item: &table[index],
    })
}

// ---------------------------------------------------------------------------
// ContentTable
// ---------------------------------------------------------------------------

/// Ordered, non-empty sequence of variants for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable<T> {
    items: Vec<T>,
}

impl<T> ContentTable<T> {
    pub fn new(category: ContentCategory, items: Vec<T>) -> Result<Self, CoreError> {
        if items.is_empty() {
            return Err(CoreError::configuration(
                category.as_str(),
                "table is empty",
            ));
        }
        Ok(Self { items })
    }

    /// Like [`Self::new`] but the table must hold exactly `len` variants.
    pub fn with_len(
        category: ContentCategory,
        items: Vec<T>,
        len: usize,
    ) -> Result<Self, CoreError> {
        if items.len() != len {
            return Err(CoreError::configuration(
                category.as_str(),
                format!("must have exactly {len} entries, found {}", items.len()),
            ));
        }
        Self::new(category, items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Infallible selection: the table is non-empty by construction.
    #[must_use]
    pub fn select(&self, seed: Seed) -> Selection<'_, T> {
        let index = seed.index_into(self.items.len());
        Selection {
            index,
            item: &self.items[index],
        }
    }

    #[must_use]
    pub fn pick(&self, seed: Seed) -> &T {
        self.select(seed).item
    }
}

impl ContentTable<String> {
    /// Build a string table from static literals.
    pub fn from_strs(category: ContentCategory, items: &[&str]) -> Result<Self, CoreError> {
        Self::new(category, items.iter().map(|s| (*s).to_string()).collect())
    }
}

// ---------------------------------------------------------------------------
// KeyedTable
// ---------------------------------------------------------------------------

/// A closed set of keys every keyed table must cover.
pub trait TableKey: Copy + Eq + fmt::Display + FromStr<Err = CoreError> + 'static {
    const ALL: &'static [Self];

    fn index(self) -> usize;
}

impl TableKey for ZodiacSign {
    const ALL: &'static [Self] = &Self::ALL;

    fn index(self) -> usize {
        Self::index(self)
    }
}

impl TableKey for MoonPhase {
    const ALL: &'static [Self] = &Self::ALL;

    fn index(self) -> usize {
        Self::index(self)
    }
}

/// Total mapping from every key of `K` to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedTable<K, T> {
    // One entry per key, in `K::ALL` order.
    entries: Vec<T>,
    _key: PhantomData<K>,
}

pub type SignTable<T> = KeyedTable<ZodiacSign, T>;
pub type PhaseTable<T> = KeyedTable<MoonPhase, T>;

impl<K: TableKey, T> KeyedTable<K, T> {
    /// Build from a function over every key. Totality is guaranteed by the
    /// caller's exhaustive `match`.
    pub fn from_fn(mut f: impl FnMut(K) -> T) -> Self {
        Self {
            entries: K::ALL.iter().map(|key| f(*key)).collect(),
            _key: PhantomData,
        }
    }

    /// Like [`Self::from_fn`] but each value may fail validation.
    pub fn try_from_fn(
        mut f: impl FnMut(K) -> Result<T, CoreError>,
    ) -> Result<Self, CoreError> {
        let entries = K::ALL
            .iter()
            .map(|key| f(*key))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            entries,
            _key: PhantomData,
        })
    }

    /// Build from string-keyed entries, as found in a catalog file.
    ///
    /// Keys parse case-insensitively. Unknown keys, duplicate keys, and
    /// missing keys are all [`CoreError::Configuration`].
    pub fn from_labelled(
        category: ContentCategory,
        labelled: BTreeMap<String, T>,
    ) -> Result<Self, CoreError> {
        let mut slots: Vec<Option<T>> = K::ALL.iter().map(|_| None).collect();

        for (label, value) in labelled {
            let key: K = label.parse().map_err(|_| {
                CoreError::configuration(category.as_str(), format!("unknown key '{label}'"))
            })?;
            if slots[key.index()].replace(value).is_some() {
                return Err(CoreError::configuration(
                    category.as_str(),
                    format!("duplicate entry for {key}"),
                ));
            }
        }

        let missing = K::ALL
            .iter()
            .filter(|key| slots[key.index()].is_none())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(CoreError::configuration(
                category.as_str(),
                format!("missing entry for {}", missing.join(", ")),
            ));
        }

        Ok(Self {
            entries: slots.into_iter().flatten().collect(),
            _key: PhantomData,
        })
    }

    #[must_use]
    pub fn get(&self, key: K) -> &T {
        &self.entries[key.index()]
    }

    /// `(key, value)` pairs in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        K::ALL.iter().copied().zip(self.entries.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
