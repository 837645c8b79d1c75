//! Locale-aware string comparison for titles and city names.
//!
//! Uses the root-locale ICU collation tables rather than byte ordering so
//! accented characters in Baltic city and produce names order the way a
//! picker presents them. Collators are built once and shared; construction
//! failure degrades to a plain total order so callers keep their no-error
//! contract.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::{Collator, CollatorOptions, Strength};

static BASE: OnceLock<Option<Collator>> = OnceLock::new();
static TERTIARY: OnceLock<Option<Collator>> = OnceLock::new();

fn base_collator() -> Option<&'static Collator> {
    BASE.get_or_init(|| {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        Collator::try_new(&Default::default(), options).ok()
    })
    .as_ref()
}

fn tertiary_collator() -> Option<&'static Collator> {
    TERTIARY
        .get_or_init(|| Collator::try_new(&Default::default(), CollatorOptions::new()).ok())
        .as_ref()
}

/// Case- and accent-insensitive comparison (primary strength).
pub(crate) fn compare_base(a: &str, b: &str) -> Ordering {
    match base_collator() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Case-sensitive locale-aware comparison (default tertiary strength).
pub(crate) fn compare_tertiary(a: &str, b: &str) -> Ordering {
    match tertiary_collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
