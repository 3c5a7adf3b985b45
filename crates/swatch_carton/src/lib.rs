//! Carton - The shared toolbox for Swatch.
//!
//! Like a carton holding an artist's brushes and tubes, this crate holds the
//! small pieces every other Swatch crate reaches for:
//!
//! - **Strings**: `CompactString` re-export for short identifiers
//! - **Collections**: fast hash maps plus insertion-ordered `IndexMap`/`IndexSet`
//!   aliases on the same hasher
//! - **Case helpers**: camelCase to kebab-case and group singularization
//!
//! # Example
//!
//! ```
//! use swatch_carton::{camel_to_kebab, singularize, FxIndexMap};
//!
//! assert_eq!(camel_to_kebab("fontSizeBase"), "font-size-base");
//! assert_eq!(singularize("colors"), "color");
//!
//! let mut map = FxIndexMap::default();
//! map.insert("b", 1);
//! map.insert("a", 2);
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["b", "a"]);
//! ```

pub mod case;

pub use case::{camel_to_kebab, singularize};

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

/// Insertion-ordered map on the Fx hasher.
///
/// Diagnostics are reported on the first violation found, so iteration
/// order must follow source order rather than hash order.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Insertion-ordered set on the Fx hasher.
pub type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
