//! Read-only key lookup over the common map types.
//!
//! [`get`](crate::get) accepts any type implementing [`Lookup`]. Implementations
//! are provided for:
//!
//! - [`std::collections::HashMap`] and [`std::collections::BTreeMap`]
//! - [`hashbrown::HashMap`]
//! - [`indexmap::IndexMap`]
//! - slices and [`Vec`], keyed by `usize` position
//!
//! The key is borrowed the same way the maps' own `get` methods borrow it, so a
//! `HashMap<String, V>` can be queried with a `&str`.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// A mapping that can be queried by a borrowed key of type `Q`.
pub trait Lookup<Q: ?Sized> {
    /// The type of the values stored in the mapping.
    type Value;

    /// Returns the value associated with `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S, Q> Lookup<Q> for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S, Q> Lookup<Q> for indexmap::IndexMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<V> Lookup<usize> for [V] {
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<V> Lookup<usize> for Vec<V> {
    type Value = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.as_slice().get(*key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_maps() {
        let hash: HashMap<String, i32> = HashMap::from([("1".to_string(), 1)]);
        assert_eq!(hash.lookup("1"), Some(&1));
        assert_eq!(hash.lookup("2"), None);

        let tree: BTreeMap<u32, &str> = BTreeMap::from([(3, "three")]);
        assert_eq!(tree.lookup(&3), Some(&"three"));
        assert_eq!(tree.lookup(&4), None);
    }

    #[test]
    fn test_hashbrown_with_fx_hasher() {
        let mut map = hashbrown::HashMap::with_hasher(rustc_hash::FxBuildHasher);
        map.insert("key".to_string(), 42_u64);
        assert_eq!(map.lookup("key"), Some(&42));
        assert_eq!(map.lookup("other"), None);
    }

    #[test]
    fn test_indexmap() {
        let mut map = indexmap::IndexMap::new();
        map.insert(10_i64, 'a');
        assert_eq!(map.lookup(&10), Some(&'a'));
        assert_eq!(map.lookup(&11), None);
    }

    #[test]
    fn test_slices_by_position() {
        let values = vec!["a", "b"];
        assert_eq!(values.lookup(&1), Some(&"b"));
        assert_eq!(values.lookup(&2), None);
        assert_eq!(values[..1].lookup(&0), Some(&"a"));
    }
}
