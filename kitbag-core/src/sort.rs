//! Key-ordered views over hash maps.

use std::collections::HashMap;

/// Split `map` into key-ascending parallel key/value vectors.
pub fn by_key_asc<K: Ord + Clone, V: Clone>(map: &HashMap<K, V>) -> (Vec<K>, Vec<V>) {
    let mut pairs: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs.into_iter().unzip()
}

/// Split `map` into key-descending parallel key/value vectors.
pub fn by_key_desc<K: Ord + Clone, V: Clone>(map: &HashMap<K, V>) -> (Vec<K>, Vec<V>) {
    let mut pairs: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    pairs.sort_by(|a, b| b.0.cmp(&a.0));
    pairs.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, i64> {
        let mut map = HashMap::new();
        map.insert("banana".to_string(), 2);
        map.insert("apple".to_string(), 1);
        map.insert("cherry".to_string(), 3);
        map
    }

    #[test]
    fn ascending_keys_keep_values_aligned() {
        let (keys, values) = by_key_asc(&sample());
        assert_eq!(keys, vec!["apple", "banana", "cherry"]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn descending_is_the_reverse() {
        let (keys, values) = by_key_desc(&sample());
        assert_eq!(keys, vec!["cherry", "banana", "apple"]);
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn empty_map_yields_empty_vectors() {
        let map: HashMap<String, i64> = HashMap::new();
        let (keys, values) = by_key_asc(&map);
        assert!(keys.is_empty());
        assert!(values.is_empty());
    }
}
