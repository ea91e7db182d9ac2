//! SQL fragment formatting: ordered field mappings, comma lists and literal quoting.

/// Ordered column-name to literal-text pairs with unique keys.
///
/// Values are inserted into SQL as-is, so string values must already be
/// quoted (see [`quote_literal`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<(String, String)>,
}

impl FieldMapping {
    pub fn new() -> Self {
        FieldMapping {
            entries: Vec::new(),
        }
    }

    /// Sets `key` to `value`. An existing key keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, key: &str, value: &str) -> &mut Self {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = FieldMapping::new();
        for (k, v) in iter {
            mapping.insert(k.as_ref(), v.as_ref());
        }
        mapping
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> From<[(K, V); N]> for FieldMapping {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Joins a mapping into `key=value` fragments separated by `,`.
///
/// ```
/// use sqlhelper::format::{join_mapping, FieldMapping};
///
/// let mapping = FieldMapping::from([("id", "1"), ("name", "'x'")]);
/// assert_eq!(join_mapping(&mapping), "id=1,name='x'");
/// assert_eq!(join_mapping(&FieldMapping::new()), "");
/// ```
pub fn join_mapping(mapping: &FieldMapping) -> String {
    mapping
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Joins items with `,`, keeping their order.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps `s` in single quotes.
///
/// Embedded quotes are not escaped: `it's` becomes `'it's'`. This is not a
/// defense against SQL injection.
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_mapping_keeps_order() {
        let mapping = FieldMapping::from([("b", "2"), ("a", "1"), ("c", "'three'")]);
        assert_eq!(join_mapping(&mapping), "b=2,a=1,c='three'");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_mapping(&FieldMapping::new()), "");
        assert_eq!(join_list::<&str>(&[]), "");
    }

    #[test]
    fn test_join_list() {
        assert_eq!(join_list(&["id"]), "id");
        assert_eq!(join_list(&["id", "name", "email"]), "id,name,email");
        let owned = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join_list(&owned), "a,b");
    }

    #[test]
    fn test_quote_literal_does_not_escape() {
        assert_eq!(quote_literal("sql"), "'sql'");
        assert_eq!(quote_literal(""), "''");
        assert_eq!(quote_literal("it's"), "'it's'");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut mapping = FieldMapping::new();
        mapping.insert("id", "1").insert("name", "'a'").insert("id", "2");
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("id"), Some("2"));
        assert_eq!(join_mapping(&mapping), "id=2,name='a'");
    }

    #[test]
    fn test_collect_deduplicates_keys() {
        let mapping: FieldMapping = vec![("k", "1"), ("k", "2")].into_iter().collect();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("k"), Some("2"));
        assert_eq!(mapping.get("missing"), None);
    }
}
