//! Property-based tests for fragment formatting and statement building
//!
//! These tests verify that:
//! - Mapping fragments keep every pair, in order
//! - Insert column and value lists stay paired
//! - Records and JSON keep row and column order

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sqlhelper::format::{join_list, join_mapping, FieldMapping};
    use sqlhelper::serializer::{to_json_text, to_records};
    use sqlhelper::statement::{build_delete, build_insert, build_select};
    use sqlhelper::RowSet;

    fn arb_column_name() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_]{0,15}".prop_map(|s: String| s)
    }

    fn arb_literal() -> impl Strategy<Value = String> {
        prop_oneof![
            "[0-9]{1,6}".prop_map(|s: String| s),
            "[a-zA-Z ]{0,12}".prop_map(|s: String| format!("'{}'", s)),
            Just("NULL".to_string()),
        ]
    }

    /// Pairs with unique keys, in generation order
    fn arb_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((arb_column_name(), arb_literal()), 1..=8).prop_map(|pairs| {
            let mut seen = std::collections::HashSet::new();
            pairs
                .into_iter()
                .filter(|(k, _)| seen.insert(k.clone()))
                .collect()
        })
    }

    proptest! {
        /// join_mapping yields one key=value fragment per pair, in order
        #[test]
        fn prop_join_mapping_fragments(pairs in arb_pairs()) {
            let mapping: FieldMapping = pairs.iter().cloned().collect();
            let joined = join_mapping(&mapping);
            let fragments: Vec<&str> = joined.split(',').collect();

            prop_assert_eq!(fragments.len(), pairs.len());
            for (fragment, (key, value)) in fragments.iter().zip(&pairs) {
                prop_assert_eq!(*fragment, format!("{}={}", key, value));
            }
        }

        /// The n-th column of an INSERT lines up with the n-th value
        #[test]
        fn prop_insert_lists_are_paired(pairs in arb_pairs()) {
            let mapping: FieldMapping = pairs.iter().cloned().collect();
            let sql = build_insert("t", &mapping).unwrap();

            let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
            let values: Vec<&str> = pairs.iter().map(|(_, v)| v.as_str()).collect();
            prop_assert_eq!(
                sql,
                format!("INSERT INTO t({}) VALUES({})", join_list(&keys), join_list(&values))
            );
        }

        /// WHERE appears exactly when there are conditions
        #[test]
        fn prop_select_where_clause(columns in prop::collection::vec(arb_column_name(), 0..4),
                                    pairs in prop::collection::vec((arb_column_name(), arb_literal()), 0..4)) {
            let conditions: FieldMapping = pairs.into_iter().collect();
            let sql = build_select("t", &columns, &conditions);

            prop_assert_eq!(sql.contains(" WHERE "), !conditions.is_empty());
            prop_assert_eq!(sql.starts_with("SELECT * FROM t"), columns.is_empty());
        }

        /// DELETE is only ever produced with a WHERE clause
        #[test]
        fn prop_delete_always_conditional(pairs in prop::collection::vec((arb_column_name(), arb_literal()), 0..4)) {
            let conditions: FieldMapping = pairs.into_iter().collect();
            match build_delete("t", &conditions) {
                Ok(sql) => prop_assert!(sql.starts_with("DELETE FROM t WHERE ")),
                Err(_) => prop_assert!(conditions.is_empty()),
            }
        }

        /// Serialized JSON parses back to the same rows with NULLs as null
        #[test]
        fn prop_json_preserves_rows(
            rows in prop::collection::vec(
                (prop::option::of("[a-z]{0,8}"), prop::option::of("[0-9]{0,4}")),
                0..10,
            )
        ) {
            let rowset = RowSet::new(
                vec!["name".to_string(), "count".to_string()],
                rows.iter().map(|(a, b)| vec![a.clone(), b.clone()]).collect(),
            );
            let json = to_json_text(&to_records(&rowset).unwrap()).unwrap();
            let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
                serde_json::from_str(&json).unwrap();

            prop_assert_eq!(parsed.len(), rows.len());
            for (object, (name, count)) in parsed.iter().zip(&rows) {
                let expected_name = name.clone().map_or(serde_json::Value::Null, serde_json::Value::String);
                let expected_count = count.clone().map_or(serde_json::Value::Null, serde_json::Value::String);
                prop_assert_eq!(&object["name"], &expected_name);
                prop_assert_eq!(&object["count"], &expected_count);
            }
        }
    }
}
