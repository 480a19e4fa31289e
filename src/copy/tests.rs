#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_parse_basic_header() {
        let schema = parse_copy_header("COPY users (id, name, email) FROM stdin;").unwrap();

        assert_eq!(schema.name, "users");
        assert_eq!(schema.keys, vec!["id", "name", "email"]);
    }

    #[test]
    fn test_parse_single_column() {
        let schema = parse_copy_header("COPY audit_log (payload) FROM stdin;").unwrap();

        assert_eq!(schema.name, "audit_log");
        assert_eq!(schema.keys, vec!["payload"]);
    }

    #[test]
    fn test_quoted_column_is_unquoted() {
        // pg_dump quotes column names that collide with keywords.
        let schema = parse_copy_header("COPY t (id, \"user\", \"order\") FROM stdin;").unwrap();

        assert_eq!(schema.keys, vec!["id", "user", "order"]);
    }

    #[test]
    fn test_unquoted_column_is_unchanged() {
        let schema = parse_copy_header("COPY t (bar) FROM stdin;").unwrap();

        assert_eq!(schema.keys, vec!["bar"]);
    }

    #[test]
    fn test_stray_quote_passes_through_literally() {
        // Only a token quoted on both ends is stripped.
        let schema = parse_copy_header("COPY t (\"foo, bar\") FROM stdin;").unwrap();

        assert_eq!(schema.keys, vec!["\"foo", "bar\""]);
    }

    #[test]
    fn test_preamble_lines_do_not_match() {
        assert_eq!(parse_copy_header(""), None);
        assert_eq!(parse_copy_header("SET statement_timeout = 0;"), None);
        assert_eq!(parse_copy_header("-- PostgreSQL database dump"), None);
        assert_eq!(
            parse_copy_header("CREATE TABLE users (id integer);"),
            None
        );
    }

    #[test]
    fn test_missing_column_list_does_not_match() {
        assert_eq!(parse_copy_header("COPY users FROM stdin;"), None);
        assert_eq!(parse_copy_header("COPY users () FROM stdin;"), None);
    }

    #[test]
    fn test_shape_must_match_exactly() {
        // No trailing semicolon.
        assert_eq!(parse_copy_header("COPY users (id) FROM stdin"), None);
        // Trailing garbage after the suffix.
        assert_eq!(parse_copy_header("COPY users (id) FROM stdin; extra"), None);
        // Schema-qualified table names are not word characters.
        assert_eq!(
            parse_copy_header("COPY public.users (id) FROM stdin;"),
            None
        );
        // Column token with characters outside the word/quote set.
        assert_eq!(parse_copy_header("COPY users (id, a b) FROM stdin;"), None);
    }

    #[test]
    fn test_table_name_word_characters() {
        let schema = parse_copy_header("COPY user_events_2024 (id) FROM stdin;").unwrap();

        assert_eq!(schema.name, "user_events_2024");
    }

    #[test]
    fn test_end_of_data_is_exact() {
        assert!(is_end_of_data("\\."));

        assert!(!is_end_of_data(""));
        assert!(!is_end_of_data("\\"));
        assert!(!is_end_of_data("\\. "));
        assert!(!is_end_of_data(" \\."));
        assert!(!is_end_of_data("\\.\\."));
    }

    #[test]
    fn test_decode_row_splits_on_tabs() {
        let row = decode_row("1\tAlice\talice@example.com");

        assert_eq!(row.entry, vec!["1", "Alice", "alice@example.com"]);
    }

    #[test]
    fn test_decode_row_preserves_empty_fields() {
        let row = decode_row("a\t\tc");

        assert_eq!(row.entry, vec!["a", "", "c"]);
    }

    #[test]
    fn test_decode_row_no_tabs() {
        let row = decode_row("single");

        assert_eq!(row.entry, vec!["single"]);
    }

    #[test]
    fn test_null_marker_passes_through_literally() {
        let row = decode_row("1\t\\N\tx");

        assert_eq!(row.entry, vec!["1", NULL_MARKER, "x"]);
        assert_eq!(row.entry[1], "\\N");
    }

    #[test]
    fn test_record_serialization_shapes() {
        let schema = Record::Schema(TableSchema {
            name: "users".to_string(),
            keys: vec!["id".to_string(), "name".to_string()],
        });
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"name":"users","keys":["id","name"]}"#
        );

        let row = Record::Row(RowEntry {
            entry: vec!["1".to_string(), "Alice".to_string()],
        });
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"entry":["1","Alice"]}"#
        );
    }
}
