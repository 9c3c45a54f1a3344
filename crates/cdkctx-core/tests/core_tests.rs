#[cfg(test)]
mod tests {
    use cdkctx_core::*;
    use serde_json::json;
    use std::path::PathBuf;

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_missing_error_names_file() {
        let err = CdkCtxError::ConfigurationMissing {
            file: CDK_JSON.into(),
            path: PathBuf::from("/tmp/proj/cdk.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("`cdk.json`"));
        assert!(msg.contains("mandatory for a CDK application"));
        assert!(msg.contains("/tmp/proj/cdk.json"));
    }

    #[test]
    fn test_parse_error_is_unwrapped() {
        let inner = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = inner.to_string();
        let err: CdkCtxError = inner.into();
        assert!(matches!(err, CdkCtxError::ConfigurationParse(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CdkCtxError = io.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_invalid_context_display() {
        let err = CdkCtxError::InvalidContext {
            found: "array".into(),
        };
        assert!(err.to_string().contains("must be an object, found array"));
    }

    // ── Type tests ─────────────────────────────────────────────

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!([1])), "array");
        assert_eq!(value_kind(&json!({"a": 1})), "object");
    }

    #[test]
    fn test_context_map_holds_nested_values() {
        let mut map = ContextMap::new();
        map.insert("flag".into(), json!(true));
        map.insert("nested".into(), json!({"list": [1, "two", null]}));
        assert_eq!(map.len(), 2);
        assert_eq!(map["nested"]["list"][1], json!("two"));
    }
}
