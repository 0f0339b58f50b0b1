//! Unit tests for catalog error types

#[cfg(test)]
mod tests {
    use crate::catalog::error::CatalogError;
    use std::error::Error;

    #[test]
    fn test_not_found_error() {
        let error = CatalogError::NotFound("recipes.json".to_string());
        assert_eq!(error.to_string(), "Catalog not found: recipes.json");
    }

    #[test]
    fn test_error_display() {
        let error = CatalogError::NotFound("/data/recipes.json".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Catalog not found"));
        assert!(display.contains("/data/recipes.json"));
    }

    #[test]
    fn test_error_debug() {
        let error = CatalogError::NotFound("recipes.json".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
        assert!(debug.contains("recipes.json"));
    }

    #[test]
    fn test_decode_error_source() {
        let parse_failure = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error = CatalogError::from(parse_failure);
        assert!(error.source().is_some());
        assert!(error.to_string().contains("Error while decoding catalog"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }
}
