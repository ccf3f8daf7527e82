use serde::{Deserialize, Serialize};

/// Tunables for [`IdentifierCompleter`](crate::IdentifierCompleter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleterConfig {
    /// Smart-case matching (the default): an uppercase query character only
    /// matches that exact character, while a lowercase one matches either
    /// case. When false, uppercase query characters fold too.
    pub case_sensitive: bool,

    /// Upper bound on the number of returned completions. `None` returns
    /// every match.
    pub max_results: Option<usize>,
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_results: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_smart_case_and_no_limit() {
        let config = CompleterConfig::default();
        assert!(config.case_sensitive);
        assert_eq!(config.max_results, None);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: CompleterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompleterConfig::default());

        let config: CompleterConfig =
            serde_json::from_str(r#"{"case_sensitive": false, "max_results": 10}"#).unwrap();
        assert!(!config.case_sensitive);
        assert_eq!(config.max_results, Some(10));
    }
}
