//! Rule set loader - YAML file loading and parsing
//!
//! This module handles loading rule set definitions from YAML files.

use super::types::RuleSetDefinition;
use crate::sentinel::error::SentinelError;
use std::fs;
use std::path::Path;

/// Loads rule set definitions from YAML files
pub struct RuleLoader;

impl RuleLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a rule set definition from a YAML file
    pub fn load_rule_set<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<RuleSetDefinition, SentinelError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a rule set definition from a YAML string
    pub fn parse_yaml(content: &str) -> Result<RuleSetDefinition, SentinelError> {
        let def: RuleSetDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_set() {
        let yaml = r#"
name: greenhouse
description: "Overheat and airflow alarms"

rules:
  - name: overheat
    description: "Trips when the temperature passes the limit"
    when: "{temp} > {temp_limit}"
    action: relay_off
  - name: heartbeat
    when: "1"
"#;
        let def = RuleLoader::parse_yaml(yaml).unwrap();
        assert_eq!(def.name, "greenhouse");
        assert_eq!(def.rules.len(), 2);
        assert_eq!(def.rules[0].name, "overheat");
        assert_eq!(def.rules[0].action.as_deref(), Some("relay_off"));
        assert_eq!(def.rules[1].when, "1");
        assert!(def.rules[1].action.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        let result = RuleLoader::parse_yaml("rules: {not: [valid");
        assert!(matches!(result, Err(SentinelError::Yaml(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let loader = RuleLoader::new();
        let result = loader.load_rule_set("does/not/exist.yaml");
        assert!(matches!(result, Err(SentinelError::Io(_))));
    }
}
