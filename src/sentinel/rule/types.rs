// SPDX-License-Identifier: MIT

//! YAML schema types for rule set definitions
//!
//! This module contains the data structures used for parsing rule set
//! configuration files.

use serde::{Deserialize, Serialize};

/// Top-level rule set definition
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleSetDefinition {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// A single sensor rule
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuleDefinition {
    pub name: String,
    pub description: Option<String>,
    /// Condition template; `{reading}` placeholders are substituted with
    /// sensor readings before evaluation
    pub when: String,
    /// Action identifier handed to the host when the rule fires
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_rule_deserializes() {
        let rule: RuleDefinition = serde_yaml::from_str("name: heartbeat\nwhen: \"1\"").unwrap();
        assert_eq!(rule.name, "heartbeat");
        assert_eq!(rule.when, "1");
        assert!(rule.description.is_none());
        assert!(rule.action.is_none());
    }

    #[test]
    fn test_rule_set_defaults_to_no_rules() {
        let set: RuleSetDefinition = serde_yaml::from_str("name: empty").unwrap();
        assert_eq!(set.name, "empty");
        assert!(set.rules.is_empty());
    }
}
