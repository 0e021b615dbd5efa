// SPDX-License-Identifier: MIT

//! Rule checking against sensor readings
//!
//! A rule's `when` condition is a template over named readings; the engine
//! substitutes the readings in, evaluates the resulting expression, and
//! reports which rules fired. Substitution is plain text replacement done
//! before evaluation: the expression language itself has no variables.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::expr::Evaluator;
use super::types::{RuleDefinition, RuleSetDefinition};
use crate::sentinel::error::SentinelError;

/// Sensor readings by name
pub type Readings = HashMap<String, f32>;

/// Outcome of checking one rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub fired: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report over a full rule set check
#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub ruleset: String,
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<RuleOutcome>,
}

impl RuleReport {
    /// Names of the rules that fired
    pub fn fired(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.fired)
            .map(|o| o.rule.as_str())
            .collect()
    }
}

/// Evaluates rule sets against readings
pub struct RuleEngine {
    evaluator: Evaluator,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator::new(),
        }
    }

    /// Use a preconfigured evaluator (custom trace sink or depth limit)
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    /// Check every rule in the set against the readings.
    ///
    /// Per-rule failures (unknown reading, malformed condition) are
    /// captured in that rule's outcome and logged; they do not abort the
    /// remaining rules.
    pub fn check(&mut self, set: &RuleSetDefinition, readings: &Readings) -> RuleReport {
        let mut outcomes = Vec::with_capacity(set.rules.len());
        for rule in &set.rules {
            outcomes.push(self.check_rule(rule, readings));
        }
        RuleReport {
            ruleset: set.name.clone(),
            generated_at: Utc::now(),
            outcomes,
        }
    }

    /// Substitute readings into a condition template and evaluate it.
    pub fn evaluate_condition(
        &mut self,
        template: &str,
        readings: &Readings,
    ) -> Result<f32, SentinelError> {
        let condition = substitute(template, readings)?;
        let value = self.evaluator.evaluate(&condition)?;
        Ok(value)
    }

    fn check_rule(&mut self, rule: &RuleDefinition, readings: &Readings) -> RuleOutcome {
        match self.evaluate_condition(&rule.when, readings) {
            Ok(value) => {
                let fired = value != 0.0;
                if fired {
                    log::info!("rule '{}' fired: {} => {}", rule.name, rule.when, value);
                }
                RuleOutcome {
                    rule: rule.name.clone(),
                    action: rule.action.clone(),
                    fired,
                    value: Some(value),
                    error: None,
                }
            }
            Err(err) => {
                log::warn!("rule '{}' failed on '{}': {}", rule.name, rule.when, err);
                RuleOutcome {
                    rule: rule.name.clone(),
                    action: rule.action.clone(),
                    fired: false,
                    value: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `{name}` placeholders in a condition template with reading values.
pub fn substitute(template: &str, readings: &Readings) -> Result<String, SentinelError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => name.push(c),
                None => {
                    return Err(SentinelError::config(format!(
                        "unterminated '{{' in condition template '{}'",
                        template
                    )))
                }
            }
        }
        match readings.get(name.as_str()) {
            Some(value) => out.push_str(&value.to_string()),
            None => return Err(SentinelError::unknown_reading(name)),
        }
    }
    Ok(out)
}

/// Parse a `name=value` reading pair as supplied on the command line.
pub fn parse_reading(spec: &str) -> Result<(String, f32), SentinelError> {
    let (name, value) = spec.split_once('=').ok_or_else(|| {
        SentinelError::config(format!("reading '{}' is not in name=value form", spec))
    })?;
    let value: f32 = value.trim().parse().map_err(|_| {
        SentinelError::config(format!("reading '{}' has a non-numeric value", spec))
    })?;
    Ok((name.trim().to_string(), value))
}
