// SPDX-License-Identifier: MIT

//! Condition expression parsing and evaluation
//!
//! This module provides the expression language used by rule `when`
//! conditions. Conditions are small boolean/relational expressions like:
//! - `25.5 > 30`
//! - `(1&0)|1`
//! - `!0`
//!
//! Parsing is fused with evaluation: one recursive-descent pass computes
//! the `f32` value of the expression directly, with `1.0`/`0.0` standing
//! for true/false. No syntax tree is built.

mod error;
mod eval;
mod lexer;

pub use error::ExprError;
pub use eval::{Evaluator, LogTrace, TraceSink, DEFAULT_MAX_DEPTH};
