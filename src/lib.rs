// SPDX-License-Identifier: MIT

//! sentinel-rs: a sensor-rule condition engine
//!
//! Rule sets are YAML documents whose `when` conditions are small
//! boolean/relational expressions, evaluated against named sensor readings.

pub mod sentinel;
