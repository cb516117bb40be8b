//! Parsers for the launch records input table.
//!
//! # Modules
//!
//! - [`csv_parser`]: Parse CSV-formatted launch records
//! - [`json_parser`]: Parse JSON-formatted launch records
//!
//! Both parsers share the same column contract: `Launch Site` (string),
//! `Payload Mass (kg)` (number), `Booster Version Category` (string) and
//! `class` (0 or 1). Extra columns in the input are ignored. Any malformed
//! row is a hard parse error; the loading layer treats that as fatal so the
//! Record Store is never partially populated.

pub mod csv_parser;
pub mod json_parser;
