//! # Stored tableaus in YAML
//!
//! The same fields as the JSON files, in YAML syntax:
//!
//! ```yaml
//! matrix:
//!   - [-5, -4, 0, 0, 0]
//!   - [6, 4, 1, 0, 24]
//!   - [1, 2, 0, 1, 6]
//! basic_vars: [0, 3, 4]
//! n_decision_vars: 2
//! n_artificials: 0
//! is_max: true
//! ```
use crate::data::tableau::Tableau;
use crate::io::error::ImportError;
use crate::io::json::TableauRecord;

/// Read a tableau from YAML text.
pub fn parse(text: &str) -> Result<Tableau, ImportError> {
    let record: TableauRecord = serde_yaml::from_str(text)?;
    Tableau::try_from(record)
}

/// Write a tableau as YAML text.
pub fn to_string(tableau: &Tableau) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&TableauRecord::from(tableau))
}
