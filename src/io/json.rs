//! # Stored tableaus
//!
//! Tableaus are stored as JSON objects. Matrix entries are numbers, or strings such as `"-2M + 1"`
//! for entries that depend on the Big-M symbol. The status fields are optional:
//!
//! ```json
//! {
//!   "matrix": [[-5, -4, 0, 0, 0], [6, 4, 1, 0, 24], [1, 2, 0, 1, 6]],
//!   "basic_vars": [0, 3, 4],
//!   "n_decision_vars": 2,
//!   "n_artificials": 0,
//!   "is_max": true
//! }
//! ```
use serde::{Deserialize, Serialize};

use crate::data::number_types::coefficient::Coefficient;
use crate::data::tableau::{Status, Tableau};
use crate::io::error::{ImportError, ParseError};

/// A matrix entry as stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    /// A plain number.
    Number(f64),
    /// Text like `"M"` or `"2.5M - 1"`.
    Expression(String),
}

impl From<Coefficient> for Cell {
    fn from(value: Coefficient) -> Self {
        match value {
            Coefficient::Number(number) => Cell::Number(number),
            Coefficient::BigM { .. } => Cell::Expression(value.to_string()),
        }
    }
}

impl TryFrom<&Cell> for Coefficient {
    type Error = ParseError;

    fn try_from(cell: &Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Number(number) => Ok(Coefficient::from(*number)),
            Cell::Expression(text) => text.parse().map_err(|error| ParseError::new(format!("{}", error))),
        }
    }
}

fn default_true() -> bool {
    true
}

/// All fields of a stored tableau.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableauRecord {
    /// Objective row followed by the constraint rows.
    pub matrix: Vec<Vec<Cell>>,
    /// Basic variable per row.
    pub basic_vars: Vec<usize>,
    /// Number of decision variables.
    pub n_decision_vars: usize,
    /// Number of artificial variables.
    pub n_artificials: usize,
    /// Direction of optimization.
    pub is_max: bool,
    /// Names of the decision variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_names: Option<Vec<String>>,
    /// Whether a feasible basic solution exists.
    #[serde(default = "default_true")]
    pub feasibility: bool,
    /// Whether the basic solution is optimal.
    #[serde(default)]
    pub optimal_status: bool,
    /// Whether the optimum can be reached from this basis.
    #[serde(default = "default_true")]
    pub reachability_of_optimal: bool,
    /// Number of alternate optimal solutions.
    #[serde(default)]
    pub n_alternates: usize,
}

impl From<&Tableau> for TableauRecord {
    fn from(tableau: &Tableau) -> Self {
        let status = tableau.status();
        Self {
            matrix: tableau.matrix().iter()
                .map(|row| row.iter().copied().map(Cell::from).collect())
                .collect(),
            basic_vars: tableau.basic_vars().to_vec(),
            n_decision_vars: tableau.n_decision_vars(),
            n_artificials: tableau.n_artificials(),
            is_max: tableau.is_max(),
            variable_names: Some(tableau.variable_names().to_vec()),
            feasibility: status.is_feasible,
            optimal_status: status.is_optimal,
            reachability_of_optimal: status.is_optimal_reachable,
            n_alternates: status.num_alternates,
        }
    }
}

impl TryFrom<TableauRecord> for Tableau {
    type Error = ImportError;

    fn try_from(record: TableauRecord) -> Result<Self, Self::Error> {
        let matrix = record.matrix.iter()
            .map(|row| row.iter().map(Coefficient::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        let tableau = Tableau::new(
            matrix,
            record.basic_vars,
            record.n_decision_vars,
            record.n_artificials,
            record.is_max.into(),
        )?;
        let tableau = match record.variable_names {
            Some(names) => tableau.with_variable_names(names)?,
            None => tableau,
        };

        Ok(tableau.with_status(Status {
            is_feasible: record.feasibility,
            is_optimal_reachable: record.reachability_of_optimal,
            is_optimal: record.optimal_status,
            num_alternates: record.n_alternates,
        }))
    }
}

/// Read a tableau from JSON text.
pub fn parse(text: &str) -> Result<Tableau, ImportError> {
    let record: TableauRecord = serde_json::from_str(text)?;
    Tableau::try_from(record)
}

/// Write a tableau as indented JSON text.
pub fn to_string(tableau: &Tableau) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TableauRecord::from(tableau))
}

#[cfg(test)]
mod test {
    use crate::data::number_types::coefficient::Coefficient;
    use crate::io::error::ImportError;
    use crate::io::json::{Cell, TableauRecord, parse, to_string};

    const BIG_M: &str = r#"{
        "matrix": [
            [1, -2, 0, 0, 0, "M", "M", 0],
            [1, 1, -1, 0, 0, 1, 0, 2],
            [-1, 1, 0, -1, 0, 0, 1, 1],
            [0, 1, 0, 0, 1, 0, 0, 3]
        ],
        "basic_vars": [0, 6, 7, 5],
        "n_decision_vars": 2,
        "n_artificials": 2,
        "is_max": true,
        "variable_names": ["a", "b"]
    }"#;

    #[test]
    fn read_with_defaults() {
        let tableau = parse(BIG_M).unwrap();

        assert_eq!(tableau.cell(0, 6), Coefficient::M);
        assert_eq!(tableau.cell(1, 3), Coefficient::from(-1));
        assert_eq!(tableau.n_slack_vars(), 3);
        assert_eq!(tableau.variable_name(1), "a");
        assert!(tableau.is_max());
        assert!(tableau.is_feasible());
        assert!(tableau.is_optimal_reachable());
        assert!(!tableau.is_optimal());
        assert_eq!(tableau.num_alternates(), 0);
    }

    #[test]
    fn written_tableau_reads_back() {
        let tableau = parse(BIG_M).unwrap();
        let text = to_string(&tableau).unwrap();
        assert!(text.contains("\"M\""));
        assert!(text.contains("\"feasibility\": true"));

        assert_eq!(parse(&text).unwrap(), tableau);
    }

    #[test]
    fn symbolic_cells() {
        assert_eq!(Cell::from(Coefficient::big_m(-2_f64, 1_f64)), Cell::Expression("-2M + 1".to_string()));
        assert_eq!(Cell::from(Coefficient::from(0.5)), Cell::Number(0.5));

        let record: TableauRecord = serde_json::from_str(r#"{
            "matrix": [[0, "-M + 3", 0], [1, 0, 1]],
            "basic_vars": [0, 1],
            "n_decision_vars": 1,
            "n_artificials": 1,
            "is_max": false,
            "optimal_status": true,
            "n_alternates": 3
        }"#).unwrap();
        assert_eq!(record.matrix[0][1], Cell::Expression("-M + 3".to_string()));
        assert!(record.optimal_status);
        assert!(record.feasibility);
        assert_eq!(record.variable_names, None);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse("{}"), Err(ImportError::Json(_))));
        assert!(matches!(
            parse(r#"{"matrix": [[0, "N", 0]], "basic_vars": [0], "n_decision_vars": 1, "n_artificials": 0, "is_max": true}"#),
            Err(ImportError::Parse(_)),
        ));
        assert!(matches!(
            parse(r#"{"matrix": [[0, 0], [1]], "basic_vars": [0, 1], "n_decision_vars": 1, "n_artificials": 0, "is_max": true}"#),
            Err(ImportError::LinearProgram(_)),
        ));
    }
}
