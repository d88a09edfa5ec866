//! # Saving every step of a solve
//!
//! A `StepWriter` is fed the events of `solve_with` and stores the tableau after every
//! feasibility repair and every feasible solution, so that a solve can be inspected or resumed
//! from any of its steps.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::algorithm::simplex::Iteration;
use crate::data::tableau::Tableau;
use crate::io::error::ImportError;
use crate::io::export;

/// Writes one JSON file per step into a directory.
///
/// Files are called `repair_step_N.json` after a dual simplex repair and `sol_step_N.json` for
/// each feasible solution, both numbered from 1.
#[derive(Debug)]
pub struct StepWriter {
    directory: PathBuf,
    repairs: usize,
    solutions: usize,
    error: Option<ImportError>,
}

impl StepWriter {
    /// Create a writer, and the directory if it doesn't exist yet.
    pub fn create(directory: impl Into<PathBuf>) -> Result<Self, ImportError> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;

        Ok(Self { directory, repairs: 0, solutions: 0, error: None })
    }

    /// Directory the files are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Store the tableau if the event is a step worth keeping.
    ///
    /// After the first failed write, nothing more is written; the error is reported by `finish`.
    pub fn record(&mut self, iteration: Iteration, tableau: &Tableau) {
        if self.error.is_some() {
            return;
        }

        let file_name = match iteration {
            Iteration::FeasibilityRepaired(_) => {
                self.repairs += 1;
                format!("repair_step_{}.json", self.repairs)
            },
            Iteration::FeasibleSolution => {
                self.solutions += 1;
                format!("sol_step_{}.json", self.solutions)
            },
            Iteration::Normalized | Iteration::Pivoted(_) => return,
        };

        let path = self.directory.join(file_name);
        debug!(path = ?path, "saving step");
        if let Err(error) = export(&path, tableau) {
            self.error = Some(error);
        }
    }

    /// Number of files written, or the first error.
    pub fn finish(self) -> Result<usize, ImportError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.repairs + self.solutions),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::{Iteration, Pivot};
    use crate::data::linear_program::elements::Objective;
    use crate::io::steps::StepWriter;
    use crate::tests::tableau;

    #[test]
    fn only_repairs_and_solutions_are_written() {
        let directory = std::env::temp_dir().join(format!("stack-simplex-steps-{}", std::process::id()));
        let tableau = tableau(&[&[1_f64, 0_f64, 2_f64], &[0_f64, 1_f64, 3_f64]], &[0, 2], 1, 0, Objective::Maximize);

        let mut writer = StepWriter::create(&directory).unwrap();
        assert_eq!(writer.directory(), directory.as_path());
        let pivot = Pivot { row: 1, entering: 2, leaving: 1 };
        writer.record(Iteration::FeasibilityRepaired(pivot), &tableau);
        writer.record(Iteration::Normalized, &tableau);
        writer.record(Iteration::FeasibleSolution, &tableau);
        writer.record(Iteration::Pivoted(pivot), &tableau);
        writer.record(Iteration::FeasibleSolution, &tableau);
        assert_eq!(writer.finish().unwrap(), 3);

        let mut names = std::fs::read_dir(&directory).unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        std::fs::remove_dir_all(&directory).unwrap();
        assert_eq!(names, ["repair_step_1.json", "sol_step_1.json", "sol_step_2.json"]);
    }

    #[test]
    fn failed_write_is_reported() {
        let file = std::env::temp_dir().join(format!("stack-simplex-not-a-directory-{}", std::process::id()));
        std::fs::write(&file, "").unwrap();
        let result = StepWriter::create(&file);
        std::fs::remove_file(&file).unwrap();

        assert!(result.is_err());
    }
}
