//! # Worked examples
//!
//! Small problems as they appear in introductory texts on the simplex method, stored as problem
//! descriptions and as tableaus.
use std::path::{Path, PathBuf};

/// # Solving from files
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of a problem file.
///
/// # Arguments
///
/// * `name`: File name, including the extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name)
}
