//! # Reading and writing of linear programs
//!
//! This module provides read and write functionality for tableaus and linear program formats.
use std::fs;
use std::path::Path;

use crate::data::linear_program::problem::InitialBasis;
use crate::data::tableau::Tableau;
use crate::io::error::ImportError;

pub mod error;
pub mod expression;
pub mod json;
pub mod lp;
pub mod print;
pub mod steps;
pub mod yaml;

/// Import a problem from a file.
///
/// Supports stored tableaus (`.json`, `.yaml` or `.yml`) and problem descriptions (`.lp`).
///
/// # Arguments
///
/// * `file_path`: Location of the file.
/// * `initial_basis`: How a problem description is turned into a tableau. Unused for stored
/// tableaus.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import(file_path: &Path, initial_basis: InitialBasis) -> Result<Tableau, ImportError> {
    // Choose the right parser before reading
    let extension = extension(file_path, &["json", "yaml", "yml", "lp"])?;

    let program = fs::read_to_string(file_path)?;
    match extension {
        "json" => json::parse(&program),
        "yaml" | "yml" => yaml::parse(&program),
        _ => {
            let mut problem = lp::parse(&program)?;
            match initial_basis {
                InitialBasis::BigM => problem.use_big_m(),
                InitialBasis::DualSimplex => problem.use_dual_simplex(),
            }
            Ok(problem.standardize()?)
        },
    }
}

/// Write a tableau, including its status, to a JSON or YAML file.
///
/// The format follows the file extension.
pub fn export(file_path: &Path, tableau: &Tableau) -> Result<(), ImportError> {
    let text = match extension(file_path, &["json", "yaml", "yml"])? {
        "json" => json::to_string(tableau)?,
        _ => yaml::to_string(tableau)?,
    };
    fs::write(file_path, text)?;
    Ok(())
}

/// File extension of a path, if it is one of the `supported` ones.
fn extension<'a>(file_path: &'a Path, supported: &[&str]) -> Result<&'a str, ImportError> {
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some(extension_string) if supported.contains(&extension_string) => Ok(extension_string),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
