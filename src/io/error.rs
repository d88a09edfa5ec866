//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

use crate::data::tableau::TableauError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// The file is not valid JSON, or doesn't have the fields of a stored tableau.
    #[error("invalid tableau file: {0}")]
    Json(#[from] serde_json::Error),
    /// The file is not valid YAML, or doesn't have the fields of a stored tableau.
    #[error("invalid tableau file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The data read doesn't describe a consistent tableau.
    ///
    /// For example, a row might be shorter than the others.
    #[error("inconsistent tableau: {0}")]
    LinearProgram(#[from] TableauError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold the file location at which the error was caused.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("ParseError: {description}{}", display_location(.location))]
pub struct ParseError {
    description: String,
    location: Option<FileLocation>,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a copy of the line itself.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FileLocation {
    /// Line number, starting at 1.
    pub line_number: u64,
    /// Contents of the line.
    pub line: String,
}

fn display_location(location: &Option<FileLocation>) -> String {
    match location {
        Some(FileLocation { line_number, line }) => format!("\n\tCaused at line\t{}:\t{}", line_number, line),
        None => String::new(),
    }
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    ///
    /// # Return value
    ///
    /// * A `ParseError` instance without a location.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), location: None }
    }

    /// Create a new `ParseError` instance with the location at which it was caused.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `line_number`: Line number in the file, starting at 1.
    /// * `line`: The offending line.
    pub fn with_file_location(
        description: impl Into<String>,
        line_number: u64,
        line: &str,
    ) -> ParseError {
        ParseError {
            description: description.into(),
            location: Some(FileLocation { line_number, line: line.to_string() }),
        }
    }

    /// Attach a file location to an error that doesn't have one yet.
    #[must_use]
    pub fn at_line(self, line_number: u64, line: &str) -> ParseError {
        match self.location {
            Some(_) => self,
            None => ParseError::with_file_location(self.description, line_number, line),
        }
    }

    /// What went wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where it went wrong, if known.
    pub fn location(&self) -> Option<&FileLocation> {
        self.location.as_ref()
    }
}
