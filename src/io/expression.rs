//! # Linear expressions as text
//!
//! Objective functions are written as `3x + 2y`, constraints as `x + 2*y <= 4`. A coefficient may
//! be omitted, and may be separated from its variable by whitespace or `*`. Variable names start
//! with a letter or an underscore.
//!
//! A constraint contains exactly one of the relations `<=`, `>=`, `=`, `<` and `>`; the strict
//! inequalities are read as their non-strict counterparts. The right-hand side is a number.
use std::str::FromStr;

use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::problem::Constraint;
use crate::io::error::ParseError;

/// Parse a linear expression without a constant.
///
/// # Return value
///
/// Variable names with their coefficients, in order of appearance.
pub fn parse_expression(text: &str) -> Result<Vec<(String, f64)>, ParseError> {
    let mut cursor = Cursor { text, position: 0 };
    cursor.skip_whitespace();
    if cursor.is_at_end() {
        return Err(ParseError::new("empty expression"));
    }

    let mut terms = Vec::new();
    loop {
        let sign = match cursor.peek() {
            Some('+') => { cursor.bump(); 1_f64 },
            Some('-') => { cursor.bump(); -1_f64 },
            Some(_) if terms.is_empty() => 1_f64,
            Some(other) => return Err(ParseError::new(format!("expected \"+\" or \"-\" in \"{}\", found \"{}\"", text, other))),
            None => break,
        };
        cursor.skip_whitespace();

        let number = cursor.take_while(|c| c.is_ascii_digit() || c == '.');
        let coefficient = if number.is_empty() {
            1_f64
        } else {
            number.parse::<f64>()
                .map_err(|_| ParseError::new(format!("invalid coefficient \"{}\" in \"{}\"", number, text)))?
        };
        cursor.skip_whitespace();
        if cursor.peek() == Some('*') {
            cursor.bump();
            cursor.skip_whitespace();
        }

        let name = cursor.take_identifier();
        if name.is_empty() {
            return Err(ParseError::new(format!("expected a variable name in \"{}\"", text)));
        }
        terms.push((name.to_string(), sign * coefficient));
        cursor.skip_whitespace();
    }

    Ok(terms)
}

/// Parse an objective function.
///
/// Fails if the text contains a relation.
pub fn parse_objective(text: &str) -> Result<Vec<(String, f64)>, ParseError> {
    if text.contains(['<', '>', '=']) {
        return Err(ParseError::new(format!("objective function \"{}\" can't contain a relation", text)));
    }

    parse_expression(text)
}

/// Parse a constraint.
pub fn parse_constraint(text: &str) -> Result<Constraint, ParseError> {
    let relations = find_relations(text);
    let [(start, length, relation)] = relations[..] else {
        return Err(ParseError::new(format!(
            "constraint \"{}\" must contain exactly one relation, found {}", text, relations.len(),
        )));
    };

    let terms = parse_expression(&text[..start])?;
    let rhs_text = text[start + length..].trim();
    let rhs = rhs_text.parse::<f64>()
        .map_err(|_| ParseError::new(format!("right-hand side \"{}\" is not a number", rhs_text)))?;

    Ok(Constraint::new(terms, relation, rhs))
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_constraint(text)
    }
}

/// Positions, lengths and meanings of all relation operators in a text.
fn find_relations(text: &str) -> Vec<(usize, usize, ConstraintType)> {
    let bytes = text.as_bytes();
    let mut relations = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let followed_by_equals = bytes.get(i + 1) == Some(&b'=');
        let found = match bytes[i] {
            b'<' if followed_by_equals => Some((2, ConstraintType::Less)),
            b'>' if followed_by_equals => Some((2, ConstraintType::Greater)),
            b'<' => Some((1, ConstraintType::Less)),
            b'>' => Some((1, ConstraintType::Greater)),
            b'=' => Some((1, ConstraintType::Equal)),
            _ => None,
        };

        match found {
            Some((length, relation)) => {
                relations.push((i, length, relation));
                i += length;
            },
            None => i += 1,
        }
    }

    relations
}

struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
        &self.text[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_identifier(&mut self) -> &'a str {
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => self.take_while(|c| c.is_alphanumeric() || c == '_'),
            _ => "",
        }
    }
}
