//! # Problem files
//!
//! A problem file starts with its objective function, followed by one constraint per line:
//!
//! ```text
//! # A production problem
//! max: 5x1 + 4x2
//! 6x1 + 4x2 <= 24
//! x1 + 2x2 <= 6
//! ```
//!
//! Everything after a `#` is a comment. A statement may end with a `;`. The direction is written
//! as `max`, `min`, `maximize` or `minimize`.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::LinearProblem;
use crate::io::error::ParseError;
use crate::io::expression::{parse_constraint, parse_objective};

/// Parse the contents of a problem file.
pub fn parse(program: &str) -> Result<LinearProblem, ParseError> {
    let mut problem: Option<LinearProblem> = None;

    for (line_number, line) in (1..).zip(program.lines()) {
        let statement = line.split('#').next().unwrap_or_default().trim();
        let statement = statement.strip_suffix(';').unwrap_or(statement).trim();
        if statement.is_empty() {
            continue;
        }

        if let Some(problem) = problem.as_mut() {
            let constraint = parse_constraint(statement).map_err(|error| error.at_line(line_number, line))?;
            problem.add_constraint(constraint);
            continue;
        }

        let (direction, objective) = statement.split_once(':')
            .ok_or_else(|| ParseError::with_file_location(
                "expected an objective function like \"max: 3x + 2y\"", line_number, line,
            ))?;
        let direction = match direction.trim().to_lowercase().as_str() {
            "max" | "maximize" | "maximise" => Objective::Maximize,
            "min" | "minimize" | "minimise" => Objective::Minimize,
            other => return Err(ParseError::with_file_location(
                format!("unknown optimization direction \"{}\"", other), line_number, line,
            )),
        };

        let mut new_problem = LinearProblem::new(direction);
        new_problem.set_objective(parse_objective(objective).map_err(|error| error.at_line(line_number, line))?);
        problem = Some(new_problem);
    }

    problem.ok_or_else(|| ParseError::new("the file doesn't contain an objective function"))
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::io::lp::parse;

    #[test]
    fn production_problem() {
        let problem = parse(
            "# A production problem\n\
             max: 5x1 + 4x2\n\
             \n\
             6x1 + 4x2 <= 24 # wood\n\
             x1 + 2x2 <= 6;\n",
        ).unwrap();

        assert_eq!(problem.objective(), Objective::Maximize);
        assert_eq!(problem.constraints().len(), 2);
        assert_eq!(problem.constraints()[0].rhs, 24_f64);
        assert_eq!(problem.constraints()[1].relation, ConstraintType::Less);
        assert_eq!(problem.variables(), vec!["x1".to_string(), "x2".to_string()]);
    }

    #[test]
    fn errors_have_locations() {
        let error = parse("min: x\nx >= 1\nx + <= 3\n").unwrap_err();
        assert_eq!(error.location().map(|location| location.line_number), Some(3));

        let error = parse("optimize: x\n").unwrap_err();
        assert_eq!(error.location().map(|location| location.line_number), Some(1));

        assert!(parse("5x + 3y\n").is_err());
        assert!(parse("# nothing\n").is_err());
    }
}
