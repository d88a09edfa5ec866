use approx::assert_abs_diff_eq;

use stack_simplex::algorithm::OptimizationResult;
use stack_simplex::algorithm::alternate::AlternateSolutions;
use stack_simplex::algorithm::simplex::feasibility::is_feasible;
use stack_simplex::algorithm::simplex::{SolveOptions, solve, solve_with};
use stack_simplex::algorithm::simplex::strategy::pivot_rule::MostNegative;
use stack_simplex::data::linear_program::problem::InitialBasis;
use stack_simplex::data::number_types::coefficient::Coefficient;
use stack_simplex::data::tableau::Tableau;
use stack_simplex::io::error::ImportError;
use stack_simplex::io::print::{Interpretation, PrintConfig, TableauPrinter};
use stack_simplex::io::steps::StepWriter;
use stack_simplex::io::{export, import};

use super::get_test_file_path;

fn read(file_name: &str, initial_basis: InitialBasis) -> Tableau {
    import(&get_test_file_path(file_name), initial_basis).unwrap()
}

fn value(tableau: &Tableau, name: &str) -> f64 {
    tableau.interpret().value(name).map_or(f64::NAN, |value| value.evaluate())
}

#[test]
fn production() {
    let mut tableau = read("production.lp", InitialBasis::BigM);
    assert_eq!(tableau.n_artificials(), 0);
    assert_eq!(solve(&mut tableau), OptimizationResult::Optimal);

    assert_abs_diff_eq!(tableau.objective_value().evaluate(), 21_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value(&tableau, "x1"), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value(&tableau, "x2"), 1.5, epsilon = 1e-9);
    assert_eq!(tableau.num_alternates(), 0);
}

#[test]
fn both_starting_methods_agree() {
    let mut big_m = read("dual.lp", InitialBasis::BigM);
    let mut dual = read("dual.lp", InitialBasis::DualSimplex);
    assert_eq!(big_m.n_artificials(), 1);
    assert_eq!(dual.n_artificials(), 0);

    assert_eq!(solve(&mut big_m), OptimizationResult::Optimal);
    assert_eq!(solve(&mut dual), OptimizationResult::Optimal);

    for tableau in [&big_m, &dual] {
        assert_abs_diff_eq!(tableau.objective_value().evaluate(), 6_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(value(tableau, "x1"), 2_f64, epsilon = 1e-9);
        assert_abs_diff_eq!(value(tableau, "x2"), 0_f64, epsilon = 1e-9);
    }
    assert_eq!(big_m.basic_vars(), &[0, 4, 1]);
    assert_eq!(dual.basic_vars(), &[0, 4, 1]);
}

#[test]
fn big_m_problem_and_tableau() {
    let from_problem = read("big_m.lp", InitialBasis::BigM);
    let from_tableau = read("big_m.json", InitialBasis::BigM);
    assert_eq!(from_problem.matrix(), from_tableau.matrix());
    assert_eq!(from_problem.basic_vars(), from_tableau.basic_vars());

    for mut tableau in [from_problem, from_tableau] {
        assert_eq!(solve(&mut tableau), OptimizationResult::Optimal);
        assert_eq!(tableau.basic_vars(), &[0, 4, 2, 3]);
        assert_eq!(tableau.objective_value(), Coefficient::from(6));
        assert_eq!(tableau.cell(0, 6), Coefficient::M);
    }
}

#[test]
fn infeasible() {
    let mut tableau = read("infeasible.lp", InitialBasis::BigM);
    assert_eq!(solve(&mut tableau), OptimizationResult::ArtificialInOptimalBasis);
    assert!(!tableau.is_feasible());

    let interpretation = Interpretation::new(&tableau, PrintConfig::default()).to_string();
    assert!(interpretation.contains("There are 1 Artificial variable(s) to be handled"));
}

#[test]
fn degenerate_alternates() {
    let mut tableau = read("degenerate.json", InitialBasis::BigM);
    assert_eq!(solve(&mut tableau), OptimizationResult::Optimal);
    assert_eq!(tableau.num_alternates(), 7);

    let alternates = AlternateSolutions::new(&tableau).unwrap();
    let all = alternates.all();
    assert_eq!(all.len(), 7);
    assert!(all.iter().any(Result::is_ok));
    for alternate in all.into_iter().flatten() {
        assert_eq!(alternate.objective_value(), tableau.objective_value());
        assert!(is_feasible(&alternate));
    }

    let text = TableauPrinter::new(&tableau, PrintConfig::default()).to_string();
    assert!(text.starts_with(&format!("{:^13}{:^13}", "MAX", "a")));
}

#[test]
fn export_keeps_status() {
    let mut tableau = read("degenerate.json", InitialBasis::BigM);
    solve(&mut tableau);

    let path = std::env::temp_dir().join(format!("stack-simplex-{}.json", std::process::id()));
    export(&path, &tableau).unwrap();
    let reread = import(&path, InitialBasis::BigM).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reread, tableau);
    assert!(reread.is_optimal());
    assert_eq!(reread.num_alternates(), 7);
}

#[test]
fn unknown_extension() {
    let result = import(&get_test_file_path("production.mps"), InitialBasis::BigM);
    assert!(matches!(result, Err(ImportError::FileExtension(_))));
}

#[test]
fn yaml_keeps_status() {
    let mut tableau = read("big_m.lp", InitialBasis::BigM);
    solve(&mut tableau);

    let path = std::env::temp_dir().join(format!("stack-simplex-{}.yaml", std::process::id()));
    export(&path, &tableau).unwrap();
    let reread = import(&path, InitialBasis::BigM).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(reread, tableau);
    assert!(reread.is_optimal());
    assert_eq!(reread.cell(0, 6), Coefficient::M);
}

#[test]
fn resume_from_a_stored_step() {
    let options = SolveOptions { single_step: true, ..SolveOptions::default() };
    let mut tableau = read("production.lp", InitialBasis::BigM);
    assert_eq!(solve_with::<MostNegative, _>(&mut tableau, &options, |_, _| {}), OptimizationResult::StepTaken);
    assert_abs_diff_eq!(tableau.objective_value().evaluate(), 20_f64, epsilon = 1e-9);

    let path = std::env::temp_dir().join(format!("stack-simplex-step-{}.json", std::process::id()));
    export(&path, &tableau).unwrap();
    let mut resumed = import(&path, InitialBasis::BigM).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(resumed, tableau);
    assert!(resumed.is_feasible());
    assert!(!resumed.is_optimal());

    assert_eq!(solve_with::<MostNegative, _>(&mut resumed, &options, |_, _| {}), OptimizationResult::Optimal);
    assert_abs_diff_eq!(resumed.objective_value().evaluate(), 21_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value(&resumed, "x1"), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(value(&resumed, "x2"), 1.5, epsilon = 1e-9);
}

#[test]
fn every_step_is_saved() {
    let directory = std::env::temp_dir().join(format!("stack-simplex-dual-steps-{}", std::process::id()));
    let mut tableau = read("dual.lp", InitialBasis::DualSimplex);

    let mut writer = StepWriter::create(&directory).unwrap();
    let result = solve_with::<MostNegative, _>(&mut tableau, &SolveOptions::default(), |iteration, tableau| {
        writer.record(iteration, tableau);
    });
    assert_eq!(result, OptimizationResult::Optimal);
    // One dual simplex repair, then a feasible solution before and after the single primal pivot
    assert_eq!(writer.finish().unwrap(), 3);

    let files = std::fs::read_dir(&directory).unwrap().count();
    let repaired = import(&directory.join("repair_step_1.json"), InitialBasis::BigM).unwrap();
    let last = import(&directory.join("sol_step_2.json"), InitialBasis::BigM).unwrap();
    std::fs::remove_dir_all(&directory).unwrap();

    assert_eq!(files, 3);
    assert!(is_feasible(&repaired));
    assert_eq!(repaired.basic_vars(), &[0, 3, 1]);
    assert_eq!(last.matrix(), tableau.matrix());
    assert_eq!(last.basic_vars(), &[0, 4, 1]);
}
