use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use stack_simplex::algorithm::OptimizationResult;
use stack_simplex::algorithm::alternate::AlternateSolutions;
use stack_simplex::algorithm::simplex::{Iteration, SolveOptions, solve_with};
use stack_simplex::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative, PivotRule};
use stack_simplex::data::linear_program::problem::InitialBasis;
use stack_simplex::data::tableau::Tableau;
use stack_simplex::io::print::{Interpretation, PrintConfig, TableauPrinter, entering_leaving, separator};
use stack_simplex::io::steps::StepWriter;
use stack_simplex::io::{export, import};

/// A tableau simplex solver written in rust.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description (`.lp`) or a stored tableau (`.json`, `.yaml`)
    problem_file: PathBuf,
    /// Increase logging output, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only print the outcome, not every step
    #[arg(short, long)]
    quiet: bool,
    /// Start `.lp` problems with the dual simplex method instead of the Big-M method
    #[arg(long)]
    dual_simplex: bool,
    /// Enter the first improving variable instead of the most improving one
    #[arg(long)]
    first_profitable: bool,
    /// Maximum number of pivots and feasibility repairs
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Stop after a single improving pivot, to continue later from the written tableau
    #[arg(long)]
    step: bool,
    /// Write the tableau after every repair and every feasible solution into this directory
    #[arg(long, value_name = "DIR")]
    save_steps: Option<PathBuf>,
    /// Print all alternate optimal solutions
    #[arg(long)]
    alternates: bool,
    /// Print a single alternate optimal solution, numbered from 1
    #[arg(long, value_name = "N")]
    extract: Option<usize>,
    /// Write the final tableau to a JSON or YAML file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// JSON file with print settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of decimals to print
    #[arg(long)]
    decimals: Option<usize>,
    /// Width of a printed table cell
    #[arg(long)]
    width: Option<usize>,
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", error);
        return ExitCode::FAILURE;
    }

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        },
    }
}

fn run(opts: &Opts) -> Result<(), String> {
    let config = print_config(opts)?;

    let path = opts.problem_file.as_path();
    println!("Reading problem file: \"{}\"...", path.to_string_lossy());
    let initial_basis = if opts.dual_simplex { InitialBasis::DualSimplex } else { InitialBasis::BigM };
    let mut tableau = import(path, initial_basis)
        .map_err(|error| format!("Couldn't read the problem: {}", error))?;

    if !opts.quiet {
        print!("{}", TableauPrinter::new(&tableau, config));
        println!("{}", separator(&tableau, config));
    }

    let mut steps = match &opts.save_steps {
        Some(directory) => Some(StepWriter::create(directory)
            .map_err(|error| format!("Couldn't create \"{}\": {}", directory.to_string_lossy(), error))?),
        None => None,
    };

    let options = SolveOptions { max_iterations: opts.max_iterations, single_step: opts.step };
    let result = if opts.first_profitable {
        solve::<FirstProfitable>(&mut tableau, &options, steps.as_mut(), opts.quiet, config)
    } else {
        solve::<MostNegative>(&mut tableau, &options, steps.as_mut(), opts.quiet, config)
    };

    if let Some(writer) = steps {
        let directory = writer.directory().to_string_lossy().into_owned();
        let written = writer.finish()
            .map_err(|error| format!("Couldn't save the steps in \"{}\": {}", directory, error))?;
        println!("{} step(s) written to \"{}\".", written, directory);
    }

    match result {
        OptimizationResult::Optimal => {
            println!("Optimal solution found.");
            print!("{}", TableauPrinter::new(&tableau, config));
            println!();
            print!("{}", Interpretation::new(&tableau, config));
            println!("{}", separator(&tableau, config));
            if tableau.num_alternates() > 0 {
                println!("There are {} alternate solution(s) to try.", tableau.num_alternates());
            }
        },
        OptimizationResult::NoFeasibleSolution => println!("Problem has no feasible solution."),
        OptimizationResult::NoFurtherFeasibleSolution => println!("No further feasible solution could be found."),
        OptimizationResult::CannotOptimizeFurther => {
            println!("Cannot optimize further: the problem is unbounded or the optimum can't be reached.");
        },
        OptimizationResult::ArtificialInOptimalBasis => {
            println!("An artificial variable remains in the optimal basis: the problem is infeasible.");
        },
        OptimizationResult::IterationLimit => println!("Iteration limit reached."),
        OptimizationResult::StepTaken => println!("Step taken, the tableau is not optimal yet."),
    }

    if opts.alternates || opts.extract.is_some() {
        show_alternates(&tableau, opts, config)?;
    }

    if let Some(output) = &opts.output {
        export(output, &tableau)
            .map_err(|error| format!("Couldn't write \"{}\": {}", output.to_string_lossy(), error))?;
        println!("Tableau written to \"{}\".", output.to_string_lossy());
    }

    Ok(())
}

fn print_config(opts: &Opts) -> Result<PrintConfig, String> {
    let mut config = match &opts.config {
        Some(path) => read_print_config(path)?,
        None => PrintConfig::default(),
    };
    if let Some(decimals) = opts.decimals {
        config.decimals = decimals;
    }
    if let Some(width) = opts.width {
        config.width = width;
    }

    Ok(config)
}

fn read_print_config(path: &Path) -> Result<PrintConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("Couldn't read \"{}\": {}", path.to_string_lossy(), error))?;
    serde_json::from_str(&text)
        .map_err(|error| format!("Invalid print settings in \"{}\": {}", path.to_string_lossy(), error))
}

fn solve<PR: PivotRule>(
    tableau: &mut Tableau,
    options: &SolveOptions,
    mut steps: Option<&mut StepWriter>,
    quiet: bool,
    config: PrintConfig,
) -> OptimizationResult {
    solve_with::<PR, _>(tableau, options, |iteration, tableau| {
        if let Some(writer) = steps.as_deref_mut() {
            writer.record(iteration, tableau);
        }
        if quiet {
            return;
        }

        match iteration {
            Iteration::FeasibilityRepaired(pivot) => {
                println!("Repairing a negative right-hand side with a dual simplex pivot.");
                println!("{}", entering_leaving(tableau, pivot.entering, pivot.leaving));
            },
            Iteration::Pivoted(pivot) => {
                println!("{}", entering_leaving(tableau, pivot.entering, pivot.leaving));
            },
            Iteration::Normalized => {},
            Iteration::FeasibleSolution => {
                print!("{}", TableauPrinter::new(tableau, config));
                println!();
                print!("{}", Interpretation::new(tableau, config));
                println!("{}", separator(tableau, config));
            },
        }
    })
}

fn show_alternates(tableau: &Tableau, opts: &Opts, config: PrintConfig) -> Result<(), String> {
    let alternates = AlternateSolutions::new(tableau).map_err(|error| error.to_string())?;
    if alternates.is_empty() {
        println!("There are no alternate solutions.");
        return Ok(());
    }

    let versions = match opts.extract {
        Some(version) => vec![version],
        None => (1..=alternates.len()).collect(),
    };
    let results = if opts.extract.is_some() {
        versions.iter().map(|&version| alternates.extract(version)).collect()
    } else {
        alternates.all()
    };

    for (version, result) in versions.into_iter().zip(results) {
        println!("Alternate solution #{}:", version);
        match result {
            Ok(alternate) => {
                print!("{}", TableauPrinter::new(&alternate, config));
                println!();
                print!("{}", Interpretation::new(&alternate, config));
            },
            Err(error) => println!("{}", error),
        }
        println!("{}", separator(tableau, config));
    }

    Ok(())
}
