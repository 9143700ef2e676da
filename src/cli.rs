use crate::boundary::*;
use crate::build_info;
use crate::error::SolverError;
use crate::grid::Grid;
use crate::io::*;
use crate::parameters::SolverParameters;
use crate::solver::*;
use crate::stencil::*;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: solver N outputFilename";

/// Poisson equation on the unit square with Dirichlet boundaries,
/// relaxed to convergence and saved as a binary field.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Mesh nodes per side, at least 2.
    #[arg(value_name = "N", required_unless_present = "build_info")]
    pub n: Option<String>,

    /// Destination of the binary field.
    #[arg(
        value_name = "outputFilename",
        required_unless_present = "build_info"
    )]
    pub output: Option<PathBuf>,

    /// Anything after the output path is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    /// Parse the process arguments.
    /// Missing arguments print the usage line and exit with 1,
    /// any other parse failure goes to stderr and exits with 1.
    pub fn cli_setup(name: &str) -> Self {
        let args = match Args::try_parse() {
            Ok(args) => args,
            Err(e) => std::process::exit(Self::report_parse_error(&e)),
        };

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        args
    }

    fn report_parse_error(e: &clap::Error) -> i32 {
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                0
            }
            ErrorKind::MissingRequiredArgument => {
                println!("{USAGE}");
                1
            }
            _ => {
                let _ = e.print();
                1
            }
        }
    }

    /// Node count from the first positional argument.
    pub fn dimension(&self) -> Result<usize, SolverError> {
        let raw = self
            .n
            .as_deref()
            .ok_or_else(|| SolverError::InvalidArgument(USAGE.to_string()))?;
        raw.trim().parse::<usize>().map_err(|_| {
            SolverError::InvalidArgument(format!("Invalid number: {raw}"))
        })
    }

    pub fn output_path(&self) -> Result<PathBuf, SolverError> {
        self.output
            .clone()
            .ok_or_else(|| SolverError::InvalidArgument(USAGE.to_string()))
    }
}

/// Full pipeline: allocate, stamp the quadratic edges, relax with the
/// x^2 + y^2 source, then save.
/// Nothing is written unless relaxation finished.
pub fn run(
    args: &Args,
    parameters: &SolverParameters,
) -> Result<SolveReport, SolverError> {
    let n = args.dimension()?;
    let output = args.output_path()?;

    let mut grid = Grid::new(n)?;
    let stencil = PoissonStencil::new(radial_source);
    let report =
        solve_dirichlet(&mut grid, &quadratic_edges, &stencil, parameters)?;
    report.print_report();

    let bytes = write_field(&output, &grid)?;
    println!("File size: {bytes} bytes");
    println!("File successfully saved at: {}", output.display());
    Ok(report)
}
