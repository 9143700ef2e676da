use poisson_relax::cli::*;
use poisson_relax::parameters::SolverParameters;
use poisson_relax::telemetry;

fn main() -> miette::Result<()> {
    let args = Args::cli_setup("solver");

    let parameters = SolverParameters::load()?;
    let subscriber = telemetry::get_subscriber(&parameters.log_level);
    telemetry::init_subscriber(subscriber)?;

    run(&args, &parameters)?;
    Ok(())
}
