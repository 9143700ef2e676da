use clap::Parser;
use poisson_relax::io::*;
use poisson_relax::render::*;
use poisson_relax::telemetry;
use std::path::PathBuf;

/// Render a binary field written by `solver` as a colour-mapped image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct RenderArgs {
    /// Binary field to read.
    input: PathBuf,

    /// Image to write, format follows the extension.
    output: PathBuf,

    /// Also dump the field as comma separated rows.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print build information and quit
    #[arg(long)]
    build_info: bool,
}

fn main() -> miette::Result<()> {
    let args = RenderArgs::parse();
    if args.build_info {
        poisson_relax::build_info::print_report("render");
        return Ok(());
    }

    telemetry::init_subscriber(telemetry::get_subscriber("warn"))?;

    let grid = read_field(&args.input)?;
    let (min, max) = grid.min_max();
    println!("Read {n}x{n} field, values in [{min}, {max}]", n = grid.n());

    write_image(&grid, &args.output)?;
    println!("Image saved at: {}", args.output.display());

    if let Some(csv) = &args.csv {
        write_csv(&grid, csv)?;
        println!("CSV saved at: {}", csv.display());
    }
    Ok(())
}
