use structopt::StructOpt;

use std::path::PathBuf;

use xcorr::series::{read_series, read_series_binary, write_correlogram};
use xcorr::{cross_correlation, Error};

#[derive(Debug, StructOpt)]
struct Args {
    /// File with the first series.
    #[structopt(parse(from_os_str))]
    series_a: PathBuf,
    /// File with the second series.
    #[structopt(parse(from_os_str))]
    series_b: PathBuf,
    /// Maximum lag to evaluate, defaults to framerate * seconds.
    #[structopt(short = "l", long = "max-lag")]
    max_lag: Option<usize>,
    /// Recording framerate in frames per second.
    #[structopt(long = "framerate", default_value = "25")]
    framerate: usize,
    /// Number of seconds to constrain the lag window to.
    #[structopt(long = "seconds", default_value = "2")]
    seconds: usize,
    /// Read the series as raw little-endian f64 values.
    #[structopt(long = "binary")]
    binary: bool,
    /// Also write the correlogram to this file.
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let args = Args::from_args();

    let (series_a, series_b) = if args.binary {
        (
            read_series_binary(&args.series_a)?,
            read_series_binary(&args.series_b)?,
        )
    } else {
        (read_series(&args.series_a)?, read_series(&args.series_b)?)
    };

    let max_lag = args.max_lag.unwrap_or(args.framerate * args.seconds);
    let result = cross_correlation(&series_a, &series_b, max_lag)?;

    println!(
        "# best lag {:6} correlation {:12.5}",
        result.best_lag, result.best_value
    );
    println!("# zero lag correlation {:12.5}", result.zero_lag_value);

    for entry in &result.entries {
        println!("{:6} {:12.5}", entry.lag, entry.value);
    }

    if let Some(path) = &args.output {
        write_correlogram(path, &result)?;
    }

    Ok(())
}
