//! Ricker CLI - convert between Ricker wavelet frequency and zero-crossing spans.

use clap::{Args, CommandFactory, Parser};
use ricker_span::{Quantity, RickerSpan};

mod logging;
mod output;

use output::{OutputConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "ricker")]
#[command(about = "Ricker wavelet conversion tool")]
#[command(
    after_help = "Examples:\n  ricker --freq 30\n  ricker --length 0.0150053\n  ricker --half-ms 5.62697"
)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Decimal places for output
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exactly one input quantity per invocation.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Peak (dominant) frequency in Hz
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    freq: Option<f64>,

    /// Full zero-crossing span L in seconds
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    length: Option<f64>,

    /// Half zero-crossing span in milliseconds
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    half_ms: Option<f64>,
}

impl InputArgs {
    /// The supplied quantity. The arg group guarantees exactly one is set.
    fn selected(&self) -> (Quantity, f64) {
        match (self.freq, self.length, self.half_ms) {
            (Some(f), None, None) => (Quantity::Frequency, f),
            (None, Some(l), None) => (Quantity::ZeroCrossingLength, l),
            (None, None, Some(h)) => (Quantity::HalfSpanMs, h),
            _ => unreachable!("input group admits exactly one of --freq, --length, --half-ms"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (quantity, value) = cli.input.selected();

    let span = match RickerSpan::from_quantity(quantity, value) {
        Ok(span) => span,
        Err(err) => {
            tracing::info!(%quantity, value, "conversion rejected");
            Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, err)
                .exit();
        }
    };

    let config = OutputConfig::new()
        .precision(cli.precision)
        .format(cli.format);
    print!("{}", output::render(&span, quantity, &config)?);

    Ok(())
}
