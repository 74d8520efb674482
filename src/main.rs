//! Rebate calculation runner

use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use rebates::{
    fixtures::Fixture,
    observability::{self, LoggingConfig},
    report::CalculationReport,
    requests::CalculateRebateRequest,
    service::RebateService,
};
use rust_decimal::Decimal;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "rebates", about = "Rebate calculation runner", long_about = None)]
struct Cli {
    /// Rebate identifier
    #[arg(long)]
    rebate: String,

    /// Product identifier
    #[arg(long)]
    product: String,

    /// Quantity purchased
    #[arg(long, allow_negative_numbers = true)]
    volume: Decimal,

    /// YAML catalog of rebates and products
    #[arg(long, env = "REBATES_CATALOG", default_value = "fixtures/catalog.yml")]
    catalog: PathBuf,

    #[command(flatten)]
    logging: LoggingConfig,
}

#[expect(clippy::print_stderr, reason = "Errors are reported on stderr")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = observability::init_subscriber(&cli.logging) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let fixture = Fixture::from_path(&cli.catalog)
        .map_err(|error| format!("failed to load catalog {}: {error}", cli.catalog.display()))?;

    let currency = fixture.currency();
    let (rebates, products) = fixture.into_stores();

    info!(
        rebates = rebates.len(),
        products = products.len(),
        "loaded catalog"
    );

    let service = RebateService::new(rebates, products);
    let request = CalculateRebateRequest::new(cli.rebate, cli.product, cli.volume);

    let result = service
        .calculate(&request)
        .map_err(|error| format!("failed to calculate rebate: {error}"))?;

    CalculationReport::new(&request, result, currency)
        .write_to(io::stdout().lock())
        .map_err(|error| error.to_string())?;

    Ok(())
}
