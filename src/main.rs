use std::process::ExitCode;

use select_roi::gui::{EguiPreview, EguiSelector};
use select_roi::{cli, flow, logging, Error};

fn main() -> ExitCode {
    logging::initialize_logging();

    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(Error::Cli(err)) => err.exit(),
        Err(err) => return report(err),
    };

    let config = cli.config();
    let mut selector = EguiSelector::new(&config);
    let mut preview = EguiPreview::new(&config);

    match flow::run(
        &cli.input_image,
        &cli.output_json,
        &config,
        &mut selector,
        &mut preview,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

/// Usage and load failures end the run normally; anything else is a fault.
fn report(err: Error) -> ExitCode {
    if !err.is_early_exit() {
        tracing::error!(error = ?err, "selection failed");
    }
    let status = err.report(&mut std::io::stdout(), &mut std::io::stderr());
    ExitCode::from(status)
}
