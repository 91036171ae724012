use std::process::ExitCode;

use anyhow::Context;
use imgfilter_rs::cli::{self, CliError, Invocation, FAILURE_EXIT_CODE};
use imgfilter_rs::image_pipeline::{FilterConfig, FilterPipeline};
use imgfilter_rs::logger;

use tracing::{error, info};

fn main() -> ExitCode {
    logger::init();

    let invocation = match cli::parse_args(std::env::args()) {
        Ok(invocation) => invocation,
        Err(CliError::MissingArguments { program }) => {
            print!("{}", cli::usage(&program));
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(FAILURE_EXIT_CODE);
        }
    };

    match run(&invocation) {
        Ok(()) => {
            println!("Success! Wrote {}", invocation.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Filter run failed: {:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}

fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let config = FilterConfig::builder()
        .threads(cli::threads_from_env())
        .build();
    let pipeline = FilterPipeline::new(config);

    info!("Filter pipeline initialized");
    info!("Output: {:?}", pipeline.config().output_format);
    info!("Workers: {}", pipeline.config().worker_count());

    let timings = pipeline
        .convert_file_with_timings(&invocation.input, &invocation.output, invocation.filter)
        .with_context(|| {
            format!(
                "cannot apply {} to {}",
                invocation.filter,
                invocation.input.display()
            )
        })?;
    timings.log_summary();

    Ok(())
}
