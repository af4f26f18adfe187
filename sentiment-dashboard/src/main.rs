mod charts;
mod progress;
mod utils;

use {
    std::process::ExitCode,
    anyhow::{Context, Result},
    tracing::{info, error},
    sentiment_core::{
        config::Config,
        loader::LoadOptions,
        pipeline::{analyze_file, build_scorer},
        report::{Overview, Summary},
    },
    crate::{
        charts::render_charts,
        progress::Progress,
        utils::init_logging,
    },
};

fn main() -> ExitCode {
    init_logging();

    info!("social media comments sentiment dashboard");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("analysis failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load();
    let options = LoadOptions::from_config(&config.input, &config.columns);
    let scorer = build_scorer(&config.scorer)?;

    let mut progress = Progress::new("classifying comments".to_owned());
    let analysis = analyze_file(&config.input.path(), &options, &scorer, |_| {
        progress.update();
    })?;
    progress.finish();

    print!("{}", Overview(&analysis.aggregates));

    let charts = config.charts();
    if charts.enabled {
        render_charts(&charts.output_dir(), &analysis.aggregates).context("failed to render charts")?;
    } else {
        info!("chart rendering disabled in config");
    }

    print!("{}", Summary(&analysis.aggregates));

    Ok(())
}
