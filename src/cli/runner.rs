use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use quizcard::io::default_provider;
use quizcard::{
    BackgroundSource, CanvasFont, CardComposer, FilePreview, InputProvider, PreviewSink, RenderConfig, RunMode,
    ViewerPreview, read_table, render_sample, run_batch,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn test_background(args: &CliArgs, config: &RenderConfig) -> BackgroundSource {
    match &args.background {
        Some(path) if !args.solid_background => BackgroundSource::Image(path.clone()),
        _ => BackgroundSource::Color(config.background_color),
    }
}

fn batch_background(
    args: &CliArgs,
    config: &RenderConfig,
    provider: &dyn InputProvider,
) -> Result<BackgroundSource, AppError> {
    if args.solid_background {
        return Ok(BackgroundSource::Color(config.background_color));
    }
    args.background
        .clone()
        .or_else(|| provider.pick_background())
        .map(BackgroundSource::Image)
        .ok_or(AppError::NoBackgroundImage)
}

fn run_test(args: &CliArgs, composer: &CardComposer) -> Result<(), AppError> {
    let source = test_background(args, composer.config());
    let image = render_sample(composer, &source)?;
    match &args.preview_out {
        Some(path) => FilePreview::new(path).show(&image)?,
        None => ViewerPreview.show(&image)?,
    }
    Ok(())
}

fn run_normal<F: CanvasFont>(
    args: &CliArgs,
    composer: &CardComposer<F>,
    provider: &dyn InputProvider,
    base_dir: &Path,
) -> Result<(), AppError> {
    let table = args
        .input
        .clone()
        .or_else(|| provider.pick_table())
        .ok_or(AppError::NoInputTable)?;
    let source = batch_background(args, composer.config(), provider)?;

    let rows = read_table(&table)?;
    info!("Output directory: {:?}", base_dir);

    let report = run_batch(composer, &source, &rows, base_dir)?;
    if report.failed() > 0 {
        warn!(
            "{} of {} row(s) failed; see warnings above",
            report.failed(),
            report.processed()
        );
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    // Output root is the working directory at start-up
    let base_dir = std::env::current_dir()?;

    let config = RenderConfig::load(&args.config)?.with_overrides(&args.overrides())?;
    let composer = CardComposer::new(&config)?;
    info!("Mode: {}", args.mode);

    match args.mode {
        RunMode::Test => run_test(&args, &composer)?,
        RunMode::Normal => {
            let provider = default_provider();
            run_normal(&args, &composer, provider.as_ref(), &base_dir)?
        }
    }
    Ok(())
}
