use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use fairvalue::data::DataDirectory;
use fairvalue::demo::run_demo;
use fairvalue::prompt::Prompter;
use fairvalue::util::Palette;
use fairvalue::{App, Exit, init_logging, open_session};
use fairvalue_core::ModelKind;

#[derive(Parser, Debug)]
#[command(name = "fairvalue")]
#[command(about = "Price a stock position from your own assumptions, one estimate at a time")]
struct Args {
    /// Path to the data directory (default: ~/.fairvalue/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Valuation model: consensus or interview (default from config.yaml)
    #[arg(short, long)]
    model: Option<ModelKind>,

    /// Print a non-interactive walkthrough and exit
    #[arg(long)]
    demo: bool,

    /// Ignore any saved answers for this model
    #[arg(long)]
    fresh: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let storage = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    let log_path = init_logging(storage.root(), &args.log_level)?;

    let config = storage.load_config().wrap_err("Failed to load config.yaml")?;
    let kind = args.model.unwrap_or(config.default_model);
    let model = kind.model().with_market_price(config.market_price());
    let palette = Palette::detect();

    if args.demo {
        return run_demo(model, &mut io::stdout().lock(), palette, config.position_millions);
    }

    let session = open_session(&storage, model, args.fresh)
        .inspect_err(|err| tracing::error!(error = %err, "Failed to load saved answers"))
        .wrap_err_with(|| {
            format!(
                "Failed to load saved answers (details in {}; run with --fresh to start over)",
                log_path.display()
            )
        })?;

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), palette);
    let mut app = App::new(session, storage, config.position_millions, prompter);
    let exit = app.run()?;

    match &exit {
        Exit::Saved(path) => tracing::info!(path = %path.display(), "Application shutting down"),
        Exit::Quit | Exit::EndOfInput => tracing::info!(?exit, "Application shutting down"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_flag_uses_model_names() {
        let args = Args::try_parse_from(["fairvalue", "--model", "ceo"]).unwrap();
        assert_eq!(args.model, Some(ModelKind::Interview));

        let args = Args::try_parse_from(["fairvalue", "-m", "Consensus"]).unwrap();
        assert_eq!(args.model, Some(ModelKind::Consensus));

        assert!(Args::try_parse_from(["fairvalue", "--model", "dcf"]).is_err());
        assert_eq!(Args::try_parse_from(["fairvalue"]).unwrap().model, None);
    }
}
