use anyhow::Result;
use clap::Parser;
use pizza_order_cli::{
    cli::{Args, CliApp},
    utils::{logging, Config},
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = Config::from_env(args.config.as_deref())?;

    let level = if args.verbose { "debug" } else { config.log_level.as_str() };
    logging::init(level, !args.no_color)?;

    tracing::info!("🍕 Pizza CLI starting in {} environment", config.environment);

    CliApp::new(config).run(args)?;

    tracing::info!("🍕 Pizza CLI stopped");
    Ok(())
}
