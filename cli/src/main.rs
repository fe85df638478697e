mod app;
mod cli_options;

use clap::Parser;
use cli_options::Args;
use log::LevelFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    app::run(&args, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}
