use clap::Parser;
use gradgen::{Cli, Config, Generator};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::try_from(Cli::parse())?;
    Generator::new(config).run()
}
