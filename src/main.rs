use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use domain::errors::InputError;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        let code = err
            .downcast_ref::<InputError>()
            .map(InputError::code)
            .unwrap_or("INTERNAL");
        services::output::print_error(cli.json, code, &format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = services::config::load_config()?;
    let settings = services::config::Settings::resolve(cli, &config)?;
    commands::dispatch(cli, &settings)
}
