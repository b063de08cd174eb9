use std::io;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

mod cli;
mod config;
mod terminal;

use cli::Cli;
use config::Config;
use terminal::Terminal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = Env::default().filter_or("CHESS_CORE_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("CHESS_CORE_CONFIG").map(PathBuf::from));
    let config = Config::load(config_path.as_deref())?.with_cli_overrides(&cli);
    info!("starting with {config:?}");

    let mut terminal = Terminal::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
