mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, ListKind};
use leetpick::app::App;
use leetpick::config::Config;
use leetpick::import::load_dataset;
use leetpick::storage::StateStore;
use leetpick::time::Clock;
use log::debug;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.dataset, cli.state);
    debug!(
        "dataset {}, state {}",
        config.dataset_path.display(),
        config.state_path.display()
    );

    let dataset = load_dataset(&config.dataset_path)?;
    let store = StateStore::open(&config.state_path)?;
    let app = App::new(dataset, store, Clock::System);

    let output = match cli.command {
        Command::Pick { count } => app.pick(count as usize, &mut rand::rng())?,
        Command::Status => app.status()?,
        Command::Toggle { problem_id } => app.toggle(problem_id)?.to_string(),
        Command::Remind { problem_id, days } => app.remind(problem_id, days)?.to_string(),
        Command::List {
            what: ListKind::Completed,
        } => app.list_completed()?,
        Command::List {
            what: ListKind::Reminders,
        } => app.list_reminders()?,
        Command::Reset => app.reset()?,
    };

    println!("{output}");
    Ok(())
}
