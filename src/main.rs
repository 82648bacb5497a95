use clap::Parser;
use log::info;

use sticky_notes::{App, Cli, Config, FileStore, NoteService, Result};

fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new(cli.notes_dir);
    info!("Using notes directory: {}", config.notes_dir.display());

    // The only fatal condition: the storage directory cannot be created
    let store = FileStore::new(&config.notes_dir)?;
    let service = NoteService::new(store);

    let mut app = App::new(service);
    app.run()
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
