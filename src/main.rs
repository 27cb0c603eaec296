use std::{io, path::PathBuf, process};

use clap::Parser;
use directory::{
    consts::consts::{DEFAULT_ENDPOINT, DEFAULT_NATIONALITY, DEFAULT_RESULTS},
    directory::{directory::Directory, options::DirectoryOptions},
    source::{file::FileSource, network::NetworkSource, PeopleSource},
};

use crate::clients::terminal::{load_or_report, Terminal};

mod clients;

/// 📇 Staff directory, browse a fetched list of people from the terminal
///
/// Type `help` once loaded to see the available commands.
#[derive(Parser, Debug)]
struct Cli {
    /// Base URL of the people API
    #[clap(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Number of people to request
    #[clap(short, long, default_value_t = DEFAULT_RESULTS)]
    results: usize,

    /// Nationality filter passed to the API
    #[clap(short, long, default_value = DEFAULT_NATIONALITY)]
    nat: String,

    /// Read a saved API response instead of fetching. Note: Does not support shell paths, e.g. ~
    #[clap(long)]
    from_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = DirectoryOptions::default()
        .set_endpoint(args.endpoint)
        .set_results(args.results)
        .set_nationality(args.nat);

    let source: Box<dyn PeopleSource> = match args.from_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(NetworkSource::new(&options)),
    };

    let mut directory = Directory::new();
    let events = directory.subscribe();

    if !load_or_report(&mut directory, source.as_ref(), &mut io::stderr())? {
        // No retry, the user reloads
        process::exit(1);
    }

    let mut terminal = Terminal::new(directory, events, io::stdin().lock(), io::stdout());

    terminal.run()
}
