//! emprec CLI
//!
//! Interactive employee record manager, plus one-shot `list` and `add`.

use std::io;

use clap::{Parser, Subcommand};
use emprec::config::DEFAULT_DATA_FILE;
use emprec::shell::{default_employees, Shell};
use emprec::{Config, Record, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// emprec
#[derive(Parser, Debug)]
#[command(name = "emprec")]
#[command(about = "Employee record manager backed by a CSV file")]
#[command(version)]
struct Args {
    /// Record file
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: String,

    /// Don't merge the built-in employees on startup
    #[arg(long)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (default)
    Shell,

    /// Print all employees as a table
    List,

    /// Add one employee with the next free id
    Add {
        /// Employee name
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        age: String,

        /// Date of birth (dd/mm/yyyy)
        #[arg(long, default_value = "")]
        dob: String,

        #[arg(long, default_value = "")]
        salary: String,

        /// Joining date (dd/mm/yyyy)
        #[arg(long, default_value = "")]
        joining_date: String,
    },
}

fn main() {
    // Initialize tracing/logging; stdout is reserved for the shell
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> emprec::Result<()> {
    let config = Config::builder()
        .data_file(&args.file)
        .seed_defaults(!args.no_seed)
        .build();
    let store = RecordStore::open(&config)?;

    tracing::debug!("emprec v{}", emprec::VERSION);
    tracing::debug!("Record file: {}", store.path().display());

    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout());

    if config.seed_defaults {
        shell.seed(&default_employees())?;
    }

    match args.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell.run(),
        Commands::List => shell.view_all_employees(),
        Commands::Add {
            name,
            phone,
            email,
            age,
            dob,
            salary,
            joining_date,
        } => {
            let store = shell.store();
            let record = Record {
                id: store.next_id()?,
                name,
                phone,
                email,
                age,
                dob,
                salary,
                joining_date,
            };
            let outcome = store.insert(std::slice::from_ref(&record))?;
            if outcome.is_noop() {
                println!("No new employees to add.");
            } else {
                println!(
                    "Employee {} added successfully with ID {}.",
                    record.name, record.id
                );
            }
            Ok(())
        }
    }
}
