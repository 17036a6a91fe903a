use std::io::stdout;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use foodb::sqlite_db::SQLiteDatabase;

use fdb::bootstrap::BootstrapConfig;
use fdb::subcommand;

/// Food database bootstrap CLI
#[derive(Debug, Parser)]
#[command(name = "fdb")]
#[command(version, about, long_about = None)]
#[command(flatten_help = true)]
struct Cli {
    /// Database file
    #[arg(long, value_name = "FILE", default_value = "foods.sqlite", global = true)]
    database: PathBuf,
    /// Defaults to `init` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rebuild the database from the schema and seed scripts
    Init(InitArgs),
    /// List foods
    Ls,
    /// Check that the database is initialized
    Check,
}

#[derive(Debug, Args)]
struct InitArgs {
    /// Schema script
    #[arg(long, value_name = "FILE", default_value = "init.sql")]
    schema: PathBuf,
    /// Seed script
    #[arg(long, value_name = "FILE", default_value = "seed.sql")]
    seed: PathBuf,
    /// Keep an existing database file instead of deleting it
    #[arg(long)]
    keep: bool,
}

impl Default for InitArgs {
    fn default() -> Self {
        InitArgs {
            schema: "init.sql".into(),
            seed: "seed.sql".into(),
            keep: false,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    match args.command {
        Some(Commands::Init(init)) => run_init(args.database, init)?,
        Some(Commands::Ls) => {
            let db = SQLiteDatabase::open_r(&args.database)?;
            subcommand::ls::run(&db, stdout())?;
        }
        Some(Commands::Check) => {
            let db = SQLiteDatabase::open_r(&args.database)?;
            subcommand::check::run(&db, stdout())?;
        }
        None => run_init(args.database, InitArgs::default())?,
    }

    Ok(())
}

fn run_init(database: PathBuf, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = BootstrapConfig {
        database_path: database,
        schema_path: args.schema,
        seed_path: args.seed,
        reset: !args.keep,
    };
    subcommand::init::run(&config, stdout())
}
