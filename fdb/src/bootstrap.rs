use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use foodb::repository::Catalog;
use foodb::script;
use foodb::sqlite_db::SQLiteDatabase;

/// File locations and reset policy for a bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Target database file, overwritten by the bootstrap.
    pub database_path: PathBuf,
    /// Schema script (DDL).
    pub schema_path: PathBuf,
    /// Seed script (DML).
    pub seed_path: PathBuf,
    /// Delete an existing database file before loading.
    pub reset: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            database_path: "foods.sqlite".into(),
            schema_path: "init.sql".into(),
            seed_path: "seed.sql".into(),
            reset: true,
        }
    }
}

/// Rebuilds the database from the schema and seed scripts.
///
/// Both scripts are read before the database file is touched, so a missing
/// script fails without mutating anything. On success the fresh database
/// holds exactly what the scripts produced, committed in one transaction,
/// and the food rows are printed to `writer` as a sanity check.
pub fn run(config: &BootstrapConfig, mut writer: impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(
        writer,
        "Loading schema from {}...",
        config.schema_path.display()
    )?;
    let schema_sql = script::load(&config.schema_path)?;

    writeln!(
        writer,
        "Loading seed data from {}...",
        config.seed_path.display()
    )?;
    let seed_sql = script::load(&config.seed_path)?;

    if config.reset && config.database_path.exists() {
        std::fs::remove_file(&config.database_path)?;
    }

    let mut db = SQLiteDatabase::open_rwc(&config.database_path)?;
    db.load_scripts(&schema_sql, &seed_sql)?;

    writeln!(writer, "\nFoods in DB:")?;
    for food in db.foods()? {
        writeln!(writer, "{}", food)?;
    }

    Ok(())
}
