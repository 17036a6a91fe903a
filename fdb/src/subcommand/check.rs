use std::error::Error;
use std::io::Write;

use foodb::repository::Catalog;
use foodb::sqlite_db::SQLiteDatabase;

pub fn run(db: &SQLiteDatabase, mut writer: impl Write) -> Result<(), Box<dyn Error>> {
    if db.is_ready()? {
        writeln!(writer, "Database is ready.")?;
    } else {
        writeln!(writer, "Table 'food' is missing. Run `fdb init`.")?;
    }
    Ok(())
}
