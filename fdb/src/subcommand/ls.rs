use std::error::Error;
use std::io::Write;

use foodb::repository::Catalog;
use foodb::sqlite_db::SQLiteDatabase;

use crate::table;

pub fn run(db: &SQLiteDatabase, mut writer: impl Write) -> Result<(), Box<dyn Error>> {
    let foods = db.foods()?;

    writeln!(writer, "{}", table::food_list(&foods))?;
    Ok(())
}
