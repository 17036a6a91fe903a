use tabled::settings::object::Rows;
use tabled::settings::style::Style;
use tabled::settings::themes::Colorization;
use tabled::settings::Color;
use tabled::{Table, Tabled};

use foodb::food::Food;

/// Basic function that creates a list table
fn build_table<I, T>(rows: I) -> Table
where
    I: IntoIterator<Item = T>,
    T: Tabled,
{
    Table::new(rows)
        .with(Style::sharp())
        .with(Colorization::exact([Color::BOLD], Rows::first()))
        .to_owned()
}

/// Food list table row.
#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
}

impl From<&Food> for FoodRow {
    fn from(value: &Food) -> Self {
        FoodRow {
            id: value.id,
            name: value.name.clone(),
            kind: value.kind.clone(),
        }
    }
}

/// Creates a food list table.
pub fn food_list(foods: &[Food]) -> String {
    if foods.is_empty() {
        return "No Foods".into();
    }

    let rows = foods.iter().map(FoodRow::from);
    build_table(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_list_empty() {
        assert_eq!(food_list(&[]), "No Foods");
    }

    #[test]
    fn test_food_list_has_all_rows() {
        let foods = vec![
            Food::new(1, "Apple", "Fruit"),
            Food::new(2, "Carrot", "Vegetable"),
        ];
        let table = food_list(&foods);

        assert!(table.contains("Apple"));
        assert!(table.contains("Carrot"));
        assert!(table.contains("Vegetable"));
    }
}
