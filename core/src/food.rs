use std::fmt;

/// A row of the `food` table.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Food {
    /// Identifier
    pub id: i64,
    /// Food name
    pub name: String,
    /// Food category, stored in the `type` column
    pub kind: String,
}

impl Food {
    /// Creates a new food row.
    pub fn new(id: i64, name: &str, kind: &str) -> Self {
        Food {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl fmt::Display for Food {
    /// Renders the row as a positional tuple, e.g. `(1, 'Apple', 'Fruit')`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}', '{}')", self.id, self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_tuple() {
        let food = Food::new(1, "Apple", "Fruit");
        assert_eq!(food.to_string(), "(1, 'Apple', 'Fruit')");
    }

    #[test]
    fn test_new() {
        let food = Food::new(2, "Carrot", "Vegetable");
        assert_eq!(food.id, 2);
        assert_eq!(food.name, "Carrot");
        assert_eq!(food.kind, "Vegetable");
    }
}
