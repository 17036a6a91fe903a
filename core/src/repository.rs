use crate::food::Food;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// define read/verification methods
pub trait Catalog {
    /// Checks whether the repository is ready
    fn is_ready(&self) -> Result<bool>;

    /// Gets all food rows in insertion order.
    fn foods(&self) -> Result<Vec<Food>>;
}
