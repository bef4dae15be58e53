pub mod data_item;
pub mod logic;

pub use data_item::DataItem;
pub use logic::{logic_dataset, LOGIC_FUNCTION_NAMES};
