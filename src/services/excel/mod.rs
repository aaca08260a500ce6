pub mod reader;
pub mod types;

pub use reader::{numeric_cells, open_first_sheet, FirstSheet};
pub use types::{FractionalPolicy, NumericCell};
