pub mod excel;
pub mod nth_max;
pub mod selection;
