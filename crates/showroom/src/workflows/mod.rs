pub mod comparison;
pub mod financing;
