pub mod category;
pub mod errors;
