pub mod fit;
pub mod gif;
