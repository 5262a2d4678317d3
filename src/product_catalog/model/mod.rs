pub mod product;

pub use product::ProductRow;
