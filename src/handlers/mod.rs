pub mod blog;
pub mod ops;
