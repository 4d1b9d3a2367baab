pub mod chain;
pub mod triangle;
