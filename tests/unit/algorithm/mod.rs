pub mod builder;
pub mod range;
pub mod span;
