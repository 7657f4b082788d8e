pub mod context;
pub mod diagnostic;
