pub mod deprecated_callback;

pub use deprecated_callback::DeprecatedCallbackRule;
