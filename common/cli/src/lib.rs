pub mod args;
pub mod parsers;
#[cfg(feature = "tracing")]
pub mod tracing;
