mod summary;

pub use summary::StructuredResultParser;
