//! Generated header model, emission, and output writing.

mod document;
mod emit;
mod write;

pub use document::GeneratedDocument;
pub use emit::emit;
pub use write::write_header;
