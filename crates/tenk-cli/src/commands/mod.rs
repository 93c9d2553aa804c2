//! Command implementations.

pub mod draft;
pub mod index;
pub mod parse;
pub mod serve;

pub use self::draft::execute_draft;
pub use self::index::execute_index;
pub use self::parse::execute_parse;
pub use self::serve::execute_serve;
