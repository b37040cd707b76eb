pub mod probe;
pub mod table;

pub use probe::{DuProbe, SizeProbe};
pub use table::{DirectoryEntry, SizeTable};
