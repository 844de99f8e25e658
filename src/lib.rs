pub mod permissions;
pub mod structure;
pub mod writer;

// Re-export commonly used types
pub use permissions::mark_executable;
pub use structure::{repo_structure, StructureTable, EXECUTABLES, SERVICE_NAMES};
pub use writer::{write_all, WriteSummary};
