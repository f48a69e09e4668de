//! Domain logic - pure release rules independent of external commands

pub mod branch;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use tag::{next_tag, version_from_tag, TagPattern};
pub use version::BumpType;
