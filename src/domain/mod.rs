//! Domain logic - pure release rules independent of git operations

pub mod commit;
pub mod prerelease;
pub mod project;
pub mod tag;
pub mod version;

pub use commit::Commit;
pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::Tag;
pub use version::{LocalSegment, Version};
