//! Comparison module - what-if sessions and snapshot-based diffing.

mod sections;
mod session;
mod status;
mod summary;

pub use sections::{modified_fields, InputSection, ModifiedSections};
pub use session::ComparisonSession;
pub use status::ComparisonStatus;
pub use summary::ScenarioDelta;
