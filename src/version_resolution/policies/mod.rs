mod tie_break;
mod version_ordering;

pub use tie_break::{LabelChoice, TieBreakPolicy};
pub use version_ordering::VersionOrdering;
