//! Reference data the evaluator consults. Both catalogs are immutable once
//! built and are handed to the evaluator explicitly.

pub mod ranges;
pub mod recommendations;

pub use ranges::RangeCatalog;
pub use recommendations::{Advice, AdviceOverrides, RecommendationCatalog};
