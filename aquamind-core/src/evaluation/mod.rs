pub mod builder;
pub mod comparator;
pub mod engine;
pub mod result;

pub use builder::EvaluatorBuilder;
pub use comparator::{compare_to_range, RangeFit};
pub use engine::StatusEvaluator;
pub use result::{AlertEntry, Severity, StatusResult};
