//! Path expressions: compiler and evaluator

pub mod cache;
pub mod expression;
pub mod predicate;
pub mod segment;

pub use cache::PathCache;
pub use expression::{parse_number, XPathExpression, PATH_SEPARATOR};
pub use predicate::{Equality, Predicate};
pub use segment::{Segment, TEXT_STEP};
