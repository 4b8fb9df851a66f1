pub mod argument;
pub mod problem;
pub mod report;
pub mod store;

pub use argument::{Argument, CallShape};
pub use problem::{ProblemDescriptor, TestCase};
pub use report::{FailureRecord, Outcome, ProblemReport, RunReport};
pub use store::{load_store, ParseFailure, ProblemStore};
