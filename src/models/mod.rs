pub mod platform;
pub mod problem;
pub mod submission;

pub use platform::{Classification, Platform};
pub use problem::{Problem, ProblemPayload, TestCase, TestPayload};
pub use submission::{SubmissionResponse, SubmitPayload};
