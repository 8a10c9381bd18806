pub mod classifier;
pub mod language;
pub mod mailbox;
pub mod naming;
pub mod storage;

pub use mailbox::SubmissionMailbox;
