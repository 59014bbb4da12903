pub mod cli;
pub mod core;
pub mod harness;
pub mod resume;
pub mod types;
pub mod utils;

pub use crate::core::{AnswerOutcome, HarnessConfig, OllamaClient};
pub use harness::{QaHarness, LINKEDIN_QUESTIONS};
pub use resume::{parse_resume, ResumeError};
