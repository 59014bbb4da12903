use serde::{Deserialize, Serialize};

// ===== Report Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestInfo {
    pub resume_file: String,
    pub model: String,
    pub total_questions: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub test_info: TestInfo,
    pub results: Vec<AnswerRecord>,
}
