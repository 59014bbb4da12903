// src/harness.rs
//! Drives one full question-answering run over a parsed resume

use crate::core::ollama_client::OllamaClient;
use crate::resume::parse_resume;
use crate::types::report::{AnswerRecord, Report, TestInfo};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Ten typical LinkedIn application questions, asked in this order.
pub const LINKEDIN_QUESTIONS: [&str; 10] = [
    "What is your current job title and company?",
    "How many years of experience do you have in your field?",
    "What are your top 3 technical skills?",
    "What programming languages are you proficient in?",
    "Describe your most recent work experience and key responsibilities.",
    "What is your highest level of education and field of study?",
    "Are you authorized to work in Germany without sponsorship?",
    "What is your preferred salary range?",
    "What cloud platforms have you worked with?",
    "Do you have experience with DevOps tools and practices?",
];

pub struct QaHarness {
    client: OllamaClient,
}

impl QaHarness {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    /// Run the complete test: parse the resume, probe the service, answer
    /// every question in order, optionally write the JSON report.
    ///
    /// A parse failure propagates (hard failure, non-zero exit); an
    /// unavailable service returns `Ok` after printing guidance, producing
    /// no report even when one was requested.
    pub async fn run(&self, resume_path: &Path, output: Option<&Path>) -> Result<()> {
        println!("🚀 Starting Resume Q&A Test");
        println!("📄 Resume file: {}", resume_path.display());
        println!("🤖 Using model: {}", self.client.model());
        println!("{}", "=".repeat(60));

        println!("📋 Parsing resume...");
        let resume_text = parse_resume(resume_path)
            .with_context(|| format!("Failed to parse resume: {}", resume_path.display()))?;
        println!(
            "✅ Successfully parsed resume ({} characters)",
            resume_text.chars().count()
        );

        if !self.client.is_available().await {
            println!("❌ Ollama service is not available!");
            println!("💡 Make sure Ollama is running: 'ollama serve'");
            println!(
                "💡 Make sure the model is installed: 'ollama pull {}'",
                self.client.model()
            );
            return Ok(());
        }

        println!("✅ Ollama service is available");
        println!("\n🔍 Answering LinkedIn application questions...");

        let mut results = Vec::with_capacity(LINKEDIN_QUESTIONS.len());
        for (index, question) in LINKEDIN_QUESTIONS.iter().enumerate() {
            println!(
                "\n[{}/{}] {}",
                index + 1,
                LINKEDIN_QUESTIONS.len(),
                question
            );

            let outcome = self.client.answer(&resume_text, question).await;
            if !outcome.is_answered() {
                warn!("Question {} failed: {}", index + 1, outcome);
            }

            println!("💬 Answer: {}", outcome);
            println!("{}", "-".repeat(40));

            results.push(AnswerRecord {
                question: (*question).to_string(),
                answer: outcome.to_string(),
            });
        }

        if let Some(output_path) = output {
            self.write_report(&results, resume_path, output_path)?;
            println!("\n💾 Results saved to: {}", output_path.display());
        }

        println!("\n✅ Test completed successfully!");
        Ok(())
    }

    fn write_report(
        &self,
        results: &[AnswerRecord],
        resume_path: &Path,
        output_path: &Path,
    ) -> Result<()> {
        let report = Report {
            test_info: TestInfo {
                resume_file: resume_path.display().to_string(),
                model: self.client.model().to_string(),
                total_questions: results.len(),
            },
            results: results.to_vec(),
        };

        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

        info!("Report written to {}", output_path.display());
        Ok(())
    }
}
