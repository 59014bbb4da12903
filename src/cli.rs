// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-qa")]
#[command(about = "Test resume question answering against a local Ollama service")]
pub struct Cli {
    /// Path to resume file (YAML, JSON, PDF, or TXT)
    pub resume_file: PathBuf,

    /// Output file for results (JSON)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ollama model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Ollama service
    #[arg(long)]
    pub base_url: Option<String>,
}
