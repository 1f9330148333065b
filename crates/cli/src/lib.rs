//! curricheck CLI -- generate and analyze curriculum prerequisite files.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "curricheck",
    about = "Static analysis for course prerequisite structures"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random curriculum files
    Generate(GenerateArgs),
    /// Analyze the prerequisite structure of curriculum files
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of curricula to generate
    #[arg(long)]
    pub n_plan: u64,
    /// Number of courses per curriculum (at least 2)
    #[arg(long)]
    pub n_course: usize,
    /// Number of prerequisite edge draws per curriculum
    #[arg(long)]
    pub n_edge: usize,
    /// Number of students in the enrollment pool
    #[arg(long)]
    pub n_student: usize,
    /// Number of enrolled students per course
    #[arg(long)]
    pub n_enroll: usize,
    /// Output directory for generated curriculum files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Input directory containing curriculum JSON files
    #[arg(long)]
    pub input_dir: PathBuf,
    /// Backing store for the prerequisite relation
    #[arg(long)]
    pub representation: Representation,
    /// Cap on enumerated course orderings per file
    #[arg(long, default_value_t = 10)]
    pub orders_limit: usize,
    /// Print full analysis details per file
    #[arg(long)]
    pub verbose: bool,
    /// Output results as JSON (one object per file)
    #[arg(long)]
    pub json: bool,
}

/// The two interchangeable relation stores; both yield identical results,
/// the packed store just closes large relations faster.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Representation {
    Dense,
    Packed,
}
