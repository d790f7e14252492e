use clap::Parser;
use pom_validator::application::dto::OutputFormat;
use std::path::PathBuf;

/// Validate student pom.xml files against the assignment's reference pom.xml
#[derive(Parser, Debug)]
#[command(name = "pom-validator")]
#[command(version)]
#[command(
    about = "Validate student pom.xml files against the assignment's reference pom.xml",
    long_about = None
)]
pub struct Args {
    /// Reference (assignment) pom.xml
    #[arg(short, long, value_name = "POM")]
    pub reference: PathBuf,

    /// Submission pom.xml files to validate
    #[arg(value_name = "SUBMISSION", required = true)]
    pub submissions: Vec<PathBuf>,

    /// Submissions bring their own tests: the reference's test dependencies
    /// (JUnit, TestNG, Mockito, Hamcrest, test scope) become mandatory
    #[arg(short = 't', long)]
    pub accept_submission_tests: bool,

    /// Keep the reference's test dependencies optional, even if the config
    /// file accepts submission tests
    #[arg(long, conflicts_with = "accept_submission_tests")]
    pub no_accept_submission_tests: bool,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language of the diagnostic headers (e.g. en, pt-PT)
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Configuration file (defaults to ./pom-validator.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show why a manifest could not be parsed
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
