mod cli;

use cli::Args;
use pom_validator::adapters::outbound::console::StderrProgressReporter;
use pom_validator::adapters::outbound::filesystem::FileSystemManifestReader;
use pom_validator::adapters::outbound::i18n::{MessageCatalog, DEFAULT_LOCALE};
use pom_validator::application::dto::{OutputFormat, ValidationRequest};
use pom_validator::application::factories::{FormatterFactory, PresenterFactory};
use pom_validator::application::use_cases::ValidateSubmissionsUseCase;
use pom_validator::config::{self, ConfigFile};
use pom_validator::ports::inbound::ManifestValidationPort;
use pom_validator::shared::error::{ExitCode, ValidatorError};
use pom_validator::shared::security::validate_regular_file;
use pom_validator::shared::Result;
use std::io::IsTerminal;
use std::path::Path;
use std::process;

/// Settings after merging CLI flags over the config file
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    locale: String,
    accept_submission_tests: bool,
    colored: bool,
}

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    validate_reference_path(&args.reference)?;

    let settings = resolve_settings(&args, &config, std::io::stdout().is_terminal());

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemManifestReader::new();
    let message_catalog = MessageCatalog::for_locale(&settings.locale)?;
    if message_catalog.is_fallback_for(&settings.locale) {
        eprintln!(
            "⚠️  Warning: No messages available for locale '{}', using '{}'.",
            settings.locale,
            message_catalog.locale()
        );
    }
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        ValidateSubmissionsUseCase::new(manifest_reader, message_catalog, progress_reporter);

    let request = ValidationRequest::builder()
        .reference_path(args.reference.clone())
        .submission_paths(args.submissions.iter().cloned())
        .accept_submission_tests(settings.accept_submission_tests)
        .verbose(args.verbose)
        .build()?;

    let response = use_case.validate_submissions(&request);

    let formatter = FormatterFactory::create(settings.format, settings.colored);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::for_output(args.output);
    presenter.present(&formatted_output)?;

    Ok(if response.all_valid() {
        ExitCode::Success
    } else {
        ExitCode::ValidationFailed
    })
}

/// Explicit `--config` must load; otherwise the current directory is searched
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// CLI flags win over config values; colour is only used on a terminal
fn resolve_settings(args: &Args, config: &ConfigFile, stdout_is_terminal: bool) -> Settings {
    let format = args
        .format
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Text);

    let locale = args
        .locale
        .clone()
        .or_else(|| config.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let accept_submission_tests = if args.no_accept_submission_tests {
        false
    } else {
        args.accept_submission_tests || config.accept_submission_tests.unwrap_or(false)
    };

    let colored = !args.no_color
        && config.color.unwrap_or(true)
        && args.output.is_none()
        && stdout_is_terminal;

    Settings {
        format,
        locale,
        accept_submission_tests,
        colored,
    }
}

/// The reference is the instructor's file: a bad path is a usage error,
/// not a finding against the submissions.
fn validate_reference_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ValidatorError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: "The reference pom.xml does not exist. Check the --reference path."
                .to_string(),
        }
        .into());
    }

    validate_regular_file(path, "reference pom.xml")?;
    Ok(())
}
