//! Validate the `wrap.config.json` file and report diagnostics.

use std::fs;
use std::path::Path;

use crate::config::{AppConfig, CONFIG_FILE_NAME};
use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Diagnostic {
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, file: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { file: file.into(), message: message.into(), severity: Severity::Error };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { file: file.into(), message: message.into(), severity: Severity::Warning };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.file, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.file, diagnostic.message);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Execute the doctor command against the config in `dir`.
pub fn execute(dir: &Path, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Err(AppError::ConfigMissing);
    }

    let mut diagnostics = Diagnostics::default();

    let content = fs::read_to_string(&path)?;
    match serde_json::from_str::<AppConfig>(&content) {
        Ok(config) => {
            for (field, reason) in config.field_issues() {
                diagnostics.push_error(CONFIG_FILE_NAME, format!("{field}: {reason}"));
            }
            web_dir_checks(dir, &config, &mut diagnostics);
        }
        Err(err) => diagnostics.push_error(CONFIG_FILE_NAME, err.to_string()),
    }

    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(DoctorOutcome { errors, warnings, exit_code })
}

/// The web asset directory is produced by a separate front-end build,
/// so its absence is a warning rather than an error.
fn web_dir_checks(dir: &Path, config: &AppConfig, diagnostics: &mut Diagnostics) {
    if config.field_issues().iter().any(|(field, _)| *field == "webDir") {
        return;
    }

    let target = dir.join(&config.web_dir);
    if !target.exists() {
        diagnostics.push_warning(
            CONFIG_FILE_NAME,
            format!("web asset directory '{}' does not exist yet", config.web_dir),
        );
    } else if !target.is_dir() {
        diagnostics.push_error(
            CONFIG_FILE_NAME,
            format!("web asset directory '{}' is not a directory", config.web_dir),
        );
    }
}
