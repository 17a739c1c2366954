//! Shared logic for all commands: loading the program, configuring the
//! recognizer, and reporting a rejection.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use strelka_lib::Recognizer;
use tracing::debug;

/// Where the program text comes from.
#[derive(Debug, Default)]
pub struct SourceInput {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

impl SourceInput {
    /// Name shown in diagnostics.
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) if path.as_os_str() == "-" => "<stdin>".to_owned(),
            Some(path) => path.display().to_string(),
            None => "<source>".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub fuel: Option<u32>,
    pub recursion_limit: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("program required: pass a file, \"-\" for stdin, or -s <TEXT>")]
    Missing,

    #[error("failed to read '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),
}

/// Load the program from inline text, stdin, or a file.
pub fn load_source(input: &SourceInput) -> Result<String, InputError> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    let Some(path) = input.path.as_deref() else {
        return Err(InputError::Missing);
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(InputError::ReadStdin)?;
        return Ok(buf);
    }
    read_file(path)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), len = text.len(), "loaded program");
    Ok(text)
}

/// [`load_source`], or exit 1 with the reason on stderr.
pub fn load_source_or_exit(input: &SourceInput) -> String {
    load_source(input).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}

pub fn recognizer(source: &str, limits: Limits) -> Recognizer<'_> {
    Recognizer::new(source)
        .with_exec_fuel(limits.fuel)
        .with_recursion_limit(limits.recursion_limit)
}

/// Explains why the last attempt of `recognizer` failed.
pub fn render_failure(recognizer: &Recognizer<'_>, name: &str, color: bool) -> String {
    if let Some(err) = recognizer.fatal_error() {
        return format!("error: {err}");
    }
    match recognizer.diagnostic() {
        Some(diagnostic) => diagnostic
            .printer()
            .source(recognizer.source())
            .path(name)
            .colored(color)
            .render(),
        None => "error: rejected".to_owned(),
    }
}

/// Prints the failure of the last attempt and exits 1.
pub fn exit_with_failure(recognizer: &Recognizer<'_>, input: &SourceInput, color: bool) -> ! {
    let name = input.display_name();
    eprintln!("{}", render_failure(recognizer, &name, color));
    std::process::exit(1);
}
