//! PDF export through an external converter.
//!
//! Rasterizing HTML is not done in-process. [`PdfExporter`] hands an already
//! written HTML file to a configured command (for example
//! `wkhtmltopdf` or `chromium --headless --print-to-pdf`) and checks that the
//! target appeared. A failed export leaves the HTML file untouched.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Environment variable the CLI reads the converter command line from.
pub const PDF_COMMAND_ENV: &str = "FOLIO_PDF_COMMAND";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No PDF converter configured; pass --pdf-command or set {PDF_COMMAND_ENV}")]
    NotConfigured,

    #[error("HTML source '{0}' does not exist")]
    MissingSource(PathBuf),

    #[error("Failed to start PDF converter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF converter '{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("PDF converter finished but '{0}' was not written")]
    NoOutput(PathBuf),
}

/// An external `program [args..] <html> <pdf>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfExporter {
    program: String,
    args: Vec<String>,
}

impl PdfExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Splits a whitespace-separated command line into program and leading
    /// arguments. Quoting is not interpreted.
    pub fn from_command_line(line: &str) -> Result<Self, ExportError> {
        let mut parts = line.split_whitespace();
        let program = parts.next().ok_or(ExportError::NotConfigured)?;
        Ok(parts.fold(Self::new(program), |exporter, arg| exporter.with_arg(arg)))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn export(&self, html: &Path, pdf: &Path) -> Result<(), ExportError> {
        if !html.is_file() {
            return Err(ExportError::MissingSource(html.to_path_buf()));
        }

        log::info!("Converting {} to {} with {}", html.display(), pdf.display(), self.program);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(html)
            .arg(pdf)
            .output()
            .map_err(|source| ExportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExportError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if !pdf.is_file() {
            return Err(ExportError::NoOutput(pdf.to_path_buf()));
        }
        Ok(())
    }
}
