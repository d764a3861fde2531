use crate::core::models::AssetKind;
use std::path::PathBuf;
use thiserror::Error;

/// Location details attached to a minification failure
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub file_path: Option<PathBuf>,
    /// 1-based line of the first snippet line
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub code_snippet: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.code_snippet = Some(snippet);
        self
    }
}

#[derive(Error, Debug)]
pub enum MinicatError {
    #[error("Cannot read input directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read source file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Minification failed ({kind}): {message}")]
    Minify {
        kind: AssetKind,
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Cannot delete existing output {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MinicatError {
    /// Create a minification error without context
    pub fn minify(kind: AssetKind, message: String) -> Self {
        Self::Minify {
            kind,
            message,
            context: None,
        }
    }

    /// Create a minification error with context
    pub fn minify_with_context(kind: AssetKind, message: String, context: ErrorContext) -> Self {
        Self::Minify {
            kind,
            message,
            context: Some(context),
        }
    }

    pub fn config(message: String) -> Self {
        Self::Config(message)
    }

    /// Attach a file to a minification error that has none yet
    pub fn in_file(self, path: PathBuf) -> Self {
        match self {
            Self::Minify {
                kind,
                message,
                context,
            } => {
                let context = context.unwrap_or_default();
                let context = if context.file_path.is_none() {
                    context.with_file(path)
                } else {
                    context
                };
                Self::minify_with_context(kind, message, context)
            }
            other => other,
        }
    }

    /// Short name of the pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            Self::DirectoryRead { .. } => "list",
            Self::FileRead { .. } => "concatenate",
            Self::Minify { .. } => "minify",
            Self::Delete { .. } => "delete",
            Self::Write { .. } => "write",
            Self::Config(_) => "config",
        }
    }

    /// Format error with file context when one is known
    pub fn format_detailed(&self) -> String {
        let mut output = format!("❌ [{}] {}", self.stage(), self);

        if let Self::Minify {
            context: Some(ctx), ..
        } = self
        {
            if let Some(ref file_path) = ctx.file_path {
                output.push_str(&format!("\n📁 File: {}", file_path.display()));
            }

            if let (Some(line), Some(column)) = (ctx.line, ctx.column) {
                output.push_str(&format!("\n📍 Location: line {}, column {}", line, column));
            }

            if let Some(ref snippet) = ctx.code_snippet {
                let first = ctx.line.unwrap_or(1);
                output.push_str("\n📝 Code:\n");
                for (i, line) in snippet.lines().enumerate() {
                    let line_num = first + i;
                    let marker = if ctx.line == Some(line_num) { "→" } else { " " };
                    output.push_str(&format!("{} {:3} │ {}\n", marker, line_num, line));
                }
            }
        }

        output
    }
}

pub type Result<T> = std::result::Result<T, MinicatError>;
