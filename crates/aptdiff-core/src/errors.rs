use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    UnknownCategory,
    MalformedLine,

    // Differencing
    /// A non-mapping value was handed to the differ where a mapping was expected
    TypeMismatch,

    // Integration/IO
    Io,
    /// The shell used to run a package query could not be started
    ExternalCommand,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownCategory => "ERR_UNKNOWN_CATEGORY",
            ExErrorKind::MalformedLine => "ERR_MALFORMED_LINE",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::ExternalCommand => "ERR_EXTERNAL_COMMAND",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context
/// (operation, category, path) needed to explain a failure on the console.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    category: Option<String>,
    path: Option<String>,
    line: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            category: None,
            path: None,
            line: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snapshot category context
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add 1-based line number context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(category) = &self.category {
            write!(f, " (category: {})", category)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised while loading, parsing and comparing snapshots
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AptDiffError {
    /// A record line has fewer fields than the category's key index needs
    #[error("Malformed {category} line {line}: expected at least {expected} fields, found {found}")]
    MalformedLine {
        category: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Category name is not one of the seven known categories
    #[error("Unknown snapshot category: {name}")]
    UnknownCategory { name: String },

    /// The differ was handed something other than a mapping
    #[error("Expected a mapping for {side}, got {found}")]
    NotAMapping { side: String, found: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<AptDiffError> for ExError {
    fn from(err: AptDiffError) -> Self {
        match err {
            AptDiffError::MalformedLine {
                category,
                line,
                expected,
                found,
            } => ExError::new(ExErrorKind::MalformedLine)
                .with_op("parse_category")
                .with_category(category)
                .with_line(line)
                .with_message(format!(
                    "expected at least {} fields, found {}",
                    expected, found
                )),

            AptDiffError::UnknownCategory { name } => ExError::new(ExErrorKind::UnknownCategory)
                .with_category(name)
                .with_message("Unknown snapshot category"),

            AptDiffError::NotAMapping { side, found } => ExError::new(ExErrorKind::TypeMismatch)
                .with_op("diff")
                .with_message(format!("Expected a mapping for {}, got {}", side, found)),

            AptDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to AptDiffError
impl From<serde_json::Error> for AptDiffError {
    fn from(err: serde_json::Error) -> Self {
        AptDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
