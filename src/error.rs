/// Broad failure category. Each kind maps to a distinct process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Sample size or iteration count below 1, or empty input where data is required.
    InvalidConfiguration,
    /// Strict mode policy and no single most-frequent estimate.
    NoUniqueMode,
    /// An output file (chart, workbook, JSON) could not be written.
    FileWrite,
    /// The workbook exporter was handed no usable chart image.
    MissingChartArtifact,
    /// Drawing or image encoding failed.
    Render,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidConfiguration => 2,
            ErrorKind::NoUniqueMode => 3,
            ErrorKind::FileWrite => 4,
            ErrorKind::MissingChartArtifact => 5,
            ErrorKind::Render => 6,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, message)
    }

    pub fn file_write(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FileWrite, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code())
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
