use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    Io {
        source: std::io::Error,
    },
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidConfig {
        message: String,
    },
    Json {
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { source } => write!(f, "failed to write report: {source}"),
            Self::ConfigRead { path, source } => {
                write!(f, "failed to read report config {}: {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "failed to parse report config {}: {source}",
                    path.display()
                )
            }
            Self::InvalidConfig { message } => write!(f, "invalid report config: {message}"),
            Self::Json { source } => write!(f, "failed to serialize report as json: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } | Self::ConfigRead { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::Json { source } => Some(source),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl ReportError {
    /// True when stdout went away underneath us (e.g. `e2e-stats | head`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io { source } if source.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
