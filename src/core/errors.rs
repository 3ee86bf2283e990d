use std::fmt;

// Structured outcomes for operations the UI deliberately keeps silent. The
// caller receives the reason and decides whether to surface anything.
#[derive(Debug)]
pub enum AppError {
    AuthRequired,
    UnknownUsername,
    WrongPassword,
    EmptyPassword,
    UsernameTaken,
    CaptionTooLong,
    BioTooLong,
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthRequired => write!(f, "Authentication required"),
            AppError::UnknownUsername => write!(f, "Unknown username"),
            AppError::WrongPassword => write!(f, "Wrong password"),
            AppError::EmptyPassword => write!(f, "Empty password"),
            AppError::UsernameTaken => write!(f, "Username exists"),
            AppError::CaptionTooLong => write!(f, "Caption too long"),
            AppError::BioTooLong => write!(f, "Bio too long"),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
