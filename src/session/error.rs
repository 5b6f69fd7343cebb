use std::fmt;

/// Failures of the registration/login/session gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Registration with an email some user already has (exact match).
    DuplicateEmail(String),
    /// No user with this email and password. Deliberately does not say
    /// which half was wrong.
    InvalidCredentials,
    /// No session is stored; the caller should send the user to login.
    NotAuthenticated,
    /// A required registration field was blank.
    MissingField(&'static str),
    /// The user or session record could not be written to the store.
    StorageUnavailable,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateEmail(_) => write!(f, "User with this email already exists."),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password."),
            AuthError::NotAuthenticated => write!(f, "not authenticated"),
            AuthError::MissingField(field) => write!(f, "Please fill in the {} field.", field),
            AuthError::StorageUnavailable => {
                write!(f, "Could not save to browser storage. Please try again.")
            }
        }
    }
}

impl std::error::Error for AuthError {}
