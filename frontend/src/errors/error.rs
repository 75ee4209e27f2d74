use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

impl std::error::Error for Error {}
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind, self.context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    /// config file is missing a value or malformed
    Config,
    Io,
    Internal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "Not Found"),
            ErrorKind::Config => write!(f, "Config Error"),
            ErrorKind::Io => write!(f, "Io Error"),
            ErrorKind::Internal => write!(f, "Internal Error"),
        }
    }
}

impl From<leptos::error::Error> for Error {
    fn from(value: leptos::error::Error) -> Self {
        match value.downcast_ref::<Error>() {
            Some(err) => err.clone(),
            None => Self::new(ErrorKind::Internal, value.to_string()),
        }
    }
}

impl From<leptos::ServerFnError> for Error {
    fn from(value: leptos::ServerFnError) -> Self {
        Self::new(ErrorKind::Internal, value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, value.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self::new(ErrorKind::Config, value.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(value: toml::ser::Error) -> Self {
        Self::new(ErrorKind::Config, value.to_string())
    }
}

pub trait Context {
    type Output;
    fn context(self, c: impl AsRef<str>) -> Self::Output;
}

impl<T, E> Context for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Result<T>;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        self.map_err(|err| {
            let mut err: Error = err.into();
            err.context.push_str("\n  >");
            err.context.push_str(c.as_ref());
            err
        })
    }
}
