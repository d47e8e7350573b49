use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    /// Window, graphics or event loop failure reported by ggez
    GameError(GameError),
    /// Preferences that can't produce a playable board
    InvalidPrefs(String),
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "{}", e),
            ErrorType::InvalidPrefs(reason) => write!(f, "invalid preferences: {}", reason),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl Error {
    pub fn invalid_prefs<S: ToString>(reason: S) -> Self {
        Self(ErrorType::InvalidPrefs(reason.to_string()), vec![])
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for t in (self.1).iter().rev() {
            write!(f, "\n in {}", t)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_innermost_last() {
    let res: Result = Err(Error::from(GameError::CustomError("no gpu".to_string())));
    let err = res
        .with_trace_step("grid_mesh")
        .with_trace_step("App::draw")
        .unwrap_err();

    let debug = format!("{:?}", err);
    assert!(debug.contains("CustomError(\"no gpu\")"), "{}", debug);
    let outer = debug.find("in App::draw").unwrap();
    let inner = debug.find("in grid_mesh").unwrap();
    assert!(outer < inner, "{}", debug);

    let display = err.to_string();
    assert!(display.contains("no gpu"), "{}", display);
    assert!(display.ends_with("in App::draw\n in grid_mesh"), "{}", display);
}

#[test]
fn test_invalid_prefs_display() {
    let err = Error::invalid_prefs("cell side must be positive").with_trace_step("start");
    assert_eq!(
        err.to_string(),
        "invalid preferences: cell side must be positive\n in start"
    );
}
