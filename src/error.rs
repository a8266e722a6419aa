use thiserror::Error;

/// All errors produced outside the pure core.
///
/// The synthesizer, availability and drag logic never fail; these errors only
/// come from hosts feeding in control ids, event names or config files.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct LabError {
    pub kind: ErrorKind,
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A control id that the page does not have.
    #[error("unknown control: {0}")]
    UnknownControl(String),
    /// An event name other than `input` / `change`.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
    /// A pointer phase other than `down` / `move` / `up` / `cancel`.
    #[error("unknown pointer phase: {0}")]
    UnknownPointerPhase(String),
    /// Config file could not be decoded.
    #[error("invalid config: {0}")]
    Config(serde_json::Error),
    #[error("io error: {0}")]
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabError>;

impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Config(err),
        }
    }
}

impl From<std::io::Error> for LabError {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io(err),
        }
    }
}

/// Shorthand constructors.
impl LabError {
    pub fn unknown_control(id: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownControl(id.to_string()),
        }
    }

    pub fn unknown_event_kind(kind: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownEventKind(kind.to_string()),
        }
    }

    pub fn unknown_pointer_phase(phase: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownPointerPhase(phase.to_string()),
        }
    }
}
