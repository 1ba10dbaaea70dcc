use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    StructuralConflict,
    Decode,
    Deserialize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Encode,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub stage: ErrorStage,
    pub message: String,
    /// Field name whose path triggered the error, when known.
    pub path: Option<String>,
}

impl Error {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::StructuralConflict,
            stage: ErrorStage::Unknown,
            message: message.into(),
            path: None,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Decode,
            stage: ErrorStage::Decode,
            message: message.into(),
            path: None,
        }
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Deserialize,
            stage: ErrorStage::Decode,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_stage(mut self, stage: ErrorStage) -> Self {
        self.stage = stage;
        self
    }

    /// Attach the offending field name and prefix it to the message.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.message = format!("{path}: {}", self.message);
        self.path = Some(path);
        self
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::StructuralConflict
    }
}
