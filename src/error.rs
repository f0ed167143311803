use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
    path::PathBuf,
};
use ErrorMessage::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    DoesNotExist,
    EmptyFile,
    WrongDataType,
    WriteProtected,
    Unreadable,
    ReportFailed,
}

impl ErrorMessage {
    pub(crate) fn as_str(&self) -> &'static str {
        match *self {
            DoesNotExist => "does not exist",
            EmptyFile => "The file is empty.",
            WrongDataType => "Attempt to read the wrong data type.",
            WriteProtected => "The file or directory is write protected",
            Unreadable => "Could not read file",
            ReportFailed => "Could not write run report",
        }
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failure that ends the run. The driver turns every variant into exit status 1.
#[derive(Debug)]
pub enum FatalError {
    FileNotFound(PathBuf),
    EmptyFile(PathBuf),
    WrongDataType(PathBuf),
    WriteProtected(PathBuf),
    Unreadable(PathBuf, io::Error),
    ReportFailed(PathBuf, String),
}

impl FatalError {
    pub fn kind(&self) -> ErrorMessage {
        match self {
            FatalError::FileNotFound(_) => DoesNotExist,
            FatalError::EmptyFile(_) => EmptyFile,
            FatalError::WrongDataType(_) => WrongDataType,
            FatalError::WriteProtected(_) => WriteProtected,
            FatalError::Unreadable(..) => Unreadable,
            FatalError::ReportFailed(..) => ReportFailed,
        }
    }

    /// Empty sources and unwritable destinations are reported on stdout.
    pub fn on_stdout(&self) -> bool {
        matches!(self.kind(), EmptyFile | WriteProtected)
    }

    pub fn report(&self) {
        if self.on_stdout() {
            println!("{}", self);
        } else {
            eprintln!("{}", self);
        }
    }
}

#[cfg(test)]
impl FatalError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FatalError::FileNotFound(path)
            | FatalError::EmptyFile(path)
            | FatalError::WrongDataType(path)
            | FatalError::WriteProtected(path)
            | FatalError::Unreadable(path, _)
            | FatalError::ReportFailed(path, _) => path,
        }
    }
}

impl Display for FatalError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FatalError::FileNotFound(path) => {
                write!(f, "The file {} {}", path.display(), self.kind())
            }
            FatalError::Unreadable(path, e) => {
                write!(f, "{} {}: {}", self.kind(), path.display(), e)
            }
            FatalError::ReportFailed(path, message) => {
                write!(f, "{} {}: {}", self.kind(), path.display(), message)
            }
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl Error for FatalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FatalError::Unreadable(_, e) => Some(e),
            _ => None,
        }
    }
}
