// Copyright 2026 the gfxcompat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The common error type for gfxcompat operations.

use std::fmt;

/// An error that can occur while adapting legacy drawing calls.
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Caller data was malformed, for example a raster buffer that is
    /// shorter than its declared geometry.
    InvalidInput,
    /// The legacy request was accepted but cannot be honoured by the engine.
    NotSupported,
    /// The engine could not allocate a surface or one of its objects.
    AllocationFailed,
    /// A restore or layer end had no matching save or begin.
    StackUnbalance,
    BackendError(Box<dyn std::error::Error>),
}

/// Create a new error of the given kind.
pub fn new_error(kind: ErrorKind) -> Error {
    Error(Box::new(kind))
}

impl Error {
    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::InvalidInput => write!(f, "Invalid input"),
            ErrorKind::NotSupported => write!(f, "Option not supported"),
            ErrorKind::AllocationFailed => write!(f, "Engine allocation failed"),
            ErrorKind::StackUnbalance => write!(f, "Stack unbalanced"),
            ErrorKind::BackendError(ref e) => {
                write!(f, "Backend error: ")?;
                e.fmt(f)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::BackendError(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<Box<dyn std::error::Error>> for Error {
    fn from(e: Box<dyn std::error::Error>) -> Error {
        new_error(ErrorKind::BackendError(e))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        new_error(kind)
    }
}
