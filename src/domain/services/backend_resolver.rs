//! Backend resolution
//!
//! Picks the single user backend a cleanup run operates on. With several
//! backends registered the caller has to name one; names are compared
//! case-insensitively and must match exactly one backend.

use thiserror::Error;

use crate::domain::ports::{backend_name, UserBackend};

/// Why no backend could be selected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no user backend is configured")]
    NoBackendsRegistered,

    #[error("user backend '{requested}' not found")]
    NoneMatched {
        requested: String,
        available: Vec<String>,
    },

    #[error(
        "multiple user backends matching '{requested}' found ({matches}), this is currently not supported"
    )]
    Ambiguous {
        requested: String,
        matches: usize,
        available: Vec<String>,
    },

    #[error(
        "more than one user backend is configured, please select one of the following backends with the `--user-backend` option"
    )]
    UnspecifiedWithMultipleAvailable { available: Vec<String> },
}

impl ResolutionError {
    /// Names of all registered backends, for remediation output
    pub fn available(&self) -> &[String] {
        match self {
            ResolutionError::NoBackendsRegistered => &[],
            ResolutionError::NoneMatched { available, .. }
            | ResolutionError::Ambiguous { available, .. }
            | ResolutionError::UnspecifiedWithMultipleAvailable { available } => available,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionError::NoBackendsRegistered => "no-backends",
            ResolutionError::NoneMatched { .. } => "none-matched",
            ResolutionError::Ambiguous { .. } => "ambiguous",
            ResolutionError::UnspecifiedWithMultipleAvailable { .. } => {
                "unspecified-with-multiple-available"
            }
        }
    }
}

/// Select the backend a cleanup run should use.
///
/// A single registered backend is always selected, whatever was requested.
pub fn resolve_backend<'a>(
    requested: Option<&str>,
    registered: &'a [Box<dyn UserBackend>],
) -> Result<&'a dyn UserBackend, ResolutionError> {
    match registered {
        [] => return Err(ResolutionError::NoBackendsRegistered),
        [only] => return Ok(only.as_ref()),
        _ => {}
    }

    let backends = || registered.iter().map(|b| b.as_ref());
    let available = || {
        backends()
            .map(|b| backend_name(b).to_string())
            .collect::<Vec<_>>()
    };

    let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) else {
        return Err(ResolutionError::UnspecifiedWithMultipleAvailable {
            available: available(),
        });
    };

    let wanted = requested.to_lowercase();
    let mut matching = backends().filter(|b| backend_name(*b).to_lowercase() == wanted);

    match (matching.next(), matching.next()) {
        (Some(backend), None) => Ok(backend),
        (None, _) => Err(ResolutionError::NoneMatched {
            requested: requested.to_string(),
            available: available(),
        }),
        (Some(_), Some(_)) => Err(ResolutionError::Ambiguous {
            requested: requested.to_string(),
            matches: 2 + matching.count(),
            available: available(),
        }),
    }
}
