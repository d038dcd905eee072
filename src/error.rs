use thiserror::Error;

use crate::models::Location;

/// Why a shortest-route query produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The label was never seen as an edge endpoint.
    #[error("unknown location '{0}'")]
    UnknownLocation(Location),

    /// Both locations are known but no chain of links connects them.
    #[error("no path found from {from} to {to}")]
    NoPath { from: Location, to: Location },
}

impl RouteError {
    /// `true` for every variant: each one stands for the "not found" answer.
    ///
    /// Callers that do not care why a query failed can branch on this alone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownLocation(_) | Self::NoPath { .. })
    }

    /// The unknown label, if this error is [`RouteError::UnknownLocation`].
    pub fn unknown_location(&self) -> Option<&Location> {
        match self {
            Self::UnknownLocation(location) => Some(location),
            Self::NoPath { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
