//! Typed rejection shapes for the transport-facing collaborator.
//!
//! A web layer turns a [`BookingError`] into a status code and a JSON body
//! carrying a top-level message and, where a field is implicated, a
//! per-field error map keyed `startDate` / `endDate`. Those shapes are the
//! whole contract -- no framework types appear here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::BookingError;

/// JSON body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionBody {
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<&'static str, String>,
}

/// A rejected request: HTTP status plus serializable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub body: RejectionBody,
}

impl From<&BookingError> for Rejection {
    fn from(err: &BookingError) -> Self {
        let status = match err {
            BookingError::StartNotInFuture
            | BookingError::EndNotAfterStart
            | BookingError::BookingOver
            | BookingError::BookingStarted => 400,
            BookingError::Conflict(_) | BookingError::Forbidden => 403,
            BookingError::NotFound => 404,
        };

        let mut errors = BTreeMap::new();
        let message = match err {
            BookingError::Conflict(verdict) => {
                for (field, reason) in verdict.reasons() {
                    errors.insert(field, reason.to_string());
                }
                err.to_string()
            }
            // Field-level validation failures keep the generic top-level
            // message; the detail lives in the error map.
            BookingError::StartNotInFuture => {
                errors.insert("startDate", err.to_string());
                "Bad Request".to_string()
            }
            BookingError::EndNotAfterStart => {
                errors.insert("endDate", err.to_string());
                "Bad Request".to_string()
            }
            _ => err.to_string(),
        };

        Rejection {
            status,
            body: RejectionBody { message, errors },
        }
    }
}
