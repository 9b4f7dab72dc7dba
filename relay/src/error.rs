use std::{error::Error as StdError, fmt, sync::Arc};
use thiserror::Error;

/// Errors raised while binding an operation or decoding one of its responses.
///
/// Both variants surface synchronously to the immediate caller. Nothing in this crate
/// retries or recovers from them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    /// A required input was absent or empty. Raised before any operation exists.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str
    },
    /// The response did not match the shape declared by the operation's field list.
    #[error("malformed response at `{field}`: {reason}")]
    MalformedResponse { field: String, reason: Malformed }
}

/// The specific way a response was malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Malformed {
    #[error("required field is null or absent")]
    MissingField,
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str
    },
    #[error("`{value}` is not a member of enum {type_name}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String
    },
    #[error("{0}")]
    Invalid(String)
}

impl BindingError {
    pub fn missing_argument(argument: &'static str) -> Self {
        BindingError::InvalidArgument {
            argument,
            reason: "value is required"
        }
    }

    pub fn empty_argument(argument: &'static str) -> Self {
        BindingError::InvalidArgument {
            argument,
            reason: "value must not be empty"
        }
    }

    pub fn malformed<F: Into<String>>(field: F, reason: Malformed) -> Self {
        BindingError::MalformedResponse {
            field: field.into(),
            reason
        }
    }

    pub fn missing_field<F: Into<String>>(field: F) -> Self {
        Self::malformed(field, Malformed::MissingField)
    }

    /// Prefixes the field path of a malformed response error with its parent field.
    pub fn within(self, parent: &str) -> Self {
        match self {
            BindingError::MalformedResponse { field, reason } => BindingError::MalformedResponse {
                field: format!("{}.{}", parent, field),
                reason
            },
            other => other
        }
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, BindingError::MalformedResponse { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BindingError::InvalidArgument { .. })
    }
}

/// An opaque, cheaply cloneable error used at the transport boundary.
///
/// Anything implementing `std::error::Error` converts into it, including [BindingError](./enum.BindingError.html).
#[derive(Clone, Debug)]
pub struct QueryError {
    inner: Arc<Box<dyn StdError + Send + Sync>>
}

impl QueryError {
    /// Returns the wrapped error if it is a [BindingError](./enum.BindingError.html).
    pub fn as_binding_error(&self) -> Option<&BindingError> {
        self.inner.downcast_ref::<BindingError>()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl<T: StdError + Send + Sync + 'static> From<T> for QueryError {
    fn from(e: T) -> Self {
        QueryError {
            inner: Arc::new(Box::new(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_field_and_reason() {
        let err = BindingError::malformed(
            "onMessageCreated.direction",
            Malformed::UnknownEnumValue {
                type_name: "Direction",
                value: "SIDEWAYS".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed response at `onMessageCreated.direction`: `SIDEWAYS` is not a member of enum Direction"
        );
        assert!(err.is_malformed_response());
    }

    #[test]
    fn within_prefixes_only_malformed_responses() {
        assert_eq!(
            BindingError::missing_field("cipherText").within("onMessageCreated"),
            BindingError::missing_field("onMessageCreated.cipherText")
        );
        assert_eq!(
            BindingError::empty_argument("connectionId").within("onMessageCreated"),
            BindingError::empty_argument("connectionId")
        );
    }

    #[test]
    fn query_error_keeps_binding_error() {
        let err: QueryError = BindingError::missing_argument("connectionId").into();
        assert_eq!(
            err.as_binding_error(),
            Some(&BindingError::missing_argument("connectionId"))
        );
        assert_eq!(
            err.to_string(),
            "invalid argument `connectionId`: value is required"
        );
    }

    #[test]
    fn query_error_from_other_errors_is_not_a_binding_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "socket closed");
        let err: QueryError = io.into();
        let cloned = err.clone();

        assert!(cloned.as_binding_error().is_none());
        assert_eq!(cloned.to_string(), "socket closed");
    }
}
