//! Strongly typed GraphQL operation bindings for the relay messaging service.
//!
//! # Getting Started
//!
//! Every operation the client knows about lives in a generated module (see the
//! `relay-queries` crate). These contain a zero-size type such as `OnMessageCreated` that
//! implements [GraphQLQuery](./trait.GraphQLQuery.html), as well as a submodule containing
//! the query document, the `Variables`, any enums, the `ResponseData` type and the nested
//! output types, each with a static field list.
//!
//! ```
//! use relay::Operation;
//! use relay_queries::on_message_created::{Direction, Variables};
//! use relay_queries::OnMessageCreated;
//! use serde_json::json;
//!
//! let variables = Variables::new("c1", Direction::Inbound).unwrap();
//! let operation = Operation::<OnMessageCreated>::new(variables);
//! assert_eq!(operation.name(), "OnMessageCreated");
//! assert_eq!(
//!     serde_json::Value::Object(operation.serialize_variables()),
//!     json!({ "connectionId": "c1", "direction": "INBOUND" })
//! );
//!
//! let data = operation.decode_value(&json!({ "onMessageCreated": null })).unwrap();
//! assert!(data.on_message_created.is_none());
//! ```
//!
//! # Binding
//!
//! The binding is deliberately small. It produces the outbound request (operation name,
//! content hash, query document and variables) and decodes inbound messages into immutable
//! values. Sending, retrying and keeping subscriptions alive is left to the transport.
//!
//! Decoding goes through the [ResponseReader](./reader/trait.ResponseReader.html) trait, so a
//! transport with its own message representation only has to implement three methods.
//! [JsonResponseReader](./reader/struct.JsonResponseReader.html) covers the common JSON case.
//!
//! # Features
//!
//! * `subscriptions` **(default)** - Include the [subscription](./subscription/index.html)
//! registry used to fan decoded events out to subscribers.

#[macro_use]
extern crate serde;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt, fmt::Display};
use tracing::trace;

mod error;
pub mod field;
pub mod reader;
#[cfg(feature = "subscriptions")]
pub mod subscription;
mod types;
pub mod utils;
pub mod writer;

pub use error::{BindingError, Malformed, QueryError};
pub use types::{OperationMeta, OperationType, PersistedQuery, QueryExtensions};

use reader::{JsonResponseReader, ResponseFieldMapper, ResponseReader};
use writer::{InputFieldMarshaller, ResponseFieldMarshaller};

/// Types used only by the code generator. Transports may use these, but they shouldn't
/// be implemented manually.
pub mod codegen {
    pub use crate::{
        field::{Argument, CustomType, FieldKind, ResponseField},
        reader::{ResponseFieldMapper, ResponseReader},
        writer::{InputFieldMarshaller, InputFieldWriter, ResponseFieldMarshaller, ResponseWriter}
    };
}

/// The form in which queries are sent over the wire in most implementations. This will be built using the [GraphQLQuery](./trait.GraphQLQuery.html) trait normally.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QueryBody<Variables: Serialize + Send + Sync + Clone> {
    /// The values for the variables. They must match those declared in the queries. This should be the `Variables` struct from the generated module corresponding to the query.
    pub variables: Variables,
    /// The GraphQL query, as a string.
    pub query: &'static str,
    /// The GraphQL operation name, as a string.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str
}

/// A request body that refers to the query document by hash only.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PersistedQueryBody<Variables: Serialize + Send + Sync + Clone> {
    pub variables: Variables,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub extensions: QueryExtensions
}

/// A convenience trait that can be used to build a GraphQL request body.
/// This will be implemented for you by codegen. It is implemented on the zero-size struct of each operation.
pub trait GraphQLQuery: Send + Sync + 'static {
    /// The shape of the variables expected by the query. This should be a generated struct most of the time.
    type Variables: Serialize + InputFieldMarshaller + fmt::Debug + Send + Sync + Clone + 'static;
    /// The top-level shape of the response data (the `data` field in the GraphQL response). In practice this should be generated, since it is hard to write by hand without error.
    type ResponseData: Serialize
        + DeserializeOwned
        + ResponseFieldMapper
        + ResponseFieldMarshaller
        + fmt::Debug
        + Send
        + Sync
        + Clone
        + 'static;

    /// Produce a GraphQL query struct that can be JSON serialized and sent to a GraphQL API.
    fn build_query(variables: Self::Variables) -> (QueryBody<Self::Variables>, OperationMeta);
}

/// One operation bound to its variables.
///
/// Immutable once built. The same operation can be used to decode every message a
/// subscription delivers, from any number of threads.
pub struct Operation<Q: GraphQLQuery> {
    meta: OperationMeta,
    body: QueryBody<Q::Variables>
}

impl<Q: GraphQLQuery> Operation<Q> {
    pub fn new(variables: Q::Variables) -> Self {
        let (body, meta) = Q::build_query(variables);
        Operation { meta, body }
    }

    /// The operation name, used by transports to multiplex operations over one connection.
    pub fn name(&self) -> &'static str {
        self.body.operation_name
    }

    /// The hex SHA-256 of the query document.
    pub fn operation_id(&self) -> &'static str {
        self.meta.operation_id
    }

    pub fn query_document(&self) -> &'static str {
        self.body.query
    }

    pub fn operation_type(&self) -> OperationType {
        self.meta.operation_type
    }

    pub fn meta(&self) -> &OperationMeta {
        &self.meta
    }

    pub fn variables(&self) -> &Q::Variables {
        &self.body.variables
    }

    pub fn body(&self) -> &QueryBody<Q::Variables> {
        &self.body
    }

    /// The variables as an ordered map of wire values. Enums are written by name.
    pub fn serialize_variables(&self) -> Map<String, Value> {
        self.body.variables.value_map()
    }

    /// The request body for servers that support automatic persisted queries.
    pub fn persisted_query(&self) -> PersistedQueryBody<Q::Variables> {
        PersistedQueryBody {
            variables: self.body.variables.clone(),
            operation_name: self.body.operation_name,
            extensions: QueryExtensions {
                persisted_query: PersistedQuery {
                    version: 1,
                    sha256_hash: self.meta.operation_id
                }
            }
        }
    }

    /// Decodes the `data` of one response message.
    pub fn decode(&self, reader: &dyn ResponseReader) -> Result<Q::ResponseData, BindingError> {
        let data = Q::ResponseData::map(reader)?;
        trace!(
            operation = self.name(),
            operation_type = %self.operation_type(),
            "decoded response data"
        );
        Ok(data)
    }

    /// Decodes the `data` of one response message from JSON.
    pub fn decode_value(&self, data: &Value) -> Result<Q::ResponseData, BindingError> {
        self.decode(&JsonResponseReader::from_value(data)?)
    }

    /// Decodes a complete response (`data` and `errors`).
    ///
    /// A `null` or absent `data` is not an error. It decodes to `data: None`, with whatever
    /// the server put in `errors`.
    pub fn decode_response(&self, body: &Value) -> Result<Response<Q::ResponseData>, BindingError> {
        let object = match body {
            Value::Object(object) => object,
            other => {
                return Err(BindingError::malformed(
                    "<response>",
                    Malformed::UnexpectedType {
                        expected: "object",
                        found: reader::json_type_name(other)
                    }
                ))
            }
        };

        let data = match object.get("data") {
            None | Some(Value::Null) => None,
            Some(data) => Some(self.decode_value(data)?)
        };
        let errors = match object.get("errors") {
            None | Some(Value::Null) => None,
            Some(errors) => Some(
                serde_json::from_value::<Vec<Error>>(errors.clone())
                    .map_err(|e| BindingError::malformed("errors", Malformed::Invalid(e.to_string())))?
            )
        };

        Ok(Response { data, errors })
    }
}

impl<Q: GraphQLQuery> Clone for Operation<Q> {
    fn clone(&self) -> Self {
        Operation {
            meta: self.meta.clone(),
            body: self.body.clone()
        }
    }
}

impl<Q: GraphQLQuery> fmt::Debug for Operation<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.body.operation_name)
            .field("operation_id", &self.meta.operation_id)
            .field("operation_type", &self.meta.operation_type)
            .field("variables", &self.body.variables)
            .finish()
    }
}

impl<Q: GraphQLQuery> PartialEq for Operation<Q>
where
    Q::Variables: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.meta == other.meta && self.body == other.body
    }
}

/// The generic shape taken by the responses of GraphQL APIs.
///
/// This will generally be used with the `ResponseData` struct from a generated module.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
///
/// ```
/// # use serde_json::json;
/// # use serde::Deserialize;
/// #
/// # #[derive(Debug, Deserialize, PartialEq, Clone)]
/// # struct Message {
/// #     id: String,
/// # }
/// #
/// # #[derive(Debug, Deserialize, PartialEq, Clone)]
/// # struct ResponseData {
/// #     messages: Vec<Message>,
/// # }
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use relay::Response;
///
/// let body: Response<ResponseData> = serde_json::from_value(json!({
///     "data": {
///         "messages": [{"id": "m1"}],
///     },
///     "errors": [],
/// }))?;
///
/// let expected: Response<ResponseData> = Response {
///     data: Some(ResponseData {
///         messages: vec![Message { id: "m1".to_owned() }],
///     }),
///     errors: Some(vec![]),
/// };
///
/// assert_eq!(body, expected);
///
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Response<Data: Clone> {
    /// The absent, partial or complete response data.
    pub data: Option<Data>,
    /// The top-level errors returned by the server.
    pub errors: Option<Vec<Error>>
}

/// An element in the top-level `errors` array of a response body.
///
/// This tries to be as close to the spec as possible.
///
/// [Spec](https://github.com/facebook/graphql/blob/master/spec/Section%207%20--%20Response.md)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    /// The human-readable error message. This is the only required field.
    pub message: String,
    /// Which locations in the query the error applies to.
    pub locations: Option<Vec<Location>>,
    /// Which path in the query the error applies to, e.g. `["onMessageCreated", "cipherText"]`.
    pub path: Option<Vec<PathFragment>>,
    /// Additional errors. Their exact format is defined by the server.
    pub extensions: Option<HashMap<String, serde_json::Value>>
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use `/` as a separator like JSON Pointer.
        let path = self
            .path
            .as_ref()
            .map(|fragments| {
                fragments
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_else(|| "<query>".to_string());

        // Get the location of the error. We'll use just the first location for this.
        let loc = self
            .locations
            .as_ref()
            .and_then(|locations| locations.iter().next())
            .cloned()
            .unwrap_or_else(Location::default);

        write!(f, "{}:{}:{}: {}", path, loc.line, loc.column, self.message)
    }
}

/// Part of a path in a query. It can be an object key or an array index. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PathFragment {
    /// A key inside an object
    Key(String),
    /// An index inside an array
    Index(i32)
}

/// Represents a location inside a query string. Used in errors. See [Error](./struct.Error.html).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    /// The line number in the query string where the error originated (starting from 1).
    pub line: i32,
    /// The column number in the query string where the error originated (starting from 1).
    pub column: i32
}

impl Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PathFragment::Key(ref key) => write!(f, "{}", key),
            PathFragment::Index(ref idx) => write!(f, "{}", idx)
        }
    }
}
