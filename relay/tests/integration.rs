use relay::{BindingError, Error, Location, Malformed, PathFragment, Response};
use relay_queries::{on_message_created::ResponseData, Direction, OnMessageCreated};
use serde_json::json;

#[test]
fn request_body_serializes_like_a_graphql_request() {
    let operation = OnMessageCreated::operation("c1", Direction::Outbound).unwrap();
    let body = serde_json::to_value(operation.body()).unwrap();

    assert_eq!(
        body,
        json!({
            "variables": { "connectionId": "c1", "direction": "OUTBOUND" },
            "query": operation.query_document(),
            "operationName": "OnMessageCreated"
        })
    );
}

#[test]
fn persisted_query_carries_hash_instead_of_document() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();
    let body = serde_json::to_value(operation.persisted_query()).unwrap();

    assert_eq!(
        body,
        json!({
            "variables": { "connectionId": "c1", "direction": "INBOUND" },
            "operationName": "OnMessageCreated",
            "extensions": {
                "persistedQuery": {
                    "version": 1,
                    "sha256Hash": operation.operation_id()
                }
            }
        })
    );
}

#[test]
fn decode_response_with_data_and_errors() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();
    let response = operation
        .decode_response(&json!({
            "data": { "onMessageCreated": null },
            "errors": [{
                "message": "Unauthorized",
                "locations": [{ "line": 2, "column": 3 }],
                "path": ["onMessageCreated"]
            }]
        }))
        .unwrap();

    assert_eq!(
        response,
        Response {
            data: Some(ResponseData::default()),
            errors: Some(vec![Error {
                message: "Unauthorized".to_string(),
                locations: Some(vec![Location { line: 2, column: 3 }]),
                path: Some(vec![PathFragment::Key("onMessageCreated".to_string())]),
                extensions: None
            }])
        }
    );
}

#[test]
fn decode_response_without_data() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();
    let response = operation
        .decode_response(&json!({ "data": null, "errors": [{ "message": "boom" }] }))
        .unwrap();

    assert!(response.data.is_none());
    assert_eq!(response.errors.map(|errors| errors.len()), Some(1));
}

#[test]
fn decode_response_rejects_bad_errors_and_bodies() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();

    let bad_errors = operation
        .decode_response(&json!({ "errors": [{ "locations": [] }] }))
        .unwrap_err();
    match bad_errors {
        BindingError::MalformedResponse { field, reason: Malformed::Invalid(_) } => {
            assert_eq!(field, "errors")
        }
        other => panic!("unexpected error {:?}", other)
    }

    let not_an_object = operation.decode_response(&json!([])).unwrap_err();
    assert_eq!(
        not_an_object,
        BindingError::malformed(
            "<response>",
            Malformed::UnexpectedType {
                expected: "object",
                found: "array"
            }
        )
    );
}

#[test]
fn decode_value_rejects_non_object_data() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();
    let err = operation.decode_value(&json!("data")).unwrap_err();
    assert!(err.is_malformed_response());
}

#[test]
fn object_arguments_resolve_against_variables() {
    let operation = OnMessageCreated::operation("c1", Direction::Inbound).unwrap();
    let arguments = ResponseData::FIELDS[0].resolve_arguments(&operation.serialize_variables());

    assert_eq!(
        serde_json::Value::Object(arguments),
        json!({ "connectionId": "c1", "direction": "INBOUND" })
    );
}
