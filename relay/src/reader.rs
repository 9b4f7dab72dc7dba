use crate::{
    field::{FieldKind, ResponseField},
    BindingError, Malformed
};
use serde_json::{Map, Value};

/// Read access to one object of a decoded response, keyed by the operation's field list.
///
/// Every read returns `Ok(None)` when the field is absent or `null`. Whether that is
/// acceptable is up to the caller; see [ResponseField::required](../field/struct.ResponseField.html#method.required).
pub trait ResponseReader {
    fn read_string(&self, field: &ResponseField) -> Result<Option<String>, BindingError>;

    /// Reads a custom scalar. All custom scalars this crate knows about are carried as strings.
    fn read_custom_type(&self, field: &ResponseField) -> Result<Option<String>, BindingError>;

    fn read_object<'a>(
        &'a self,
        field: &ResponseField
    ) -> Result<Option<Box<dyn ResponseReader + 'a>>, BindingError>;
}

/// Builds a value from a response reader according to a static field list.
pub trait ResponseFieldMapper: Sized {
    fn map(reader: &dyn ResponseReader) -> Result<Self, BindingError>;
}

/// A `ResponseReader` over a JSON object, as handed over by JSON based transports.
#[derive(Debug, Clone, Copy)]
pub struct JsonResponseReader<'a> {
    object: &'a Map<String, Value>
}

impl<'a> JsonResponseReader<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        JsonResponseReader { object }
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: &'a Value) -> Result<Self, BindingError> {
        match value {
            Value::Object(object) => Ok(Self::new(object)),
            other => Err(BindingError::malformed(
                "<root>",
                Malformed::UnexpectedType {
                    expected: "object",
                    found: json_type_name(other)
                }
            ))
        }
    }

    fn value(&self, field: &ResponseField) -> Option<&'a Value> {
        match self.object.get(field.response_name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value)
        }
    }

    fn read_str(
        &self,
        field: &ResponseField,
        expected: &'static str
    ) -> Result<Option<String>, BindingError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(unexpected_type(field, expected, other))
        }
    }
}

impl<'a> ResponseReader for JsonResponseReader<'a> {
    fn read_string(&self, field: &ResponseField) -> Result<Option<String>, BindingError> {
        self.read_str(field, "string")
    }

    fn read_custom_type(&self, field: &ResponseField) -> Result<Option<String>, BindingError> {
        match field.kind {
            FieldKind::CustomType(custom) => self.read_str(field, custom.graphql_name()),
            _ => self.read_str(field, "custom scalar")
        }
    }

    fn read_object<'b>(
        &'b self,
        field: &ResponseField
    ) -> Result<Option<Box<dyn ResponseReader + 'b>>, BindingError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::Object(object)) => Ok(Some(Box::new(JsonResponseReader::new(object)))),
            Some(other) => Err(unexpected_type(field, "object", other))
        }
    }
}

fn unexpected_type(field: &ResponseField, expected: &'static str, found: &Value) -> BindingError {
    BindingError::malformed(
        field.response_name,
        Malformed::UnexpectedType {
            expected,
            found: json_type_name(found)
        }
    )
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CustomType;
    use serde_json::json;

    const NEXT_TOKEN: ResponseField = ResponseField::for_string("nextToken", true);
    const MESSAGE_ID: ResponseField =
        ResponseField::for_custom_type("messageId", CustomType::Id, false);
    const NESTED: ResponseField = ResponseField::for_object("nested", &[], true);

    #[test]
    fn absent_and_null_read_as_none() {
        let value = json!({ "nextToken": null });
        let reader = JsonResponseReader::from_value(&value).unwrap();
        assert_eq!(reader.read_string(&NEXT_TOKEN), Ok(None));
        assert_eq!(reader.read_custom_type(&MESSAGE_ID), Ok(None));
        assert!(reader.read_object(&NESTED).unwrap().is_none());
    }

    #[test]
    fn reads_strings_and_ids() {
        let value = json!({ "nextToken": "t1", "messageId": "m1" });
        let reader = JsonResponseReader::from_value(&value).unwrap();
        assert_eq!(reader.read_string(&NEXT_TOKEN), Ok(Some("t1".to_string())));
        assert_eq!(reader.read_custom_type(&MESSAGE_ID), Ok(Some("m1".to_string())));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let value = json!({ "messageId": 42, "nested": "nope" });
        let reader = JsonResponseReader::from_value(&value).unwrap();
        assert_eq!(
            reader.read_custom_type(&MESSAGE_ID),
            Err(BindingError::malformed(
                "messageId",
                Malformed::UnexpectedType {
                    expected: "ID",
                    found: "number"
                }
            ))
        );
        assert!(reader
            .read_object(&NESTED)
            .err()
            .map_or(false, |e| e.is_malformed_response()));
    }

    #[test]
    fn nested_objects_get_their_own_reader() {
        let value = json!({ "nested": { "nextToken": "inner" } });
        let reader = JsonResponseReader::from_value(&value).unwrap();
        let nested = reader.read_object(&NESTED).unwrap().unwrap();
        assert_eq!(nested.read_string(&NEXT_TOKEN), Ok(Some("inner".to_string())));
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(JsonResponseReader::from_value(&json!([1, 2])).is_err());
    }
}
