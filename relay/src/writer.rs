use crate::field::ResponseField;
use serde_json::{Map, Value};

/// Write access to one object of a response, the mirror image of
/// [ResponseReader](../reader/trait.ResponseReader.html).
///
/// `None` is written as an explicit `null`.
pub trait ResponseWriter {
    fn write_string(&mut self, field: &ResponseField, value: Option<&str>);

    fn write_custom(&mut self, field: &ResponseField, value: Option<&str>);

    fn write_object(&mut self, field: &ResponseField, value: Option<&dyn ResponseFieldMarshaller>);
}

/// Writes a value into a response writer according to a static field list.
pub trait ResponseFieldMarshaller {
    fn marshal(&self, writer: &mut dyn ResponseWriter);
}

/// Write access to an operation's input variables.
pub trait InputFieldWriter {
    fn write_string(&mut self, name: &'static str, value: Option<&str>);
}

/// Writes an operation's variables by name.
pub trait InputFieldMarshaller {
    fn marshal(&self, writer: &mut dyn InputFieldWriter);

    /// The variables as a name to wire value map, in declaration order.
    fn value_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.marshal(&mut map);
        map
    }
}

impl InputFieldWriter for Map<String, Value> {
    fn write_string(&mut self, name: &'static str, value: Option<&str>) {
        self.insert(name.to_string(), string_value(value));
    }
}

/// A `ResponseWriter` producing a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonResponseWriter {
    object: Map<String, Value>
}

impl JsonResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.object
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

impl ResponseWriter for JsonResponseWriter {
    fn write_string(&mut self, field: &ResponseField, value: Option<&str>) {
        self.object
            .insert(field.response_name.to_string(), string_value(value));
    }

    fn write_custom(&mut self, field: &ResponseField, value: Option<&str>) {
        self.object
            .insert(field.response_name.to_string(), string_value(value));
    }

    fn write_object(&mut self, field: &ResponseField, value: Option<&dyn ResponseFieldMarshaller>) {
        let value = match value {
            Some(marshaller) => {
                let mut nested = JsonResponseWriter::new();
                marshaller.marshal(&mut nested);
                nested.into_value()
            }
            None => Value::Null
        };
        self.object.insert(field.response_name.to_string(), value);
    }
}

/// Marshals any value with a field list straight into JSON.
pub fn to_json_value<M: ResponseFieldMarshaller + ?Sized>(value: &M) -> Value {
    let mut writer = JsonResponseWriter::new();
    value.marshal(&mut writer);
    writer.into_value()
}

fn string_value(value: Option<&str>) -> Value {
    value
        .map(|s| Value::String(s.to_string()))
        .unwrap_or(Value::Null)
}
