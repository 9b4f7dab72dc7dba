//! Static descriptions of the fields an operation selects.
//!
//! Generated operation modules declare one `ResponseField` per selected field, in selection
//! order. The mappers and marshallers look fields up by these descriptors instead of by
//! loose strings, so the wire name of every field lives in exactly one place.

use crate::{BindingError, Malformed};
use serde_json::{Map, Value};

/// Custom scalars the schema declares and the binding maps onto Rust types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomType {
    /// `ID`, carried as an opaque string.
    Id
}

impl CustomType {
    pub fn graphql_name(&self) -> &'static str {
        match self {
            CustomType::Id => "ID"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Enum(&'static str),
    CustomType(CustomType),
    Object
}

/// The value passed to a field argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Bound to an operation variable, i.e. `connectionId: $connectionId`.
    Variable(&'static str)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseField {
    pub kind: FieldKind,
    pub response_name: &'static str,
    pub arguments: &'static [(&'static str, Argument)],
    pub optional: bool
}

impl ResponseField {
    pub const fn for_string(response_name: &'static str, optional: bool) -> Self {
        ResponseField {
            kind: FieldKind::String,
            response_name,
            arguments: &[],
            optional
        }
    }

    /// Enums travel as strings and are matched against their members by name.
    pub const fn for_enum(
        response_name: &'static str,
        type_name: &'static str,
        optional: bool
    ) -> Self {
        ResponseField {
            kind: FieldKind::Enum(type_name),
            response_name,
            arguments: &[],
            optional
        }
    }

    pub const fn for_custom_type(
        response_name: &'static str,
        custom_type: CustomType,
        optional: bool
    ) -> Self {
        ResponseField {
            kind: FieldKind::CustomType(custom_type),
            response_name,
            arguments: &[],
            optional
        }
    }

    pub const fn for_object(
        response_name: &'static str,
        arguments: &'static [(&'static str, Argument)],
        optional: bool
    ) -> Self {
        ResponseField {
            kind: FieldKind::Object,
            response_name,
            arguments,
            optional
        }
    }

    /// Checks a value read for this field against its nullability. `None` is only accepted
    /// for optional fields.
    pub fn checked<T>(&self, value: Option<T>) -> Result<Option<T>, BindingError> {
        match value {
            None if !self.optional => Err(BindingError::missing_field(self.response_name)),
            value => Ok(value)
        }
    }

    /// Unwraps a value read for this field, failing if it is null or absent.
    pub fn required<T>(&self, value: Option<T>) -> Result<T, BindingError> {
        self.checked(value)?
            .ok_or_else(|| BindingError::missing_field(self.response_name))
    }

    /// Parses an enum member read for this field by its symbolic name.
    pub fn parse_enum<T: std::str::FromStr>(&self, value: String) -> Result<T, BindingError> {
        let type_name = match self.kind {
            FieldKind::Enum(type_name) => type_name,
            _ => "<not an enum>"
        };
        value.parse().map_err(|_| {
            BindingError::malformed(
                self.response_name,
                Malformed::UnknownEnumValue { type_name, value }
            )
        })
    }

    /// Substitutes the operation's variables into this field's arguments.
    ///
    /// Arguments bound to a variable that is missing from `variables` resolve to `null`.
    pub fn resolve_arguments(&self, variables: &Map<String, Value>) -> Map<String, Value> {
        self.arguments
            .iter()
            .map(|(name, argument)| {
                let value = match argument {
                    Argument::Variable(variable) => {
                        variables.get(*variable).cloned().unwrap_or(Value::Null)
                    }
                };
                (name.to_string(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ARGS: &[(&str, Argument)] = &[
        ("connectionId", Argument::Variable("connectionId")),
        ("direction", Argument::Variable("direction"))
    ];
    const OBJECT: ResponseField = ResponseField::for_object("onMessageCreated", ARGS, true);

    #[test]
    fn resolves_variable_arguments() {
        let variables = json!({ "connectionId": "c1", "direction": "INBOUND" });
        let resolved = OBJECT.resolve_arguments(variables.as_object().unwrap());
        assert_eq!(
            Value::Object(resolved),
            json!({ "connectionId": "c1", "direction": "INBOUND" })
        );
    }

    #[test]
    fn missing_variable_resolves_to_null() {
        let variables = json!({ "connectionId": "c1" });
        let resolved = OBJECT.resolve_arguments(variables.as_object().unwrap());
        assert_eq!(resolved.get("direction"), Some(&Value::Null));
    }

    #[test]
    fn required_rejects_null() {
        let field = ResponseField::for_string("cipherText", false);
        assert_eq!(
            field.required::<String>(None),
            Err(BindingError::missing_field("cipherText"))
        );
        assert_eq!(field.required(Some(1)), Ok(1));
    }

    #[test]
    fn checked_allows_null_only_for_optional_fields() {
        let next_token = ResponseField::for_string("nextToken", true);
        let cipher_text = ResponseField::for_string("cipherText", false);

        assert_eq!(next_token.checked::<String>(None), Ok(None));
        assert_eq!(next_token.checked(Some("t1")), Ok(Some("t1")));
        assert_eq!(
            cipher_text.checked::<String>(None),
            Err(BindingError::missing_field("cipherText"))
        );
    }

    #[test]
    fn unknown_enum_member_is_malformed() {
        #[derive(Debug)]
        struct Never;
        impl std::str::FromStr for Never {
            type Err = ();
            fn from_str(_: &str) -> Result<Self, ()> {
                Err(())
            }
        }

        let field = ResponseField::for_enum("direction", "Direction", false);
        let err = field.parse_enum::<Never>("SIDEWAYS".to_string()).unwrap_err();
        assert_eq!(
            err,
            BindingError::malformed(
                "direction",
                Malformed::UnknownEnumValue {
                    type_name: "Direction",
                    value: "SIDEWAYS".to_string()
                }
            )
        );
    }
}
