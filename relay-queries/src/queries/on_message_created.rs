#[allow(clippy::all)]
pub struct OnMessageCreated;
#[allow(clippy::all)]
pub mod on_message_created {
    #![allow(dead_code)]
    pub const OPERATION_NAME: &str = "OnMessageCreated";
    pub const QUERY : & str = "subscription OnMessageCreated($connectionId: ID!, $direction: Direction!) {\n  onMessageCreated(connectionId: $connectionId, direction: $direction) {\n    __typename\n    messageId\n    connectionId\n    cipherText\n    direction\n    utcTimestamp\n    nextToken\n  }\n}" ;
    pub const OPERATION_ID: &str =
        "bafbdbfad4919af2b82d7c9fa0f3e580a3885161895c7bbd02b706d41a9f6e44";
    use ::relay::codegen::{
        Argument, CustomType, InputFieldMarshaller, InputFieldWriter, ResponseField,
        ResponseFieldMapper, ResponseFieldMarshaller, ResponseReader, ResponseWriter
    };
    use ::relay::{BindingError, Malformed};
    use serde::{Deserialize, Serialize};
    use std::{fmt, str::FromStr};
    #[allow(dead_code)]
    type ID = String;
    #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
    #[doc = "Which way a message travels through the relay"]
    pub enum Direction {
        #[doc = "Received by the owner of the connection"]
        #[serde(rename = "INBOUND")]
        Inbound,
        #[doc = "Sent by the owner of the connection"]
        #[serde(rename = "OUTBOUND")]
        Outbound
    }
    impl Direction {
        pub const ALL: &'static [Direction] = &[Direction::Inbound, Direction::Outbound];
        pub fn name(&self) -> &'static str {
            match self {
                Direction::Inbound => "INBOUND",
                Direction::Outbound => "OUTBOUND"
            }
        }
    }
    impl fmt::Display for Direction {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }
    impl FromStr for Direction {
        type Err = Malformed;
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "INBOUND" => Ok(Direction::Inbound),
                "OUTBOUND" => Ok(Direction::Outbound),
                other => Err(Malformed::UnknownEnumValue {
                    type_name: "Direction",
                    value: other.to_string()
                })
            }
        }
    }
    #[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
    #[doc = "A message stored in a relay postbox"]
    pub struct OnMessageCreatedOnMessageCreated {
        #[serde(rename = "__typename")]
        pub typename: String,
        #[doc = "Unique identifier of the message"]
        #[serde(rename = "messageId")]
        pub message_id: ID,
        #[doc = "The postbox the message belongs to"]
        #[serde(rename = "connectionId")]
        pub connection_id: ID,
        #[doc = "Encrypted message content"]
        #[serde(rename = "cipherText")]
        pub cipher_text: String,
        pub direction: Direction,
        #[doc = "When the message was stored"]
        #[serde(rename = "utcTimestamp")]
        pub utc_timestamp: String,
        #[serde(rename = "nextToken")]
        pub next_token: Option<String>
    }
    impl OnMessageCreatedOnMessageCreated {
        pub const FIELDS: &'static [ResponseField] = &[
            ResponseField::for_string("__typename", false),
            ResponseField::for_custom_type("messageId", CustomType::Id, false),
            ResponseField::for_custom_type("connectionId", CustomType::Id, false),
            ResponseField::for_string("cipherText", false),
            ResponseField::for_enum("direction", "Direction", false),
            ResponseField::for_string("utcTimestamp", false),
            ResponseField::for_string("nextToken", true)
        ];
    }
    impl ResponseFieldMapper for OnMessageCreatedOnMessageCreated {
        fn map(reader: &dyn ResponseReader) -> Result<Self, BindingError> {
            let fields = Self::FIELDS;
            let typename = fields[0].required(reader.read_string(&fields[0])?)?;
            let message_id = fields[1].required(reader.read_custom_type(&fields[1])?)?;
            let connection_id = fields[2].required(reader.read_custom_type(&fields[2])?)?;
            let cipher_text = fields[3].required(reader.read_string(&fields[3])?)?;
            let direction = fields[4].parse_enum(fields[4].required(reader.read_string(&fields[4])?)?)?;
            let utc_timestamp = fields[5].required(reader.read_string(&fields[5])?)?;
            let next_token = fields[6].checked(reader.read_string(&fields[6])?)?;
            Ok(OnMessageCreatedOnMessageCreated {
                typename,
                message_id,
                connection_id,
                cipher_text,
                direction,
                utc_timestamp,
                next_token
            })
        }
    }
    impl ResponseFieldMarshaller for OnMessageCreatedOnMessageCreated {
        fn marshal(&self, writer: &mut dyn ResponseWriter) {
            let fields = Self::FIELDS;
            writer.write_string(&fields[0], Some(self.typename.as_str()));
            writer.write_custom(&fields[1], Some(self.message_id.as_str()));
            writer.write_custom(&fields[2], Some(self.connection_id.as_str()));
            writer.write_string(&fields[3], Some(self.cipher_text.as_str()));
            writer.write_string(&fields[4], Some(self.direction.name()));
            writer.write_string(&fields[5], Some(self.utc_timestamp.as_str()));
            writer.write_string(&fields[6], self.next_token.as_deref());
        }
    }
    impl fmt::Display for OnMessageCreatedOnMessageCreated {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "OnMessageCreated{{__typename={}, messageId={}, connectionId={}, cipherText={}, direction={}, utcTimestamp={}, nextToken={}}}",
                self.typename,
                self.message_id,
                self.connection_id,
                self.cipher_text,
                self.direction,
                self.utc_timestamp,
                self.next_token.as_deref().unwrap_or("null")
            )
        }
    }
    #[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
    pub struct Variables {
        #[serde(rename = "connectionId")]
        connection_id: ID,
        direction: Direction
    }
    impl Variables {
        pub fn new<C: Into<ID>>(connection_id: C, direction: Direction) -> Result<Self, BindingError> {
            let connection_id = connection_id.into();
            if connection_id.is_empty() {
                return Err(BindingError::empty_argument("connectionId"));
            }
            Ok(Variables {
                connection_id,
                direction
            })
        }
        pub fn connection_id(&self) -> &str {
            &self.connection_id
        }
        pub fn direction(&self) -> Direction {
            self.direction
        }
    }
    impl InputFieldMarshaller for Variables {
        fn marshal(&self, writer: &mut dyn InputFieldWriter) {
            writer.write_string("connectionId", Some(self.connection_id.as_str()));
            writer.write_string("direction", Some(self.direction.name()));
        }
    }
    #[derive(Clone, Debug, Default)]
    pub struct Builder {
        connection_id: Option<ID>,
        direction: Option<Direction>
    }
    impl Builder {
        pub fn connection_id<C: Into<ID>>(mut self, connection_id: C) -> Self {
            self.connection_id = Some(connection_id.into());
            self
        }
        pub fn direction(mut self, direction: Direction) -> Self {
            self.direction = Some(direction);
            self
        }
        pub fn build_variables(self) -> Result<Variables, BindingError> {
            let connection_id = self
                .connection_id
                .ok_or_else(|| BindingError::missing_argument("connectionId"))?;
            let direction = self
                .direction
                .ok_or_else(|| BindingError::missing_argument("direction"))?;
            Variables::new(connection_id, direction)
        }
        pub fn build(self) -> Result<::relay::Operation<super::OnMessageCreated>, BindingError> {
            Ok(::relay::Operation::new(self.build_variables()?))
        }
    }
    const ON_MESSAGE_CREATED_ARGUMENTS: &[(&str, Argument)] = &[
        ("connectionId", Argument::Variable("connectionId")),
        ("direction", Argument::Variable("direction"))
    ];
    #[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
    pub struct ResponseData {
        #[serde(rename = "onMessageCreated")]
        pub on_message_created: Option<OnMessageCreatedOnMessageCreated>
    }
    impl ResponseData {
        pub const FIELDS: &'static [ResponseField] = &[ResponseField::for_object(
            "onMessageCreated",
            ON_MESSAGE_CREATED_ARGUMENTS,
            true
        )];
    }
    impl ResponseFieldMapper for ResponseData {
        fn map(reader: &dyn ResponseReader) -> Result<Self, BindingError> {
            let fields = Self::FIELDS;
            let on_message_created = match fields[0].checked(reader.read_object(&fields[0])?)? {
                Some(inner) => Some(
                    OnMessageCreatedOnMessageCreated::map(&*inner)
                        .map_err(|e| e.within(fields[0].response_name))?
                ),
                None => None
            };
            Ok(ResponseData { on_message_created })
        }
    }
    impl ResponseFieldMarshaller for ResponseData {
        fn marshal(&self, writer: &mut dyn ResponseWriter) {
            let fields = Self::FIELDS;
            writer.write_object(
                &fields[0],
                self.on_message_created
                    .as_ref()
                    .map(|inner| inner as &dyn ResponseFieldMarshaller)
            );
        }
    }
    impl fmt::Display for ResponseData {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.on_message_created {
                Some(inner) => write!(f, "Data{{onMessageCreated={}}}", inner),
                None => write!(f, "Data{{onMessageCreated=null}}")
            }
        }
    }
}
#[allow(clippy::all)]
impl ::relay::GraphQLQuery for OnMessageCreated {
    type Variables = on_message_created::Variables;
    type ResponseData = on_message_created::ResponseData;
    fn build_query(
        variables: Self::Variables
    ) -> (
        ::relay::QueryBody<Self::Variables>,
        ::relay::OperationMeta
    ) {
        let meta = ::relay::OperationMeta {
            operation_id: on_message_created::OPERATION_ID,
            operation_type: ::relay::OperationType::Subscription,
            involved_types: vec!["Message"]
        };
        let body = ::relay::QueryBody {
            variables,
            query: on_message_created::QUERY,
            operation_name: on_message_created::OPERATION_NAME
        };
        (body, meta)
    }
}
#[allow(clippy::all)]
impl OnMessageCreated {
    pub fn operation<C: Into<String>>(
        connection_id: C,
        direction: on_message_created::Direction
    ) -> Result<::relay::Operation<Self>, ::relay::BindingError> {
        Ok(::relay::Operation::new(on_message_created::Variables::new(
            connection_id,
            direction
        )?))
    }
    pub fn builder() -> on_message_created::Builder {
        on_message_created::Builder::default()
    }
}
