pub mod on_message_created;
