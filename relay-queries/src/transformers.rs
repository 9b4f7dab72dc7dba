use crate::{on_message_created::OnMessageCreatedOnMessageCreated, types::RelayMessage};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use relay::{BindingError, Malformed};
use std::convert::TryFrom;

// Some servers swap day and month in their GMT strings.
const SWAPPED_GMT_FORMAT: &str = "%a, %b %d %Y %H:%M:%S GMT";

/// Parses a timestamp as sent by the relay service: RFC 3339, or an RFC 2822 style GMT string.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, SWAPPED_GMT_FORMAT)
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

impl TryFrom<OnMessageCreatedOnMessageCreated> for RelayMessage {
    type Error = BindingError;

    fn try_from(event: OnMessageCreatedOnMessageCreated) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&event.utc_timestamp).ok_or_else(|| {
            BindingError::malformed(
                "utcTimestamp",
                Malformed::Invalid(format!("`{}` is not a valid timestamp", event.utc_timestamp))
            )
        })?;

        Ok(RelayMessage {
            message_id: event.message_id,
            connection_id: event.connection_id,
            cipher_text: event.cipher_text,
            direction: event.direction,
            timestamp
        })
    }
}
