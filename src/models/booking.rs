use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// Basic local@domain.tld shape, nothing more.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// A booking as stored in the `bookings` collection. `event_id` is a weak
/// reference: the booking does not own the event, and nothing at the storage
/// level keeps the reference valid after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub event_id: ObjectId,
    pub email: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingInput {
    pub event_id: String,
    pub email: String,
}

impl BookingInput {
    /// Validates the input and normalizes the email (trimmed, lowercased).
    /// Whether the referenced event exists is checked at save time by the
    /// store, not here.
    pub fn into_booking(self) -> Result<Booking, Error> {
        let event_id = self.event_id.trim();
        if event_id.is_empty() {
            return Err(Error::MissingField("event_id"));
        }
        let event_id = ObjectId::parse_str(event_id)
            .map_err(|_| Error::InvalidEventId(event_id.to_string()))?;

        let email = self.email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(Error::InvalidEmail);
        }

        let now = Utc::now();
        Ok(Booking {
            id: None,
            event_id,
            email,
            created_at: now,
            updated_at: now,
        })
    }
}
