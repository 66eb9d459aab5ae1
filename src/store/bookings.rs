use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::debug;

use crate::error::Error;
use crate::models::booking::{Booking, BookingInput};
use crate::models::event::Event;

/// Typed repository over the `bookings` collection. Holds a handle to the
/// events collection for the referential check on create.
pub struct BookingStore {
    collection: Collection<Booking>,
    events: Collection<Event>,
}

impl BookingStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("bookings"),
            events: db.collection("events"),
        }
    }

    /// Declares the index on `event_id`. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        let index = IndexModel::builder().keys(doc! { "event_id": 1 }).build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }

    /// Validates, checks that the referenced event exists, then inserts.
    ///
    /// The existence check is advisory only: the event can be deleted between
    /// the lookup and the insert, and nothing at the storage level enforces
    /// the reference afterwards.
    pub async fn create(&self, input: BookingInput) -> Result<Booking, Error> {
        let mut booking = input.into_booking()?;

        let event = self
            .events
            .find_one(doc! { "_id": booking.event_id }, None)
            .await?;
        if event.is_none() {
            return Err(Error::MissingReference);
        }

        let result = self.collection.insert_one(&booking, None).await?;
        booking.id = result.inserted_id.as_object_id();
        debug!(event_id = %booking.event_id, email = %booking.email, "created booking");
        Ok(booking)
    }

    /// Bookings for one event, newest first.
    pub async fn list_for_event(&self, event_id: ObjectId) -> Result<Vec<Booking>, Error> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .collection
            .find(doc! { "event_id": event_id }, options)
            .await?;
        let mut bookings = Vec::new();
        while let Some(booking) = cursor.try_next().await? {
            bookings.push(booking);
        }
        Ok(bookings)
    }
}
