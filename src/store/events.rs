use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Collection, Database, IndexModel};
use tracing::debug;

use crate::error::Error;
use crate::models::event::{Event, EventInput};

/// Typed repository over the `events` collection. Every write goes through
/// [`EventInput::into_event`] first, so only validated, normalized documents
/// reach the database.
pub struct EventStore {
    collection: Collection<Event>,
}

impl EventStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("events"),
        }
    }

    /// Declares the unique index on `slug`. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<(), Error> {
        let index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }

    pub async fn create(&self, input: EventInput) -> Result<Event, Error> {
        let mut event = input.into_event(None)?;
        let result = self.collection.insert_one(&event, None).await?;
        event.id = result.inserted_id.as_object_id();
        debug!(slug = %event.slug, "created event");
        Ok(event)
    }

    /// Re-validates against the stored document so slug/date/time are only
    /// recomputed when the corresponding field actually changed.
    pub async fn update(&self, id: ObjectId, input: EventInput) -> Result<Event, Error> {
        let existing = self
            .collection
            .find_one(doc! { "_id": id }, None)
            .await?
            .ok_or(Error::NoSuchEvent(id))?;

        let event = input.into_event(Some(&existing))?;
        self.collection
            .replace_one(doc! { "_id": id }, &event, None)
            .await?;
        debug!(slug = %event.slug, "updated event");
        Ok(event)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Event>, Error> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, Error> {
        Ok(self.collection.find_one(doc! { "slug": slug }, None).await?)
    }

    /// All events, soonest first. Lexicographic order is chronological order
    /// for the normalized date and time formats.
    pub async fn list(&self) -> Result<Vec<Event>, Error> {
        let options = FindOptions::builder()
            .sort(doc! { "date": 1, "time": 1 })
            .build();

        let mut cursor = self.collection.find(doc! {}, options).await?;
        let mut events = Vec::new();
        while let Some(event) = cursor.try_next().await? {
            events.push(event);
        }
        Ok(events)
    }
}
