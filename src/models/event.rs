use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::datetime::{normalize_date, normalize_time};
use crate::utils::slug::slugify;

/// An event as stored in the `events` collection. `slug`, `date`, and `time`
/// hold normalized values only; raw user input never reaches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied event attributes, before validation and normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

const REQUIRED_FIELDS: &[(&str, fn(&EventInput) -> &str)] = &[
    ("title", |e| &e.title),
    ("description", |e| &e.description),
    ("overview", |e| &e.overview),
    ("image", |e| &e.image),
    ("venue", |e| &e.venue),
    ("location", |e| &e.location),
    ("date", |e| &e.date),
    ("time", |e| &e.time),
    ("mode", |e| &e.mode),
    ("audience", |e| &e.audience),
    ("organizer", |e| &e.organizer),
];

fn trimmed_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

impl EventInput {
    /// Validates and normalizes the input, producing the record to persist.
    ///
    /// For an update, pass the stored document: slug, date, and time are
    /// recomputed only when the corresponding input changed, and the id and
    /// created_at carry over. Any failure aborts the whole conversion, so a
    /// partially-normalized event is never produced.
    pub fn into_event(self, existing: Option<&Event>) -> Result<Event, Error> {
        for &(field, value) in REQUIRED_FIELDS {
            if value(&self).trim().is_empty() {
                return Err(Error::MissingField(field));
            }
        }

        let agenda = trimmed_entries(self.agenda);
        if agenda.is_empty() {
            return Err(Error::EmptyList("agenda"));
        }
        let tags = trimmed_entries(self.tags);
        if tags.is_empty() {
            return Err(Error::EmptyList("tags"));
        }

        let title = self.title.trim().to_string();
        let slug = match existing {
            Some(prev) if prev.title == title => prev.slug.clone(),
            _ => slugify(&title),
        };

        let raw_date = self.date.trim();
        let date = match existing {
            Some(prev) if prev.date == raw_date => prev.date.clone(),
            _ => normalize_date(raw_date).ok_or_else(|| Error::InvalidDate(raw_date.to_string()))?,
        };

        let raw_time = self.time.trim();
        let time = match existing {
            Some(prev) if prev.time == raw_time => prev.time.clone(),
            _ => normalize_time(raw_time).ok_or_else(|| Error::InvalidTime(raw_time.to_string()))?,
        };

        let now = Utc::now();
        Ok(Event {
            id: existing.and_then(|prev| prev.id),
            title,
            slug,
            description: self.description.trim().to_string(),
            overview: self.overview.trim().to_string(),
            image: self.image.trim().to_string(),
            venue: self.venue.trim().to_string(),
            location: self.location.trim().to_string(),
            date,
            time,
            mode: self.mode.trim().to_string(),
            audience: self.audience.trim().to_string(),
            agenda,
            organizer: self.organizer.trim().to_string(),
            tags,
            created_at: existing.map(|prev| prev.created_at).unwrap_or(now),
            updated_at: now,
        })
    }
}
