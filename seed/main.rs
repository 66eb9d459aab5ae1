use bson::doc;
use dotenvy::dotenv;
use mongodb::Collection;
use tracing_subscriber::EnvFilter;

use evently::config::Config;
use evently::db::Db;
use evently::models::booking::{Booking, BookingInput};
use evently::models::event::{Event, EventInput};
use evently::store::{BookingStore, EventStore};

fn sample_events() -> Vec<EventInput> {
    vec![
        EventInput {
            title: "Rust Meetup: Async in Practice".to_string(),
            description: "An evening of talks on async Rust in production.".to_string(),
            overview: "Three talks, then open discussion over pizza.".to_string(),
            image: "https://example.com/images/async-meetup.png".to_string(),
            venue: "Community Hall".to_string(),
            location: "Berlin".to_string(),
            date: "September 12, 2026".to_string(),
            time: "6:30 pm".to_string(),
            mode: "in-person".to_string(),
            audience: "developers".to_string(),
            agenda: vec![
                "Doors open".to_string(),
                "Talks".to_string(),
                "Open discussion".to_string(),
            ],
            organizer: "Rust Berlin".to_string(),
            tags: vec!["rust".to_string(), "async".to_string()],
        },
        EventInput {
            title: "Intro to Document Databases".to_string(),
            description: "A hands-on workshop on modeling data without a fixed schema.".to_string(),
            overview: "Bring a laptop; we build a small app together.".to_string(),
            image: "https://example.com/images/docdb-workshop.png".to_string(),
            venue: "Online".to_string(),
            location: "Remote".to_string(),
            date: "2026-10-03".to_string(),
            time: "10:00".to_string(),
            mode: "online".to_string(),
            audience: "beginners".to_string(),
            agenda: vec!["Setup".to_string(), "Workshop".to_string(), "Q&A".to_string()],
            organizer: "Evently".to_string(),
            tags: vec!["databases".to_string(), "workshop".to_string()],
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let db = Db::new(config.mongodb_uri);
    let db = db.connect().await?;

    let events = EventStore::new(db);
    let bookings = BookingStore::new(db);
    events.ensure_indexes().await?;
    bookings.ensure_indexes().await?;

    // Start from a clean slate.
    let event_collection: Collection<Event> = db.collection("events");
    event_collection.delete_many(doc! {}, None).await?;
    let booking_collection: Collection<Booking> = db.collection("bookings");
    booking_collection.delete_many(doc! {}, None).await?;

    let mut first_event_id = None;
    for input in sample_events() {
        let event = events.create(input).await?;
        println!(
            "created event: {} ({}) on {} at {}",
            event.title, event.slug, event.date, event.time
        );
        first_event_id.get_or_insert_with(|| event.id);
    }

    if let Some(Some(event_id)) = first_event_id {
        let booking = bookings
            .create(BookingInput {
                event_id: event_id.to_hex(),
                email: "Attendee@Example.com".to_string(),
            })
            .await?;
        println!("created booking: {} -> {}", booking.email, booking.event_id);
    }

    println!("seeding complete");
    Ok(())
}
