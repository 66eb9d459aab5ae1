use mongodb::{options::ClientOptions, Client, Database};
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::Error;

/// Lazily-established, memoized database connection.
///
/// The first call to [`connect`](Db::connect) opens the connection; callers
/// that arrive while that attempt is still in flight await the same attempt
/// instead of opening duplicates, and every call after a success returns the
/// cached handle. A failed attempt is not cached, so the next caller tries
/// again from scratch. There is no reconnect or reset path beyond that.
pub struct Db {
    uri: String,
    handle: OnceCell<Database>,
}

impl Db {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            handle: OnceCell::new(),
        }
    }

    pub async fn connect(&self) -> Result<&Database, Error> {
        self.handle
            .get_or_try_init(|| async {
                let mut options = ClientOptions::parse(&self.uri).await?;
                options.app_name = Some("evently".to_string());

                let name = options
                    .default_database
                    .clone()
                    .unwrap_or_else(|| "evently".to_string());

                let client = Client::with_options(options)?;
                info!(db = %name, "connected to mongodb");
                Ok(client.database(&name))
            })
            .await
    }
}
