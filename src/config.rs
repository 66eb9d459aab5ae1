use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
}

impl Config {
    /// Reads configuration from the environment. A missing value is fatal at
    /// startup, before any connection is attempted.
    pub fn from_env() -> Self {
        Config {
            mongodb_uri: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
        }
    }
}
