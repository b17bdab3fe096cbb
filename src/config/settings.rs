const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Self {
            path,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    /// Applies the `--database` flag on top of the environment.
    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.database.path = path.to_string();
        }
        self
    }
}
