use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Database {
    pub url: String,
    pub connections: u32,
}

impl Database {
    /// Filesystem path of a file-backed SQLite URL, if it has one.
    pub fn file_path(&self) -> Option<&str> {
        let path = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(path)
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://instance/journal.db".into(),
            connections: 5,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Session {
    /// Only send the session cookie over HTTPS.
    pub secure: bool,
    /// Days of inactivity before a session expires.
    pub expiry: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            expiry: 7,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: Database::default(),
            server: Server::default(),
            session: Session::default(),
            log: "info".into(),
        }
    }
}

impl Settings {
    /// Defaults, then `config.toml` if present, then `JOURNAL_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("config.toml")
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.url", "sqlite://instance/journal.db")?
            .set_default("database.connections", 5)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("session.secure", false)?
            .set_default("session.expiry", 7)?
            .set_default("log", "info")?
            .add_source(
                File::with_name(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("JOURNAL")
                    .prefix_separator("_")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;
    use std::io::Write;

    #[test]
    fn test_settings() {
        set_var("JOURNAL_SERVER_PORT", "8088");
        let settings = Settings::from_file("does-not-exist.toml").unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.server.port, 8088);
        assert_eq!(settings.server.address(), "127.0.0.1:8088");
        assert_eq!(settings.database.url, "sqlite://instance/journal.db");
        assert_eq!(settings.database.file_path(), Some("instance/journal.db"));
    }

    #[test]
    fn test_settings_file() {
        let mut file = settings_file();
        writeln!(
            file.1,
            "log = \"debug\"\n[database]\nurl = \"sqlite::memory:\"\nconnections = 1\n[session]\nsecure = true\nexpiry = 30"
        )
        .unwrap();

        let settings = Settings::from_file(&file.0).unwrap();
        assert_eq!(settings.log, "debug");
        assert_eq!(settings.database.connections, 1);
        assert_eq!(settings.database.file_path(), None);
        assert!(settings.session.secure);
        assert_eq!(settings.session.expiry, 30);

        std::fs::remove_file(&file.0).ok();
    }

    fn settings_file() -> (String, std::fs::File) {
        let path = std::env::temp_dir().join(format!("journal-settings-{}.toml", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        (path.display().to_string(), file)
    }

    #[test]
    fn test_file_path_variants() {
        let db = |url: &str| Database {
            url: url.into(),
            connections: 1,
        };
        assert_eq!(db("sqlite:journal.db").file_path(), Some("journal.db"));
        assert_eq!(db("sqlite:///tmp/j.db?mode=rwc").file_path(), Some("/tmp/j.db"));
        assert_eq!(db("sqlite::memory:").file_path(), None);
    }
}
