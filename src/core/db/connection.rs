/// Connection Management Module
///
/// Connection settings, the driver boundary every statement goes through,
/// and the bundled rusqlite-backed driver.

use super::query::RowSet;
use crate::core::{Result, SqlHelperError};
use rusqlite::types::ValueRef;
use tracing::debug;

/// Port used by the four-field shorthand constructor.
pub const DEFAULT_PORT: u16 = 3306;
/// Character encoding used by the four-field shorthand constructor.
pub const DEFAULT_ENCODING: &str = "utf8";

/// Settings used to open a connection.
///
/// Every statement execution reads the current values, so a setter call
/// takes effect on the next statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: String,
    port: u16,
    database: String,
    user: String,
    password: String,
    use_unicode: bool,
    character_encoding: String,
}

impl ConnectionConfig {
    /// Creates a config from all seven settings.
    pub fn new(
        host: &str,
        port: u16,
        database: &str,
        user: &str,
        password: &str,
        use_unicode: bool,
        character_encoding: &str,
    ) -> Self {
        ConnectionConfig {
            host: host.to_string(),
            port,
            database: database.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            use_unicode,
            character_encoding: character_encoding.to_string(),
        }
    }

    /// Creates a config on port 3306 with unicode enabled and `utf8` encoding.
    pub fn with_defaults(host: &str, database: &str, user: &str, password: &str) -> Self {
        ConnectionConfig::new(
            host,
            DEFAULT_PORT,
            database,
            user,
            password,
            true,
            DEFAULT_ENCODING,
        )
    }

    /// Checks the port and encoding invariants.
    ///
    /// # Errors
    ///
    /// Returns `SqlHelperError::InvalidArgument` when the port is zero or when
    /// unicode is enabled without an encoding name.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SqlHelperError::InvalidArgument(
                "port must be a positive integer".to_string(),
            ));
        }
        if self.use_unicode && self.character_encoding.trim().is_empty() {
            return Err(SqlHelperError::InvalidArgument(
                "character encoding must be set when unicode is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the connection descriptor, without credentials.
    ///
    /// ```
    /// use sqlhelper::core::db::ConnectionConfig;
    ///
    /// let config = ConnectionConfig::with_defaults("localhost", "shop", "root", "secret");
    /// assert_eq!(
    ///     config.connection_url(),
    ///     "mysql://localhost:3306/shop?useUnicode=true&characterEncoding=utf8"
    /// );
    /// ```
    pub fn connection_url(&self) -> String {
        format!(
            "mysql://{}:{}/{}?useUnicode={}&characterEncoding={}",
            self.host, self.port, self.database, self.use_unicode, self.character_encoding
        )
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn use_unicode(&self) -> bool {
        self.use_unicode
    }

    pub fn character_encoding(&self) -> &str {
        &self.character_encoding
    }

    pub fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn set_user(&mut self, user: &str) {
        self.user = user.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn set_use_unicode(&mut self, flag: bool) {
        self.use_unicode = flag;
    }

    pub fn set_character_encoding(&mut self, encoding: &str) {
        self.character_encoding = encoding.to_string();
    }
}

/// Opens connections for the executor.
pub trait Driver {
    type Conn: Connection;

    /// Opens a fresh connection using the given settings.
    fn open(&self, config: &ConnectionConfig) -> Result<Self::Conn>;
}

/// A single open connection. Used for exactly one statement, then closed.
pub trait Connection {
    /// Runs a read statement and materializes every row.
    fn run_query(&mut self, sql: &str) -> Result<RowSet>;

    /// Runs a write statement and returns the affected-row count.
    fn run_update(&mut self, sql: &str) -> Result<u64>;

    /// Releases the connection.
    fn close(self) -> Result<()>;
}

/// Driver backed by rusqlite. The configured database name is the path of
/// the SQLite file; host, port and credentials are not used.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDriver;

impl SqliteDriver {
    pub fn new() -> Self {
        SqliteDriver
    }
}

impl Driver for SqliteDriver {
    type Conn = SqliteConnection;

    fn open(&self, config: &ConnectionConfig) -> Result<SqliteConnection> {
        debug!("Opening SQLite database at {}", config.database());
        let conn = rusqlite::Connection::open(config.database())?;

        if config.use_unicode() {
            let encoding = sqlite_encoding(config.character_encoding())?;
            conn.execute_batch(&format!("PRAGMA encoding = '{}';", encoding))?;
        }

        Ok(SqliteConnection { conn })
    }
}

/// Maps a character-encoding name onto the value `PRAGMA encoding` accepts.
fn sqlite_encoding(name: &str) -> Result<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "utf8" | "utf-8" => Ok("UTF-8"),
        "utf16" | "utf-16" => Ok("UTF-16"),
        "utf16le" | "utf-16le" => Ok("UTF-16le"),
        "utf16be" | "utf-16be" => Ok("UTF-16be"),
        _ => Err(SqlHelperError::Config(format!(
            "Unsupported character encoding for SQLite: '{}'",
            name
        ))),
    }
}

/// An open rusqlite connection.
#[derive(Debug)]
pub struct SqliteConnection {
    conn: rusqlite::Connection,
}

impl Connection for SqliteConnection {
    fn run_query(&mut self, sql: &str) -> Result<RowSet> {
        let mut stmt = self.conn.prepare(sql)?;

        // column_name reports the AS alias when one is given
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([])?;
        while let Some(row) = cursor.next()? {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                values.push(value_to_text(row.get_ref(i)?));
            }
            rows.push(values);
        }

        Ok(RowSet::new(columns, rows))
    }

    fn run_update(&mut self, sql: &str) -> Result<u64> {
        let affected = self.conn.execute(sql, [])?;
        Ok(affected as u64)
    }

    fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| SqlHelperError::from(e))
    }
}

/// Reads a SQLite value as text. NULL stays absent.
fn value_to_text(value: ValueRef) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        // Debug keeps the fractional part: 1.0 stays "1.0"
        ValueRef::Real(f) => Some(format!("{:?}", f)),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).to_string()),
        ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).to_string()),
    }
}
