//! The operation surface: table-level query/insert/update/delete plus raw
//! SQL passthroughs, all sharing one set of connection settings.

use crate::core::db::{ConnectionConfig, Driver, Executor, SqliteDriver};
use crate::core::Result;
use crate::format::FieldMapping;
use crate::serializer::{to_json_text, to_records, ResultRecord};
use crate::statement;
use tracing::debug;

/// Database access helper.
///
/// Opens a fresh connection for every statement and closes it before
/// returning. Reads come back as JSON text, writes as affected-row counts.
///
/// ```no_run
/// use sqlhelper::{ConnectionConfig, FieldMapping, SqlHelper};
///
/// let helper = SqlHelper::new(ConnectionConfig::with_defaults("localhost", "shop.db", "root", ""))?;
/// let json = helper.query_where("users", &["id", "name"], &FieldMapping::from([("id", "1")]))?;
/// println!("{}", json);
/// # Ok::<(), sqlhelper::SqlHelperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SqlHelper<D: Driver = SqliteDriver> {
    config: ConnectionConfig,
    driver: D,
}

impl SqlHelper<SqliteDriver> {
    /// Creates a helper backed by the bundled SQLite driver.
    ///
    /// # Errors
    ///
    /// Returns `SqlHelperError::InvalidArgument` if `config` is invalid.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        SqlHelper::with_driver(config, SqliteDriver::new())
    }
}

impl<D: Driver> SqlHelper<D> {
    /// Creates a helper that opens its connections through `driver`.
    pub fn with_driver(config: ConnectionConfig, driver: D) -> Result<Self> {
        config.validate()?;
        debug!("Created SQL helper for {}", config.connection_url());
        Ok(SqlHelper { config, driver })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn port(&self) -> u16 {
        self.config.port()
    }

    pub fn address(&self) -> &str {
        self.config.host()
    }

    pub fn database(&self) -> &str {
        self.config.database()
    }

    pub fn character_encoding(&self) -> &str {
        self.config.character_encoding()
    }

    pub fn is_use_unicode(&self) -> bool {
        self.config.use_unicode()
    }

    pub fn set_port(&mut self, port: u16) {
        self.config.set_port(port);
    }

    pub fn set_address(&mut self, address: &str) {
        self.config.set_host(address);
    }

    pub fn set_user(&mut self, user: &str) {
        self.config.set_user(user);
    }

    pub fn set_password(&mut self, password: &str) {
        self.config.set_password(password);
    }

    pub fn use_unicode(&mut self, flag: bool) {
        self.config.set_use_unicode(flag);
    }

    pub fn set_character_encoding(&mut self, encoding: &str) {
        self.config.set_character_encoding(encoding);
    }

    fn executor(&self) -> Executor<'_, D> {
        Executor::new(&self.driver, &self.config)
    }

    /// Runs a hand-written read statement and returns the rows as records.
    pub fn exec_query_records(&self, sql: &str) -> Result<Vec<ResultRecord>> {
        let rows = self.executor().query(sql)?;
        to_records(&rows)
    }

    /// Runs a hand-written read statement and returns the rows as a JSON array.
    pub fn exec_query(&self, sql: &str) -> Result<String> {
        to_json_text(&self.exec_query_records(sql)?)
    }

    /// Runs a hand-written INSERT and returns the number of rows inserted.
    pub fn exec_insert(&self, sql: &str) -> Result<u64> {
        self.executor().exec(sql)
    }

    /// Runs a hand-written UPDATE and returns the number of rows changed.
    pub fn exec_update(&self, sql: &str) -> Result<u64> {
        self.executor().exec(sql)
    }

    /// Runs a hand-written DELETE and returns the number of rows removed.
    pub fn exec_delete(&self, sql: &str) -> Result<u64> {
        self.executor().exec(sql)
    }

    /// Every column of every row in `table`.
    pub fn query(&self, table: &str) -> Result<String> {
        self.exec_query(&statement::build_select_all(table))
    }

    /// The given columns of every row; all columns when `columns` is empty.
    pub fn query_columns<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> Result<String> {
        self.exec_query(&statement::build_select_columns(table, columns))
    }

    /// The given columns of the rows matching `conditions`. Empty `columns`
    /// selects all columns, empty `conditions` selects all rows.
    pub fn query_where<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        conditions: &FieldMapping,
    ) -> Result<String> {
        self.exec_query(&statement::build_select(table, columns, conditions))
    }

    /// Inserts one row.
    ///
    /// # Errors
    ///
    /// `SqlHelperError::InvalidArgument` when `data` is empty; nothing is
    /// sent to the database in that case.
    pub fn insert(&self, table: &str, data: &FieldMapping) -> Result<u64> {
        self.exec_insert(&statement::build_insert(table, data)?)
    }

    /// Updates the rows matching `conditions`.
    ///
    /// # Errors
    ///
    /// `SqlHelperError::InvalidArgument` when `data` or `conditions` is empty.
    pub fn update(&self, table: &str, data: &FieldMapping, conditions: &FieldMapping) -> Result<u64> {
        self.exec_update(&statement::build_update(table, data, conditions)?)
    }

    /// Deletes the rows matching `conditions`.
    ///
    /// # Errors
    ///
    /// `SqlHelperError::InvalidArgument` when `conditions` is empty.
    pub fn delete(&self, table: &str, conditions: &FieldMapping) -> Result<u64> {
        self.exec_delete(&statement::build_delete(table, conditions)?)
    }
}
