/// Database Module
///
/// The database layer of sqlhelper, split into two concerns:
/// - **Connection Management** (`connection.rs`): connection settings, the driver
///   boundary and the bundled SQLite driver
/// - **Query Execution** (`query.rs`): per-call open/run/close of statements and
///   the raw row-set type
///
/// ## Error Handling
///
/// All database operations report failures as `SqlHelperError::Database`
/// carrying the driver's own message.
pub mod connection;
pub mod query;

pub use connection::*;
pub use query::*;
