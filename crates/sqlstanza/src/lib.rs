//! # sqlstanza
//!
//! Compose a SQL statement from independently added stanzas while keeping
//! bind arguments in the exact order their placeholders will appear.
//!
//! ## Features
//!
//! - **Stanzas, not strings**: add SELECT / FROM / JOIN / WHERE / GROUP BY /
//!   HAVING / ORDER BY / LIMIT pieces in any order; they render in grammar order
//! - **Ordered arguments**: `args()` always lines up with the `?` markers in `to_sql()`
//! - **Value semantics**: every builder call returns a new `Statement`, so a
//!   shared base query can be extended in several directions
//! - **Placeholder dialects**: keep `?`, or number them as `$1` (Postgres) or `@p1` (SQL Server)
//! - **Trusting**: fragments are copied verbatim; nothing is parsed or validated
//!   unless you ask for [`Statement::validate`]
//!
//! ## Example
//!
//! ```
//! use sqlstanza::Statement;
//!
//! let mut q = Statement::postgres()
//!     .select("id, name", ())
//!     .from("employees", ());
//!
//! let role: Option<&'static str> = Some("Comptroller");
//! if let Some(role) = role {
//!     q = q.where_("role = ?", (role,));
//! }
//! q = q.order_by("id", ()).limit("?", (20_i64,));
//!
//! let (sql, args) = q.build();
//! assert_eq!(
//!     sql,
//!     "SELECT id, name\nFROM employees\nWHERE (role = $1)\nORDER BY id\nLIMIT $2"
//! );
//! assert_eq!(args.len(), 2);
//! ```
//!
//! Execution is left to the driver; with `tokio-postgres`:
//!
//! ```ignore
//! let rows = client.query(&q.to_sql(), &q.params_ref()).await?;
//! ```

pub mod dialect;
pub mod error;
pub mod param;
pub mod prelude;
pub mod statement;

pub use dialect::Dialect;
pub use error::{StanzaError, StanzaResult};
pub use param::{IntoArgs, Param};
pub use statement::{Clause, Component, Statement};
