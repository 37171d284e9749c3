//! GymDesk Core
//!
//! Framework-independent domain logic shared by the WASM frontend and the
//! development proxy: entity models, collection reconciliation, pagination
//! math, query-cache bookkeeping, upload validation and session rules.

pub mod collection;
pub mod models;
pub mod pagination;
pub mod query;
pub mod session;
pub mod upload;

pub use collection::{Collection, Entity};
pub use pagination::Pagination;
pub use query::Params;
