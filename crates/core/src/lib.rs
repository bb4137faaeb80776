//! Domain primitives shared by the store and the service layer.
//!
//! Nothing in here touches the database or does I/O; it is pure logic that
//! both `todos-db` and `todos-api` build on.

pub mod dates;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;
