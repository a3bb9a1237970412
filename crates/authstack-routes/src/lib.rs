//! Route metadata storage for AuthStack.
//!
//! This crate holds the routing layer's view of the world: which (URL,
//! method) pairs exist, which endpoint each one dispatches to, and the
//! RBAC annotations attached to it. The signing/validation core does not
//! depend on this crate — only the routing layer that sits above it does.
//!
//! The table is an explicitly constructed, passed-by-reference object with
//! no process-wide instance and no persistence.
//!
//! # Usage
//!
//! ```rust
//! use authstack_routes::{Route, RouteKey, RouteMethod, RouteTable};
//!
//! let table = RouteTable::new();
//! table.insert(
//!     RouteKey::new("/api/v1/widgets", RouteMethod::Get),
//!     Route {
//!         endpoint: "https://widgets.internal".to_owned(),
//!         resource: Some("widgets".to_owned()),
//!         verb: Some("list".to_owned()),
//!         ..Route::default()
//!     },
//! );
//!
//! let route = table.get(&RouteKey::new("/api/v1/widgets", RouteMethod::Get));
//! assert!(route.is_some());
//! ```
//!
//! # Modules
//!
//! - [`model`] - Route metadata model types
//! - [`table`] - The concurrent in-memory table

pub mod model;
pub mod table;

pub use model::{Route, RouteKey, RouteMethod, UnknownMethod};
pub use table::RouteTable;
