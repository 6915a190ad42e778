//! Selective field resolution over a small in-memory relational dataset.
//!
//! A request names the fields it wants, starting from a handful of root fields:
//!
//! ```text
//! {
//!   latte: item(id: "coffee1") { name price }
//!   customer(id: "cust1") { name orders { totalAmount items { name } } }
//! }
//! ```
//!
//! [`Engine::execute`] parses it, resolves every invocation against an
//! [`EntityStore`] and returns a [`Response`] shaped exactly like the request.
//! Only requested attributes are projected and relationships are only traversed
//! when asked for.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod engine;
pub mod request;
pub mod resolver;
pub mod response;
pub mod store;

pub use engine::Engine;
pub use minigraph_config::{EngineConfig, ErrorMode};
pub use request::ParsedRequest;
pub use resolver::{resolve, Resolver};
pub use response::{Response, ResponseObject, ResponseValue};
pub use store::{Dataset, DatasetError, EntityStore, StoreError};
