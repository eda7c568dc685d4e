//! Handler system for Parsebox
//!
//! This module provides the dispatch table, the resolver that turns handler
//! identifiers into callable capabilities, and the built-in content handlers.
//!
//! ## Key Components
//!
//! - [`ContentHandler`] - Main trait for implementing extraction capabilities
//! - [`ExtensionRegistry`] - Immutable extension -> handler identifier table
//! - [`HandlerResolver`] - Resolves identifiers against the module table
//! - [`HandlerModule`] - One statically registered handler module
//!
//! ## Example
//!
//! ```rust,ignore
//! use parsebox::handlers::{ExtensionRegistry, HandlerResolver};
//!
//! let registry = ExtensionRegistry::from_mappings(&config.mappings);
//! let resolver = HandlerResolver::with_builtins();
//!
//! let handler_id = registry.lookup(".txt").unwrap();
//! let handler = resolver.resolve(handler_id)?;
//! let content = handler.analyze(path).await?;
//! ```

pub mod builtin;
mod registry;
mod resolver;
mod traits;

pub use registry::ExtensionRegistry;
pub use resolver::{HandlerModule, HandlerResolver, ResolveError};
pub use traits::{ContentHandler, HandlerError};
