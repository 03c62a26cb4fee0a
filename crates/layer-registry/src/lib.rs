// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # layer-registry
//!
//! The layer kind catalogue for the qml model builder.
//!
//! This crate provides:
//! - [`ArgValue`] — the tagged value type for layer arguments (bool, int,
//!   float, string, list).
//! - [`ValueKind`] — the expected-kind tags used by argument schemas.
//! - [`LayerKind`] — one catalogue entry: a kind name, its category
//!   (classical or quantum), and its argument schema.
//! - [`LayerRegistry`] — exact-match lookup over the closed kind set, plus
//!   advisory argument diagnostics via [`LayerRegistry::check_args`].
//!
//! # Design Goals
//! - Pure lookup: no side effects, no I/O.
//! - Schemas are advisory. A mismatch between a layer's arguments and its
//!   schema is surfaced as an [`ArgIssue`], never enforced here.
//! - Clean error types via `thiserror`.
//!
//! # Example
//! ```
//! use layer_registry::LayerRegistry;
//!
//! let registry = LayerRegistry::builtin();
//! assert!(registry.is_known_kind("dense"));
//! assert!(!registry.is_known_kind("Dense"));
//!
//! let schema = registry.argument_schema("dense").unwrap();
//! assert!(schema.contains_key("units"));
//! ```

mod error;
mod kind;
mod registry;
mod value;

pub use error::RegistryError;
pub use kind::{ArgSpec, KindCategory, LayerKind};
pub use registry::{ArgIssue, LayerRegistry};
pub use value::{ArgValue, ValueKind};
