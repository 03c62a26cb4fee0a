// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-def
//!
//! The model definition aggregate for the qml builder: an ordered list of
//! typed layers plus a model-type tag, and its canonical serialization.
//!
//! This crate provides:
//! - [`Layer`] — one stage of the model's computation graph (id, kind,
//!   free-form arguments).
//! - [`ModelType`] — the closed task-type enumeration (classification or
//!   regression).
//! - [`ModelDefinition`] — the aggregate the host UI mutates: append,
//!   remove, reorder, and re-argue layers while ids stay unique and order
//!   stays exactly as arranged.
//! - [`ModelDocument`] — the canonical interchange document, a pure and
//!   total projection of a definition. Layer ids never appear in it.
//!
//! # Example
//! ```
//! use model_def::{Layer, ModelDefinition, ModelType};
//!
//! let mut def = ModelDefinition::new();
//! def.add_layer(Layer::new("a", "dense").with_arg("units", 64)).unwrap();
//! def.add_layer(Layer::new("b", "relu")).unwrap();
//! def.set_model_type(ModelType::Regression);
//!
//! let doc = def.to_document();
//! assert_eq!(doc.layers.len(), 2);
//! assert_eq!(
//!     doc.to_json(),
//!     r#"{"layers":[{"args":{"units":64},"type":"dense"},{"args":{},"type":"relu"}],"model_type":"regression"}"#
//! );
//! ```

mod definition;
mod document;
mod error;
mod layer;

pub use definition::{LayerDiagnostic, ModelDefinition, ModelType};
pub use document::{DocumentLayer, ModelDocument};
pub use error::DefinitionError;
pub use layer::Layer;
