// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single layer in a model definition.

use layer_registry::ArgValue;
use std::collections::BTreeMap;

/// One stage of the model's computation graph.
///
/// The `id` addresses the layer for editing and reordering. It is unique
/// within a [`crate::ModelDefinition`], stable across reorderings, and never
/// appears in the interchange document. `args` holds whatever the
/// configuration form has filled in so far, keyed by argument name; the
/// serializer emits it verbatim, complete or not.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Opaque identifier, unique within a definition.
    pub id: String,
    /// Layer kind tag (e.g., `"dense"`, `"pqc"`). Checked against the
    /// registry when the layer is added, not at serialization time.
    pub kind: String,
    /// Kind-specific arguments.
    pub args: BTreeMap<String, ArgValue>,
}

impl Layer {
    /// Creates a layer with an empty argument mapping.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            args: BTreeMap::new(),
        }
    }

    /// Adds one argument, consuming and returning the layer.
    ///
    /// # Examples
    /// ```
    /// use model_def::Layer;
    ///
    /// let layer = Layer::new("a", "dense")
    ///     .with_arg("units", 64)
    ///     .with_arg("activation", "relu");
    /// assert_eq!(layer.args.len(), 2);
    /// ```
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }
}
