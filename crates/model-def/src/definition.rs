// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The model definition aggregate: ordered layers plus a model-type tag.
//!
//! A [`ModelDefinition`] is owned by a single builder session. The host UI
//! appends, removes, reorders, and re-argues layers in response to user
//! actions; every mutation either succeeds atomically or fails without
//! touching the aggregate. Layer order is the forward computation order and
//! is preserved exactly through every mutation and through serialization.

use crate::{DefinitionError, Layer, ModelDocument};
use layer_registry::{ArgIssue, ArgValue, LayerRegistry};
use std::collections::BTreeMap;

/// The task category a model targets.
///
/// The enumeration is closed: no other value is representable, so a
/// definition always carries exactly one valid model type. The string
/// boundary (form inputs, parsed documents) goes through
/// [`ModelType::from_str`], which rejects anything outside the set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Classification task (the builder's initial selection).
    #[default]
    Classification,
    /// Regression task.
    Regression,
}

impl ModelType {
    /// Returns the lowercase tag used in the interchange document.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Classification => "classification",
            ModelType::Regression => "regression",
        }
    }
}

impl std::fmt::Display for ModelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelType {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classification" => Ok(ModelType::Classification),
            "regression" => Ok(ModelType::Regression),
            other => Err(DefinitionError::InvalidModelType {
                value: other.to_string(),
            }),
        }
    }
}

/// An advisory finding for one layer of a definition.
///
/// Produced by [`ModelDefinition::diagnostics`]; never blocks mutation or
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDiagnostic {
    /// Id of the layer the issue belongs to.
    pub layer_id: String,
    /// The layer's kind tag.
    pub kind: String,
    /// The schema finding.
    pub issue: ArgIssue,
}

/// The ordered collection of layers plus a model-type tag that a user is
/// currently authoring.
///
/// Invariants maintained across all mutations:
/// - layer ids are unique for the lifetime of the aggregate;
/// - layer order is exactly the order last arranged;
/// - a failed mutation leaves the aggregate unchanged.
///
/// # Example
/// ```
/// use model_def::{Layer, ModelDefinition, ModelType};
///
/// let mut def = ModelDefinition::new();
/// def.add_layer(Layer::new("a", "dense").with_arg("units", 64)).unwrap();
/// def.add_layer(Layer::new("b", "relu")).unwrap();
/// def.reorder_layer("b", 0).unwrap();
///
/// let kinds: Vec<_> = def.iter_layers().map(|l| l.kind.as_str()).collect();
/// assert_eq!(kinds, ["relu", "dense"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    model_type: ModelType,
    layers: Vec<Layer>,
    registry: LayerRegistry,
}

impl Default for ModelDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelDefinition {
    /// Creates an empty definition with the default model type and the
    /// builtin layer catalogue.
    pub fn new() -> Self {
        Self::with_registry(LayerRegistry::builtin())
    }

    /// Creates an empty definition validating against a custom catalogue.
    pub fn with_registry(registry: LayerRegistry) -> Self {
        Self {
            model_type: ModelType::default(),
            layers: Vec::new(),
            registry,
        }
    }

    /// Rebuilds a definition from a parsed interchange document.
    ///
    /// Fresh ids (`"layer-0"`, `"layer-1"`, ...) are synthesized, since the
    /// document never carries ids. Each layer passes through
    /// [`ModelDefinition::add_layer`], so a document naming an unregistered
    /// kind fails here, at the boundary where the layer is added.
    pub fn from_document(
        doc: &ModelDocument,
        registry: LayerRegistry,
    ) -> Result<Self, DefinitionError> {
        let mut def = Self::with_registry(registry);
        def.set_model_type(doc.model_type);
        for (i, doc_layer) in doc.layers.iter().enumerate() {
            let mut layer = Layer::new(format!("layer-{i}"), doc_layer.kind.clone());
            layer.args = doc_layer.args.clone();
            def.add_layer(layer)?;
        }
        Ok(def)
    }

    /// Returns the registry this definition validates against.
    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Returns the current model type.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Replaces the model type.
    ///
    /// Infallible: the closed enum makes invalid model types
    /// unrepresentable. Subsequent serializations reflect the new type
    /// immediately.
    pub fn set_model_type(&mut self, model_type: ModelType) {
        self.model_type = model_type;
    }

    /// Replaces the model type from its string tag.
    ///
    /// Fails with [`DefinitionError::InvalidModelType`] for anything outside
    /// `{"classification", "regression"}`, leaving the current type
    /// unchanged.
    pub fn set_model_type_str(&mut self, tag: &str) -> Result<(), DefinitionError> {
        self.model_type = tag.parse()?;
        Ok(())
    }

    /// Returns the layers in forward computation order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns an iterator over the layers in forward computation order.
    pub fn iter_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Returns the layer with the given id, if present.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Returns the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the definition has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Appends a layer to the end of the sequence.
    ///
    /// Fails with [`DefinitionError::UnknownKind`] when the layer's kind is
    /// not registered and with [`DefinitionError::DuplicateId`] when its id
    /// collides with an existing layer. Either failure leaves the sequence
    /// untouched.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), DefinitionError> {
        if !self.registry.is_known_kind(&layer.kind) {
            return Err(DefinitionError::UnknownKind {
                kind: layer.kind,
            });
        }
        if self.position(&layer.id).is_some() {
            return Err(DefinitionError::DuplicateId { id: layer.id });
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Removes the layer with the given id, preserving the relative order
    /// of the remainder, and returns it.
    ///
    /// Fails with [`DefinitionError::NotFound`] when no layer has that id.
    pub fn remove_layer(&mut self, id: &str) -> Result<Layer, DefinitionError> {
        let index = self
            .position(id)
            .ok_or_else(|| DefinitionError::NotFound { id: id.to_string() })?;
        Ok(self.layers.remove(index))
    }

    /// Moves the layer with the given id to `new_index`.
    ///
    /// The target index is clamped to `[0, num_layers - 1]`; all other
    /// layers shift while keeping their relative order. Fails with
    /// [`DefinitionError::NotFound`] when no layer has that id.
    pub fn reorder_layer(&mut self, id: &str, new_index: usize) -> Result<(), DefinitionError> {
        let from = self
            .position(id)
            .ok_or_else(|| DefinitionError::NotFound { id: id.to_string() })?;

        let to = new_index.min(self.layers.len() - 1);
        if to != new_index {
            tracing::debug!("reorder target {new_index} clamped to {to} for layer '{id}'");
        }
        if from == to {
            return Ok(());
        }

        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        Ok(())
    }

    /// Replaces the argument mapping of the layer with the given id
    /// wholesale (not merged).
    ///
    /// Fails with [`DefinitionError::NotFound`] when no layer has that id.
    /// Argument completeness is not checked here; see
    /// [`ModelDefinition::diagnostics`].
    pub fn update_args(
        &mut self,
        id: &str,
        args: BTreeMap<String, ArgValue>,
    ) -> Result<(), DefinitionError> {
        let index = self
            .position(id)
            .ok_or_else(|| DefinitionError::NotFound { id: id.to_string() })?;
        self.layers[index].args = args;
        Ok(())
    }

    /// Runs the registry's advisory argument checks over every layer.
    ///
    /// The result is feedback for the configuration form (missing required
    /// arguments, unrecognised names, kind mismatches). It never blocks a
    /// mutation or a serialization.
    pub fn diagnostics(&self) -> Vec<LayerDiagnostic> {
        let mut findings = Vec::new();
        for layer in &self.layers {
            // Kinds are checked on add, so the lookup cannot miss.
            let issues = self
                .registry
                .check_args(&layer.kind, &layer.args)
                .unwrap_or_default();
            findings.extend(issues.into_iter().map(|issue| LayerDiagnostic {
                layer_id: layer.id.clone(),
                kind: layer.kind.clone(),
                issue,
            }));
        }
        if !findings.is_empty() {
            tracing::warn!("{} advisory argument issue(s) in definition", findings.len());
        }
        findings
    }

    /// Projects this definition into its canonical interchange document.
    pub fn to_document(&self) -> ModelDocument {
        ModelDocument::from_definition(self)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }
}
