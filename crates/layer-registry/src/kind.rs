// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Layer kind catalogue entries.

use crate::ValueKind;
use std::collections::BTreeMap;

/// Whether a layer kind is a classical or a quantum building block.
///
/// The builder UI renders the two families differently; the category is
/// catalogue metadata and never appears in the interchange document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindCategory {
    /// Classical neural-network layer (dense, conv2d, dropout, ...).
    Classical,
    /// Quantum layer (parameterized quantum circuit, measurement, ...).
    Quantum,
}

impl KindCategory {
    /// Returns a human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            KindCategory::Classical => "classical",
            KindCategory::Quantum => "quantum",
        }
    }
}

impl std::fmt::Display for KindCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The expected kind and requiredness of a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArgSpec {
    /// Expected value kind.
    pub kind: ValueKind,
    /// Whether the argument must be present for the layer to be complete.
    ///
    /// Completeness is advisory: a missing required argument is reported by
    /// [`crate::LayerRegistry::check_args`] but never blocks serialization.
    pub required: bool,
}

impl ArgSpec {
    /// A required argument of the given kind.
    pub fn required(kind: ValueKind) -> Self {
        Self { kind, required: true }
    }

    /// An optional argument of the given kind.
    pub fn optional(kind: ValueKind) -> Self {
        Self { kind, required: false }
    }
}

/// One entry in the layer catalogue: a kind name, its category, and the
/// schema of the arguments it recognises.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerKind {
    /// Kind name as matched (exactly, case-sensitively) against
    /// `Layer::kind` tags (e.g., `"dense"`, `"pqc"`).
    pub name: String,
    /// Classical or quantum family.
    pub category: KindCategory,
    /// Recognised argument names mapped to their expected kinds.
    pub args: BTreeMap<String, ArgSpec>,
}

impl LayerKind {
    /// Creates a kind with an empty argument schema.
    pub fn new(name: impl Into<String>, category: KindCategory) -> Self {
        Self {
            name: name.into(),
            category,
            args: BTreeMap::new(),
        }
    }

    /// Adds a required argument to the schema.
    pub fn with_required(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.args.insert(name.into(), ArgSpec::required(kind));
        self
    }

    /// Adds an optional argument to the schema.
    pub fn with_optional(mut self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.args.insert(name.into(), ArgSpec::optional(kind));
        self
    }

    /// Returns a one-line rendering of the argument schema, e.g.
    /// `"filters*: int, kernel_size*: int, strides: int"`.
    pub fn schema_summary(&self) -> String {
        let parts: Vec<String> = self
            .args
            .iter()
            .map(|(name, spec)| {
                let marker = if spec.required { "*" } else { "" };
                format!("{name}{marker}: {}", spec.kind)
            })
            .collect();
        parts.join(", ")
    }
}
