// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The closed catalogue of recognised layer kinds.
//!
//! Lookup is exact and case-sensitive: `"dense"` is registered, `"Dense"`
//! is not. The builtin catalogue covers the classical and quantum layer
//! palette of the builder UI; hosts that extend the palette can construct
//! a registry from their own [`LayerKind`] list.

use crate::{ArgSpec, ArgValue, KindCategory, LayerKind, RegistryError, ValueKind};
use std::collections::BTreeMap;

/// Exact-match lookup over the set of recognised layer kinds.
///
/// # Example
/// ```
/// use layer_registry::LayerRegistry;
///
/// let registry = LayerRegistry::builtin();
/// assert!(registry.is_known_kind("pqc"));
/// assert!(registry.argument_schema("bogus").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRegistry {
    kinds: BTreeMap<String, LayerKind>,
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LayerRegistry {
    /// Creates the builtin catalogue: the classical and quantum layer
    /// palette the builder UI offers.
    pub fn builtin() -> Self {
        Self::from_kinds([
            LayerKind::new("dense", KindCategory::Classical)
                .with_required("units", ValueKind::Int)
                .with_optional("activation", ValueKind::Str),
            LayerKind::new("conv2d", KindCategory::Classical)
                .with_required("filters", ValueKind::Int)
                .with_required("kernel_size", ValueKind::Int)
                .with_optional("strides", ValueKind::Int),
            LayerKind::new("flatten", KindCategory::Classical),
            LayerKind::new("dropout", KindCategory::Classical)
                .with_required("rate", ValueKind::Float),
            LayerKind::new("relu", KindCategory::Classical),
            LayerKind::new("softmax", KindCategory::Classical),
            LayerKind::new("pqc", KindCategory::Quantum)
                .with_required("circuit", ValueKind::Str)
                .with_optional("repetitions", ValueKind::Int),
            LayerKind::new("controlled_pqc", KindCategory::Quantum)
                .with_required("circuit", ValueKind::Str),
            LayerKind::new("sample", KindCategory::Quantum)
                .with_required("repetitions", ValueKind::Int),
            LayerKind::new("expectation", KindCategory::Quantum)
                .with_optional("operators", ValueKind::List),
        ])
    }

    /// Creates a registry from an explicit kind list.
    ///
    /// Later entries with the same name replace earlier ones.
    pub fn from_kinds(kinds: impl IntoIterator<Item = LayerKind>) -> Self {
        Self {
            kinds: kinds
                .into_iter()
                .map(|k| (k.name.clone(), k))
                .collect(),
        }
    }

    /// Returns `true` iff `name` matches a registered kind exactly
    /// (case-sensitive).
    pub fn is_known_kind(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Returns the catalogue entry for `name`, if registered.
    pub fn kind(&self, name: &str) -> Option<&LayerKind> {
        self.kinds.get(name)
    }

    /// Returns the argument schema for `name`.
    pub fn argument_schema(
        &self,
        name: &str,
    ) -> Result<&BTreeMap<String, ArgSpec>, RegistryError> {
        self.kinds
            .get(name)
            .map(|k| &k.args)
            .ok_or_else(|| RegistryError::UnknownKind {
                kind: name.to_string(),
            })
    }

    /// Returns an iterator over the catalogue entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerKind> {
        self.kinds.values()
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Checks an argument mapping against the schema for `kind`.
    ///
    /// The result is advisory feedback for the form UI: missing required
    /// keys, keys the schema does not recognise, and values whose kind does
    /// not match the expectation. An empty vector means the arguments are
    /// complete and well-typed. Fails only when `kind` itself is
    /// unregistered.
    pub fn check_args(
        &self,
        kind: &str,
        args: &BTreeMap<String, ArgValue>,
    ) -> Result<Vec<ArgIssue>, RegistryError> {
        let schema = self.argument_schema(kind)?;
        let mut issues = Vec::new();

        for (name, spec) in schema {
            match args.get(name) {
                None if spec.required => issues.push(ArgIssue::MissingRequired {
                    name: name.clone(),
                    expected: spec.kind,
                }),
                None => {}
                Some(value) if !spec.kind.accepts(value) => {
                    issues.push(ArgIssue::TypeMismatch {
                        name: name.clone(),
                        expected: spec.kind,
                        found: value.kind(),
                    })
                }
                Some(_) => {}
            }
        }

        for name in args.keys() {
            if !schema.contains_key(name) {
                issues.push(ArgIssue::UnknownArgument { name: name.clone() });
            }
        }

        Ok(issues)
    }
}

/// One advisory finding from [`LayerRegistry::check_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgIssue {
    /// A required argument is absent.
    MissingRequired {
        /// Argument name.
        name: String,
        /// Kind the schema expects.
        expected: ValueKind,
    },
    /// An argument name the schema does not recognise.
    UnknownArgument {
        /// Argument name.
        name: String,
    },
    /// An argument is present but its value has the wrong kind.
    TypeMismatch {
        /// Argument name.
        name: String,
        /// Kind the schema expects.
        expected: ValueKind,
        /// Kind actually found.
        found: ValueKind,
    },
}

impl std::fmt::Display for ArgIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgIssue::MissingRequired { name, expected } => {
                write!(f, "missing required argument '{name}' ({expected})")
            }
            ArgIssue::UnknownArgument { name } => {
                write!(f, "unrecognised argument '{name}'")
            }
            ArgIssue::TypeMismatch {
                name,
                expected,
                found,
            } => {
                write!(f, "argument '{name}' expects {expected}, got {found}")
            }
        }
    }
}
