// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for model definition mutations and document parsing.

/// Errors that can occur when mutating a model definition or parsing an
/// interchange document.
///
/// Every mutation error is raised before the aggregate is touched, so a
/// failed call leaves the definition exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The layer's kind tag is not in the registry.
    #[error("unknown layer kind '{kind}'")]
    UnknownKind { kind: String },

    /// The model type string is outside the closed enumeration.
    #[error("model type must be 'classification' or 'regression', got '{value}'")]
    InvalidModelType { value: String },

    /// A layer with the same id already exists in the definition.
    #[error("duplicate layer id '{id}'")]
    DuplicateId { id: String },

    /// No layer in the definition has the addressed id.
    #[error("no layer with id '{id}'")]
    NotFound { id: String },

    /// An interchange document could not be parsed.
    #[error("failed to parse model document: {0}")]
    DocumentParse(#[from] serde_json::Error),
}
