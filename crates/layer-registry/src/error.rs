// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for catalogue lookups.

/// Errors that can occur when querying the layer registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The requested layer kind is not in the catalogue.
    #[error("unknown layer kind '{kind}'")]
    UnknownKind { kind: String },
}
