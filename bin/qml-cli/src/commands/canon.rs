// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `qml canon` command: re-emit a document in canonical form.
//!
//! Parses an interchange document, rebuilds the definition it describes,
//! and prints the canonical serialization. Useful for normalising documents
//! produced by hand before handing them to the training backend.

use anyhow::Context;
use layer_registry::LayerRegistry;
use model_def::{ModelDefinition, ModelDocument};
use std::path::Path;

pub fn execute(file: &Path, compact: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read document '{}'", file.display()))?;
    let doc = ModelDocument::from_json(&content)
        .with_context(|| format!("cannot parse document '{}'", file.display()))?;

    let def = ModelDefinition::from_document(&doc, LayerRegistry::builtin())
        .with_context(|| format!("document '{}' is not buildable", file.display()))?;

    let canonical = def.to_document();
    if compact {
        println!("{}", canonical.to_json());
    } else {
        println!("{canonical}");
    }
    Ok(())
}
