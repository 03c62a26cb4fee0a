// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `qml check` command: advisory schema checks over a document.
//!
//! Parses an interchange document and reports, per layer, unknown kinds,
//! missing required arguments, unrecognised argument names, and value-kind
//! mismatches. Findings are advisory: the exit code is zero unless
//! `--strict` is set.

use anyhow::Context;
use layer_registry::LayerRegistry;
use model_def::ModelDocument;
use std::path::Path;

pub fn execute(file: &Path, strict: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read document '{}'", file.display()))?;
    let doc = ModelDocument::from_json(&content)
        .with_context(|| format!("cannot parse document '{}'", file.display()))?;

    let registry = LayerRegistry::builtin();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                qml · Document Check                 ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Document: {}", file.display());
    println!("  Model type: {}", doc.model_type);
    println!("  Layers: {}", doc.layers.len());
    println!();

    let mut total_issues = 0usize;

    for (index, layer) in doc.layers.iter().enumerate() {
        if !registry.is_known_kind(&layer.kind) {
            println!("  [{index}] {:<16} unknown layer kind", layer.kind);
            total_issues += 1;
            continue;
        }

        // Registered kind, so the lookup cannot miss.
        let issues = registry
            .check_args(&layer.kind, &layer.args)
            .unwrap_or_default();
        if issues.is_empty() {
            tracing::debug!("layer {index} ({}) is complete", layer.kind);
            continue;
        }
        for issue in &issues {
            println!("  [{index}] {:<16} {issue}", layer.kind);
        }
        total_issues += issues.len();
    }

    if total_issues == 0 {
        println!("  No issues found.");
        println!();
        return Ok(());
    }

    println!();
    println!("  {total_issues} issue(s) found.");
    println!();

    if strict {
        anyhow::bail!("{total_issues} issue(s) found in '{}'", file.display());
    }
    Ok(())
}
