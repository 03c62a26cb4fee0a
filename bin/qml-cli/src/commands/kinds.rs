// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `qml kinds` command: display the layer catalogue.
//!
//! Prints every registered kind with its category and argument schema.
//! Arguments marked `*` are required for a complete layer; completeness is
//! advisory and checked by `qml check`.

use layer_registry::LayerRegistry;

pub fn execute() -> anyhow::Result<()> {
    let registry = LayerRegistry::builtin();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                qml · Layer Catalogue                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    println!("  {:<16} {:<10} {}", "Kind", "Category", "Arguments");
    println!("  {}", "-".repeat(72));

    for kind in registry.iter() {
        let schema = kind.schema_summary();
        let schema = if schema.is_empty() { "—" } else { schema.as_str() };
        println!(
            "  {:<16} {:<10} {}",
            kind.name,
            kind.category.as_str(),
            schema,
        );
    }

    println!();
    println!("  {} kinds registered. Arguments marked * are required.", registry.len());
    println!();
    Ok(())
}
