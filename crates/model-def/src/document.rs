// Copyright (c) 2025 The qml-builder Authors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The canonical interchange document.
//!
//! The document is the sole wire contract of the builder core. Downstream
//! consumers (the display panel, the export action, the training backend)
//! accept exactly this shape:
//!
//! ```json
//! {
//!   "model_type": "classification",
//!   "layers": [
//!     { "type": "dense", "args": { "units": 64 } },
//!     { "type": "relu", "args": {} }
//!   ]
//! }
//! ```
//!
//! Key names `model_type`, `layers`, `type`, and `args` are fixed. Layer
//! ids never appear. Projection from a definition is pure and total; only
//! the parse direction ([`ModelDocument::from_json`]) can fail.

use crate::{DefinitionError, ModelDefinition, ModelType};
use layer_registry::ArgValue;
use std::collections::BTreeMap;
use std::fmt;

/// One layer entry in the interchange document: exactly a kind tag and the
/// verbatim argument mapping.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentLayer {
    /// Layer kind tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Arguments, exactly as held by the definition at projection time.
    pub args: BTreeMap<String, ArgValue>,
}

/// The deterministic projection of a [`ModelDefinition`].
///
/// Serializing the same definition state twice yields equal documents;
/// layer order is exactly definition order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelDocument {
    /// Task type tag, lowercase.
    pub model_type: ModelType,
    /// Layer entries in forward computation order.
    pub layers: Vec<DocumentLayer>,
}

impl ModelDocument {
    /// Projects a definition into its canonical document.
    ///
    /// Pure function of the definition: no hidden state, no I/O, no error
    /// paths. An empty definition yields a valid document with an empty
    /// layer list; incomplete argument mappings are emitted as they are.
    pub fn from_definition(def: &ModelDefinition) -> Self {
        Self {
            model_type: def.model_type(),
            layers: def
                .iter_layers()
                .map(|layer| DocumentLayer {
                    kind: layer.kind.clone(),
                    args: layer.args.clone(),
                })
                .collect(),
        }
    }

    /// Parses a document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the document's JSON value.
    ///
    /// The value is assembled by hand from the argument values, so this is
    /// total; it cannot fail for any reachable document.
    pub fn to_value(&self) -> serde_json::Value {
        let layers: Vec<serde_json::Value> = self
            .layers
            .iter()
            .map(|layer| {
                let args: serde_json::Map<String, serde_json::Value> = layer
                    .args
                    .iter()
                    .map(|(name, value)| (name.clone(), serde_json::Value::from(value)))
                    .collect();
                let mut entry = serde_json::Map::new();
                entry.insert(
                    "type".to_string(),
                    serde_json::Value::String(layer.kind.clone()),
                );
                entry.insert("args".to_string(), serde_json::Value::Object(args));
                serde_json::Value::Object(entry)
            })
            .collect();

        let mut doc = serde_json::Map::new();
        doc.insert(
            "model_type".to_string(),
            serde_json::Value::String(self.model_type.as_str().to_string()),
        );
        doc.insert("layers".to_string(), serde_json::Value::Array(layers));
        serde_json::Value::Object(doc)
    }

    /// Renders the document as compact JSON.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

impl fmt::Display for ModelDocument {
    /// Pretty-printed JSON, as shown in the builder's output panel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;
    use serde_json::json;

    fn classification_two_layers() -> ModelDefinition {
        let mut def = ModelDefinition::new();
        def.add_layer(Layer::new("a", "dense").with_arg("units", 64))
            .unwrap();
        def.add_layer(Layer::new("b", "relu")).unwrap();
        def
    }

    #[test]
    fn test_empty_definition_serializes_to_empty_layers() {
        let mut def = ModelDefinition::new();
        def.set_model_type(ModelType::Regression);
        let doc = def.to_document();
        assert_eq!(
            doc.to_value(),
            json!({ "model_type": "regression", "layers": [] })
        );
    }

    #[test]
    fn test_two_layer_scenario() {
        let def = classification_two_layers();
        assert_eq!(
            def.to_document().to_value(),
            json!({
                "model_type": "classification",
                "layers": [
                    { "type": "dense", "args": { "units": 64 } },
                    { "type": "relu", "args": {} }
                ]
            })
        );
    }

    #[test]
    fn test_reorder_then_serialize() {
        let mut def = classification_two_layers();
        def.reorder_layer("b", 0).unwrap();
        assert_eq!(
            def.to_document().to_value(),
            json!({
                "model_type": "classification",
                "layers": [
                    { "type": "relu", "args": {} },
                    { "type": "dense", "args": { "units": 64 } }
                ]
            })
        );
    }

    #[test]
    fn test_remove_then_serialize() {
        let mut def = classification_two_layers();
        def.remove_layer("a").unwrap();
        assert_eq!(
            def.to_document().to_value(),
            json!({
                "model_type": "classification",
                "layers": [{ "type": "relu", "args": {} }]
            })
        );
    }

    #[test]
    fn test_ids_never_serialized() {
        let def = classification_two_layers();
        let text = def.to_document().to_json();
        assert!(!text.contains("\"id\""));
        assert!(!text.contains("\"a\""));
        assert!(!text.contains("\"b\""));
    }

    #[test]
    fn test_layer_entries_carry_exactly_type_and_args() {
        let def = classification_two_layers();
        let value = def.to_document().to_value();
        for entry in value["layers"].as_array().unwrap() {
            let obj = entry.as_object().unwrap();
            assert_eq!(obj.len(), 2);
            assert!(obj.contains_key("type"));
            assert!(obj.contains_key("args"));
        }
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let def = classification_two_layers();
        let first = def.to_document();
        let second = def.to_document();
        assert_eq!(first, second);
        assert_eq!(first.to_value(), second.to_value());
    }

    #[test]
    fn test_incomplete_args_emitted_verbatim() {
        let mut def = ModelDefinition::new();
        // Missing the required "units", plus a key no schema recognises.
        def.add_layer(Layer::new("a", "dense").with_arg("label", "hidden"))
            .unwrap();
        assert_eq!(
            def.to_document().to_value(),
            json!({
                "model_type": "classification",
                "layers": [{ "type": "dense", "args": { "label": "hidden" } }]
            })
        );
    }

    #[test]
    fn test_nested_list_args() {
        let mut def = ModelDefinition::new();
        def.add_layer(Layer::new("m", "expectation").with_arg(
            "operators",
            vec![ArgValue::from("Z0"), ArgValue::from("Z1")],
        ))
        .unwrap();
        assert_eq!(
            def.to_document().to_value()["layers"][0]["args"]["operators"],
            json!(["Z0", "Z1"])
        );
    }

    #[test]
    fn test_from_json_round_trip() {
        let text = r#"{
            "model_type": "regression",
            "layers": [
                { "type": "dense", "args": { "units": 8, "activation": "tanh" } },
                { "type": "dropout", "args": { "rate": 0.25 } }
            ]
        }"#;
        let doc = ModelDocument::from_json(text).unwrap();
        assert_eq!(doc.model_type, ModelType::Regression);
        assert_eq!(doc.layers.len(), 2);
        assert_eq!(doc.layers[1].args["rate"], ArgValue::Float(0.25));

        // Parsing the canonical rendering yields the same document.
        let again = ModelDocument::from_json(&doc.to_json()).unwrap();
        assert_eq!(again, doc);
    }

    #[test]
    fn test_from_json_rejects_bad_model_type() {
        let err = ModelDocument::from_json(
            r#"{"model_type":"clustering","layers":[]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DefinitionError::DocumentParse(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(ModelDocument::from_json("{not json").is_err());
    }

    #[test]
    fn test_display_is_pretty() {
        let def = classification_two_layers();
        let rendered = format!("{}", def.to_document());
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("\"model_type\""));
    }
}
