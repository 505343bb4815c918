//! Response schema for schema-constrained decoding.
//!
//! The Generative Language API takes an OpenAPI-style schema in
//! `generationConfig.responseSchema` and guarantees the candidate text is a
//! JSON document matching it. The shape mirrors
//! [`cineplan_core::plan::FilmPlan`] exactly; the client still re-validates
//! by deserializing into the typed struct.

use serde_json::{json, Value};

/// Schema describing the film plan object.
pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "characters": {
                "type": "ARRAY",
                "description": "Liste des personnages principaux",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "Nom du personnage"
                        },
                        "role": {
                            "type": "STRING",
                            "description": "Rôle (ex: Protagoniste, Antagoniste)"
                        },
                        "description": {
                            "type": "STRING",
                            "description": "Description courte, psychologie et apparence"
                        }
                    },
                    "required": ["name", "role", "description"]
                }
            },
            "storytelling": {
                "type": "STRING",
                "description": "Résumé de l'arc narratif, du ton et des enjeux dramatiques"
            },
            "script_plan": {
                "type": "ARRAY",
                "description": "Séquencier du film en scènes clés numérotées",
                "items": { "type": "STRING" }
            }
        },
        "required": ["characters", "storytelling", "script_plan"]
    })
}
