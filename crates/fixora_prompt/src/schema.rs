//! Response schema sent with every generation request.
//!
//! The schema uses the OpenAPI subset understood by the Gemini
//! `responseSchema` field (`OBJECT`, `ARRAY`, `STRING`).

use serde_json::{Value, json};

/// Top-level fields every script response must contain.
pub const REQUIRED_SCRIPT_FIELDS: [&str; 8] = [
    "style",
    "camera",
    "scene",
    "script_timeline",
    "seo_title",
    "description",
    "cta_seo",
    "hashtags",
];

/// Fields every timeline item must contain. `voiceover` is optional here and
/// made mandatory through the instruction text instead.
pub const REQUIRED_TIMELINE_FIELDS: [&str; 3] = ["timestamp", "label", "action"];

/// Builds the JSON schema describing a `ScriptContent` response.
///
/// The schema does not depend on the configuration; per-model structure is
/// enforced by the system instruction.
///
/// # Examples
///
/// ```
/// use fixora_prompt::response_schema;
///
/// let schema = response_schema();
/// assert_eq!(schema["type"], "OBJECT");
/// assert_eq!(schema["properties"]["script_timeline"]["type"], "ARRAY");
/// ```
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "style": {
                "type": "STRING",
                "description": "Cinematic style and visual aesthetic."
            },
            "camera": {
                "type": "STRING",
                "description": "Shot direction and camera movement."
            },
            "scene": {
                "type": "STRING",
                "description": "Location and atmosphere description."
            },
            "script_timeline": {
                "type": "ARRAY",
                "description": "Ordered sequence of scenes.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "timestamp": {
                            "type": "STRING",
                            "description": "Time range of the scene (for example [00:00-00:08])."
                        },
                        "label": {
                            "type": "STRING",
                            "description": "Scene title (Scene 1, Scene 2, ... or Hook, Climax)."
                        },
                        "action": {
                            "type": "STRING",
                            "description": "Detailed visual description and action for this scene."
                        },
                        "voiceover": {
                            "type": "STRING",
                            "description": "Voiceover/narration script (dubbing) for this scene. Mandatory in storytelling mode."
                        }
                    },
                    "required": REQUIRED_TIMELINE_FIELDS
                }
            },
            "seo_title": {
                "type": "STRING",
                "description": "Catchy, SEO-friendly video title, at most 60 characters."
            },
            "description": {
                "type": "STRING",
                "description": "Short description that sells the concept, at most 150 characters."
            },
            "cta_seo": {
                "type": "STRING",
                "description": "Persuasive, SEO-friendly call to action."
            },
            "hashtags": {
                "type": "STRING",
                "description": "Relevant hashtags, comma separated and each starting with '#'."
            }
        },
        "required": REQUIRED_SCRIPT_FIELDS
    })
}
