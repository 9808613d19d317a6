//! Test utilities for Fixora tests.

#![allow(dead_code)]

pub mod mock_driver;

pub use mock_driver::{MockBehavior, MockDriver};

use serde_json::json;

/// A well-formed script answer with `scenes` timeline items.
pub fn script_json(scenes: u32) -> String {
    let timeline: Vec<_> = (0..scenes)
        .map(|i| {
            json!({
                "timestamp": format!("[00:{:02}-00:{:02}]", i * 8, (i + 1) * 8),
                "label": format!("Scene {}", i + 1),
                "action": format!("The dog tries wave number {}", i + 1),
                "voiceover": format!("Percobaan ke-{}.", i + 1)
            })
        })
        .collect();

    json!({
        "style": "Sun-drenched documentary",
        "camera": "Low tracking shot from the water",
        "scene": "A turquoise beach at sunrise",
        "script_timeline": timeline,
        "seo_title": "Anjing Belajar Selancar",
        "description": "Seekor anjing pemberani belajar berselancar.",
        "cta_seo": "Follow untuk part selanjutnya!",
        "hashtags": "#anjing, #selancar, #viral"
    })
    .to_string()
}
