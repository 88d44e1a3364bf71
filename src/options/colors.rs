use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Color palette options.
pub struct ColorOptions {
    /// Scene background color as linear RGB.
    pub background: [f32; 3],
    /// Optional tint applied to carbon atoms and their bond ends;
    /// heteroatoms keep standard CPK coloring.
    pub carbon_tint: Option<[f32; 3]>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: [0.05, 0.05, 0.08],
            carbon_tint: None,
        }
    }
}
