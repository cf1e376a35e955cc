use serde::{Deserialize, Serialize};

/// A 2D point in field coordinates. The y axis grows downward (canvas
/// convention); the goal sits along the top edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// Goal mouth zones: the goalkeeper's dive choice and the classified
/// crossing location of a shot share this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Left,
    Center,
    Right,
}

/// Field geometry for a shootout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldLayout {
    pub width: f32,
    pub height: f32,
    /// y of the goal line; a shot resolves when its ray crosses this line.
    pub goal_line_y: f32,
    /// x of the left post.
    pub goal_left: f32,
    /// Width of the goal mouth.
    pub goal_width: f32,
    /// Distance of the launch point above the bottom edge.
    pub launch_margin: f32,
}

impl FieldLayout {
    /// Fixed point every shot is taken from: center-bottom of the field.
    pub fn launch_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.launch_margin)
    }

    /// Clamp a point into field bounds.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Normalized position of an x coordinate across the goal mouth: 0 at
    /// the left post, 1 at the right post. Wide crossings fall outside
    /// [0, 1] and still classify into the nearest zone.
    pub fn goal_span_position(&self, x: f32) -> f32 {
        (x - self.goal_left) / self.goal_width
    }
}

/// Create the default field layout.
///
/// An 800x500 canvas with the goal line at y=100, the goal mouth spanning
/// the middle 60% of the width, and the launch point 50 units above the
/// bottom edge.
pub fn default_layout() -> FieldLayout {
    FieldLayout {
        width: 800.0,
        height: 500.0,
        goal_line_y: 100.0,
        goal_left: 160.0,
        goal_width: 480.0,
        launch_margin: 50.0,
    }
}

/// Load a field layout from a JSON file, if it exists and parses.
pub fn load_layout_from_file(path: &str) -> Option<FieldLayout> {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<FieldLayout>(&content) {
            Ok(layout) => Some(layout),
            Err(e) => {
                tracing::warn!("Failed to parse {path}: {e}");
                None
            },
        },
        Err(_) => None,
    }
}

/// Load the field layout, preferring a JSON file.
///
/// Checks env var `SPOTKICK_FIELD_CONFIG` (default `config/field.json`).
/// Falls back to `default_layout()` if the file is missing or unparseable.
pub fn load_layout() -> FieldLayout {
    let path =
        std::env::var("SPOTKICK_FIELD_CONFIG").unwrap_or_else(|_| "config/field.json".to_string());
    load_layout_from_file(&path).unwrap_or_else(default_layout)
}
