use crate::{Color, Rect};

/// Flat display list emitted by widgets and replayed by the host renderer.
/// Nodes are drawn in order; `PushClip`/`PopClip` bracket nodes that must be
/// masked to a (rounded) rectangle.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

#[derive(Clone, Debug)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        weight: FontWeight,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}
