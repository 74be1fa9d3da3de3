use segue_core::{Color, FontWeight, Rect};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontStyle {
    /// Logical size (dp); the host renderer converts to pixels.
    pub size: f32,
    pub weight: FontWeight,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            weight: FontWeight::Regular,
        }
    }
}

impl FontStyle {
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// One title in a label layer. The switch owns two arenas of these, one for
/// the plain layer and one for the masked selected layer, addressed by
/// segment index.
#[derive(Clone, Debug)]
pub struct TitleLabel {
    pub text: String,
    pub color: Color,
    pub font: FontStyle,
    pub frame: Rect,
}

pub type LabelArena = SmallVec<[TitleLabel; 4]>;
