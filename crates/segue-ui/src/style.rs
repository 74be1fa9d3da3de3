use segue_core::Color;

use crate::label::FontStyle;

/// Visual state of a switch. Mutations after construction go through the
/// `set_*` methods on `SegmentedSwitchState`, which re-apply the changed
/// value to the live label arenas immediately.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchStyle {
    pub background: Color,
    pub title_color: Color,
    pub selected_title_color: Color,
    pub indicator_background: Color,
    pub corner_radius: f32,
    /// Gap between the outer bounds and the indicator on every side.
    pub indicator_inset: f32,
    pub title_font: FontStyle,
    pub selected_title_font: FontStyle,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title_color: Color::BLACK,
            selected_title_color: Color::WHITE,
            indicator_background: Color::BLACK,
            corner_radius: 0.0,
            indicator_inset: 0.0,
            title_font: FontStyle::default(),
            selected_title_font: FontStyle::default(),
        }
    }
}
