//! Scene emission.
//!
//! The switch draws as three layers: the plain titles, the indicator, and
//! the selected titles clipped to the indicator's rounded rect. Keeping the
//! selected layer masked (rather than recoloring one label) is what makes
//! the title crossfade track the indicator during drags and animations.

use segue_core::{Rect, Scene, SceneNode};

use crate::switch::SegmentedSwitchState;

impl SegmentedSwitchState {
    /// Append this switch's display nodes to `scene`, in paint order.
    pub fn paint(&self, scene: &mut Scene) {
        let style = self.style();
        let bounds = self.bounds();

        scene.nodes.push(SceneNode::Rect {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                w: bounds.width,
                h: bounds.height,
            },
            color: style.background,
            radius: style.corner_radius,
        });

        for label in self.titles.borrow().iter() {
            scene.nodes.push(SceneNode::Text {
                rect: label.frame,
                text: label.text.clone(),
                color: label.color,
                size: label.font.size,
                weight: label.font.weight,
            });
        }

        let indicator = self.indicator_frame();
        let indicator_radius = (style.corner_radius - style.indicator_inset).max(0.0);
        scene.nodes.push(SceneNode::Rect {
            rect: indicator,
            color: style.indicator_background,
            radius: indicator_radius,
        });

        scene.nodes.push(SceneNode::PushClip {
            rect: indicator,
            radius: indicator_radius,
        });
        for label in self.selected_titles.borrow().iter() {
            scene.nodes.push(SceneNode::Text {
                rect: label.frame,
                text: label.text.clone(),
                color: label.color,
                size: label.font.size,
                weight: label.font.weight,
            });
        }
        scene.nodes.push(SceneNode::PopClip);
    }
}
