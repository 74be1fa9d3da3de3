//! Tap/pan recognition over raw pointer events.
//!
//! The recognizer is deliberately dumb: it discriminates a tap from a drag
//! and forwards everything else to callbacks. Whether a drag may start at
//! all is decided by an admission callback the owner supplies; for the
//! switch that is "the touch lies inside the indicator and panning is
//! enabled".

use std::rc::Rc;

use segue_core::{PointerEvent, PointerEventKind, Vec2};

/// Movement below this (in local units) still counts as a tap on release.
const TAP_SLOP: f32 = 10.0;

enum GesturePhase {
    Idle,
    /// Down happened but drag was not admitted; may become a tap.
    Pressed { start: Vec2 },
    /// Drag admitted at Down; translation is measured from `start`.
    Dragging { start: Vec2 },
}

pub struct SwitchGestures {
    admit_drag: Rc<dyn Fn(Vec2) -> bool>,
    on_tap: Rc<dyn Fn(Vec2)>,
    on_drag_begin: Rc<dyn Fn(Vec2)>,
    on_drag_move: Rc<dyn Fn(f32)>,
    on_drag_end: Rc<dyn Fn()>,
    phase: GesturePhase,
}

impl SwitchGestures {
    pub fn new(
        admit_drag: Rc<dyn Fn(Vec2) -> bool>,
        on_tap: Rc<dyn Fn(Vec2)>,
        on_drag_begin: Rc<dyn Fn(Vec2)>,
        on_drag_move: Rc<dyn Fn(f32)>,
        on_drag_end: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            admit_drag,
            on_tap,
            on_drag_begin,
            on_drag_move,
            on_drag_end,
            phase: GesturePhase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match event.event {
            PointerEventKind::Down(_) => {
                if (self.admit_drag)(event.position) {
                    self.phase = GesturePhase::Dragging {
                        start: event.position,
                    };
                    (self.on_drag_begin)(event.position);
                } else {
                    self.phase = GesturePhase::Pressed {
                        start: event.position,
                    };
                }
            }
            PointerEventKind::Move => {
                if let GesturePhase::Dragging { start } = self.phase {
                    (self.on_drag_move)(event.position.x - start.x);
                }
            }
            PointerEventKind::Up(_) => {
                match std::mem::replace(&mut self.phase, GesturePhase::Idle) {
                    GesturePhase::Dragging { .. } => (self.on_drag_end)(),
                    GesturePhase::Pressed { start } => {
                        let dx = event.position.x - start.x;
                        let dy = event.position.y - start.y;
                        if (dx * dx + dy * dy).sqrt() < TAP_SLOP {
                            (self.on_tap)(event.position);
                        }
                    }
                    GesturePhase::Idle => {}
                }
            }
            PointerEventKind::Cancel => {
                // Cancel ends a drag the same way a release does
                if let GesturePhase::Dragging { .. } =
                    std::mem::replace(&mut self.phase, GesturePhase::Idle)
                {
                    (self.on_drag_end)();
                }
            }
            PointerEventKind::Enter | PointerEventKind::Leave => {}
        }
    }
}
