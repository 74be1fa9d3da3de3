//! The segmented switch widget state.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use segue_core::*;
use web_time::{Duration, Instant};

use crate::gestures::SwitchGestures;
use crate::label::{FontStyle, LabelArena, TitleLabel};
use crate::layout;
use crate::style::SwitchStyle;

/// Indicator animation defaults: a multi-segment jump overshoots with a
/// spring ("bounce"); a single-step move eases over without one.
pub const BOUNCE_DURATION: Duration = Duration::from_millis(300);
pub const BOUNCE_DAMPING: f32 = 0.75;
pub const NO_BOUNCE_DURATION: Duration = Duration::from_millis(200);

const BOUNCE_STIFFNESS: f32 = 200.0;

fn bounce_spec() -> AnimationSpec {
    AnimationSpec::spring_phys(BOUNCE_DAMPING, BOUNCE_STIFFNESS, BOUNCE_DURATION)
}

fn no_bounce_spec() -> AnimationSpec {
    AnimationSpec::tween(NO_BOUNCE_DURATION, Easing::Linear)
}

/// Construction-time configuration.
#[derive(Clone, Debug)]
pub struct SwitchConfig {
    pub titles: Vec<String>,
    pub initial_index: usize,
    pub style: SwitchStyle,
    pub bounds: Size,
}

impl SwitchConfig {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            initial_index: 0,
            style: SwitchStyle::default(),
            bounds: Size::default(),
        }
    }

    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    pub fn style(mut self, style: SwitchStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Size { width, height };
        self
    }
}

/// Retained state of one segmented switch.
///
/// Shared as `Rc` between the host's layout, input, and paint paths, like
/// any other widget state. All methods take `&self`; interior mutability
/// keeps the host-facing surface free of `&mut` plumbing.
pub struct SegmentedSwitchState {
    index: Signal<usize>,
    pub(crate) titles: RefCell<LabelArena>,
    pub(crate) selected_titles: RefCell<LabelArena>,
    indicator: RefCell<AnimatedValue<Rect>>,
    /// Indicator frame captured at drag begin; `Some` while a drag is live.
    drag_anchor: Cell<Option<Rect>>,
    bounds: Cell<Size>,
    style: RefCell<SwitchStyle>,
    panning_disabled: Cell<bool>,
    always_announces: Cell<bool>,
    gestures: RefCell<SwitchGestures>,
}

impl SegmentedSwitchState {
    /// Build a switch. Rejects fewer than two titles and an out-of-range
    /// initial index.
    pub fn new(config: SwitchConfig) -> Result<Rc<Self>, SwitchError> {
        let count = config.titles.len();
        if count < 2 {
            return Err(SwitchError::TooFewSegments { count });
        }
        if config.initial_index >= count {
            return Err(SwitchError::IndexOutOfRange {
                index: config.initial_index,
                count,
            });
        }

        let state = Rc::new_cyclic(|weak: &Weak<Self>| {
            let admit = {
                let w = weak.clone();
                Rc::new(move |p: Vec2| w.upgrade().is_some_and(|s| s.admits_drag(p)))
            };
            let tap = {
                let w = weak.clone();
                Rc::new(move |p: Vec2| {
                    if let Some(s) = w.upgrade() {
                        s.select(s.nearest_index(p), true);
                    }
                })
            };
            let drag_begin = {
                let w = weak.clone();
                Rc::new(move |_p: Vec2| {
                    if let Some(s) = w.upgrade() {
                        s.drag_began();
                    }
                })
            };
            let drag_move = {
                let w = weak.clone();
                Rc::new(move |tx: f32| {
                    if let Some(s) = w.upgrade() {
                        s.drag_changed(tx);
                    }
                })
            };
            let drag_end = {
                let w = weak.clone();
                Rc::new(move || {
                    if let Some(s) = w.upgrade() {
                        s.drag_ended();
                    }
                })
            };

            Self {
                index: signal(config.initial_index),
                titles: RefCell::new(build_labels(
                    &config.titles,
                    config.style.title_color,
                    config.style.title_font,
                )),
                selected_titles: RefCell::new(build_labels(
                    &config.titles,
                    config.style.selected_title_color,
                    config.style.selected_title_font,
                )),
                indicator: RefCell::new(AnimatedValue::new(Rect::default(), no_bounce_spec())),
                drag_anchor: Cell::new(None),
                bounds: Cell::new(config.bounds),
                style: RefCell::new(config.style),
                panning_disabled: Cell::new(false),
                always_announces: Cell::new(false),
                gestures: RefCell::new(SwitchGestures::new(
                    admit, tap, drag_begin, drag_move, drag_end,
                )),
            }
        });

        state.layout();
        Ok(state)
    }

    // ---- selection ------------------------------------------------------

    /// Current selected segment.
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Subscribe to value-changed notifications. Fires when the selection
    /// actually changes, or on every selection when
    /// [`set_always_announces`](Self::set_always_announces) is on.
    pub fn on_change(&self, f: impl Fn(usize) + 'static) {
        self.index.subscribe(move |i| f(*i));
    }

    /// Select a segment. Out-of-range indices are a programming error and
    /// panic; use [`try_select`](Self::try_select) for the recoverable form.
    pub fn select(&self, index: usize, animated: bool) {
        if let Err(e) = self.try_select(index, animated) {
            panic!("{e}");
        }
    }

    pub fn try_select(&self, index: usize, animated: bool) -> Result<(), SwitchError> {
        let count = self.segment_count();
        if index >= count {
            return Err(SwitchError::IndexOutOfRange { index, count });
        }

        let old = self.index.get();
        let target = self.segment_frame(index);
        {
            let mut indicator = self.indicator.borrow_mut();
            if !animated {
                indicator.snap_to(target);
            } else if index.abs_diff(old) > 1 {
                indicator.set_target_with(target, bounce_spec());
            } else {
                indicator.set_target_with(target, no_bounce_spec());
            }
        }

        if index != old || self.always_announces.get() {
            log::debug!("segmented switch: selection {old} -> {index}");
            self.index.set(index);
        }
        Ok(())
    }

    // ---- geometry -------------------------------------------------------

    /// Re-run layout for new bounds: every label frame in both layers is
    /// recomputed, and the indicator snaps to the selected segment unless a
    /// drag currently owns it.
    pub fn set_bounds(&self, bounds: Size) {
        self.bounds.set(bounds);
        self.layout();
    }

    pub fn bounds(&self) -> Size {
        self.bounds.get()
    }

    pub fn segment_count(&self) -> usize {
        self.titles.borrow().len()
    }

    pub fn segment_frame(&self, index: usize) -> Rect {
        layout::segment_frame(
            self.bounds.get(),
            self.style.borrow().indicator_inset,
            self.segment_count(),
            index,
        )
    }

    /// The indicator's current frame, including mid-animation and mid-drag
    /// values.
    pub fn indicator_frame(&self) -> Rect {
        *self.indicator.borrow().get()
    }

    /// Segment whose title center is horizontally nearest to `point`.
    pub fn nearest_index(&self, point: Vec2) -> usize {
        layout::nearest_index(self.titles.borrow().iter().map(|l| l.frame), point)
    }

    fn layout(&self) {
        let bounds = self.bounds.get();
        let inset = self.style.borrow().indicator_inset;
        let count = self.segment_count();

        for (i, label) in self.titles.borrow_mut().iter_mut().enumerate() {
            label.frame = layout::segment_frame(bounds, inset, count, i);
        }
        for (i, label) in self.selected_titles.borrow_mut().iter_mut().enumerate() {
            label.frame = layout::segment_frame(bounds, inset, count, i);
        }

        if self.drag_anchor.get().is_none() {
            let selected = layout::segment_frame(bounds, inset, count, self.index.get());
            self.indicator.borrow_mut().snap_to(selected);
        }
    }

    // ---- pointer input --------------------------------------------------

    /// Route one pointer event through the tap/pan recognizer.
    pub fn handle_pointer(&self, event: &PointerEvent) {
        self.gestures.borrow_mut().handle_pointer(event);
    }

    /// Drag admission: the touch must start inside the indicator, and
    /// panning must be enabled.
    fn admits_drag(&self, point: Vec2) -> bool {
        !self.panning_disabled.get() && self.indicator_frame().contains(point)
    }

    fn drag_began(&self) {
        self.drag_anchor.set(Some(self.indicator_frame()));
    }

    fn drag_changed(&self, translation_x: f32) {
        let Some(anchor) = self.drag_anchor.get() else {
            return;
        };
        let bounds = self.bounds.get();
        let inset = self.style.borrow().indicator_inset;
        let x = layout::clamp_indicator_x(anchor.x + translation_x, bounds.width, inset, anchor.w);
        // 1:1 tracking: no animation, no notification until release
        self.indicator.borrow_mut().snap_to(anchor.with_x(x));
    }

    fn drag_ended(&self) {
        if self.drag_anchor.take().is_none() {
            return;
        }
        let center = self.indicator_frame().center();
        self.select(self.nearest_index(center), true);
    }

    // ---- flags ----------------------------------------------------------

    /// When set, drags are refused at admission; taps keep working.
    pub fn set_panning_disabled(&self, disabled: bool) {
        self.panning_disabled.set(disabled);
    }

    /// When set, every selection announces, even re-selecting the current
    /// segment.
    pub fn set_always_announces(&self, always: bool) {
        self.always_announces.set(always);
    }

    // ---- style ----------------------------------------------------------

    pub fn style(&self) -> SwitchStyle {
        self.style.borrow().clone()
    }

    pub fn set_title_color(&self, color: Color) {
        self.style.borrow_mut().title_color = color;
        for label in self.titles.borrow_mut().iter_mut() {
            label.color = color;
        }
    }

    pub fn set_selected_title_color(&self, color: Color) {
        self.style.borrow_mut().selected_title_color = color;
        for label in self.selected_titles.borrow_mut().iter_mut() {
            label.color = color;
        }
    }

    pub fn set_title_font(&self, font: FontStyle) {
        self.style.borrow_mut().title_font = font;
        for label in self.titles.borrow_mut().iter_mut() {
            label.font = font;
        }
    }

    pub fn set_selected_title_font(&self, font: FontStyle) {
        self.style.borrow_mut().selected_title_font = font;
        for label in self.selected_titles.borrow_mut().iter_mut() {
            label.font = font;
        }
    }

    /// Outer corner radius. The indicator's radius is derived at paint time
    /// as `corner_radius - indicator_inset` so the two stay concentric.
    pub fn set_corner_radius(&self, radius: f32) {
        self.style.borrow_mut().corner_radius = radius;
    }

    pub fn set_indicator_inset(&self, inset: f32) {
        self.style.borrow_mut().indicator_inset = inset;
        self.layout();
    }

    pub fn set_indicator_background(&self, color: Color) {
        self.style.borrow_mut().indicator_background = color;
    }

    pub fn set_background(&self, color: Color) {
        self.style.borrow_mut().background = color;
    }

    // ---- titles ---------------------------------------------------------

    pub fn titles(&self) -> Vec<String> {
        self.titles.borrow().iter().map(|l| l.text.clone()).collect()
    }

    /// Replace the segment titles, rebuilding both label layers. Rejects
    /// fewer than two titles. A selection left out of range by a shorter
    /// list is clamped to the last segment, which announces.
    pub fn set_titles<I, S>(&self, titles: I) -> Result<(), SwitchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let count = titles.len();
        if count < 2 {
            return Err(SwitchError::TooFewSegments { count });
        }

        {
            let style = self.style.borrow();
            *self.titles.borrow_mut() = build_labels(&titles, style.title_color, style.title_font);
            *self.selected_titles.borrow_mut() = build_labels(
                &titles,
                style.selected_title_color,
                style.selected_title_font,
            );
        }

        let old = self.index.get();
        if old >= count {
            log::debug!("segmented switch: clamping selection {old} -> {}", count - 1);
            self.index.set(count - 1);
        }
        self.layout();
        Ok(())
    }

    // ---- frame loop -----------------------------------------------------

    /// Advance the indicator animation one frame using the installed clock;
    /// returns true while a transition is still running.
    pub fn tick(&self) -> bool {
        self.indicator.borrow_mut().update()
    }

    /// Deterministic variant of [`tick`](Self::tick) for tests.
    pub fn tick_at(&self, now: Instant) -> bool {
        self.indicator.borrow_mut().update_at(now)
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.borrow().is_animating()
    }

    /// Spec of the indicator's most recent transition; lets hosts (and
    /// tests) distinguish the bounce and no-bounce paths.
    pub fn indicator_spec(&self) -> AnimationSpec {
        self.indicator.borrow().spec()
    }

    // ---- accessibility --------------------------------------------------

    /// One group node followed by one node per segment.
    pub fn semantics(&self) -> Vec<Semantics> {
        let selected = self.index.get();
        let mut nodes = vec![Semantics::new(Role::SegmentedSwitch)];
        for (i, label) in self.titles.borrow().iter().enumerate() {
            nodes.push(Semantics {
                role: Role::Segment,
                label: Some(label.text.clone()),
                selected: i == selected,
                enabled: true,
            });
        }
        nodes
    }
}

impl std::fmt::Debug for SegmentedSwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedSwitchState")
            .field("index", &self.index.get())
            .field("titles", &self.titles())
            .field("bounds", &self.bounds.get())
            .field("indicator", self.indicator.borrow().get())
            .finish()
    }
}

fn build_labels(titles: &[String], color: Color, font: FontStyle) -> LabelArena {
    titles
        .iter()
        .map(|t| TitleLabel {
            text: t.clone(),
            color,
            font,
            frame: Rect::default(),
        })
        .collect()
}
