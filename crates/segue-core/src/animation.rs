use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring { damping: f32, stiffness: f32 },
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::Spring { damping, stiffness } => {
                let omega = (stiffness / damping).sqrt();
                let zeta = damping / (2.0 * (stiffness * damping).sqrt());

                if zeta < 1.0 {
                    // Underdamped closed form; time axis stretched so the
                    // overshoot lands inside [0, 1].
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let t = t * 2.0;
                    1.0 - ((-zeta * omega * t).exp() * (omega_d * t).cos())
                } else {
                    // Critically damped or stiffer: ease-out is close enough
                    t * (2.0 - t)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn spring_phys(damping: f32, stiffness: f32, duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::Spring { damping, stiffness },
            delay: Duration::ZERO,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for crate::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        crate::Color(
            (self.0 as f32 + (other.0 as f32 - self.0 as f32) * t) as u8,
            (self.1 as f32 + (other.1 as f32 - self.1 as f32) * t) as u8,
            (self.2 as f32 + (other.2 as f32 - self.2 as f32) * t) as u8,
            (self.3 as f32 + (other.3 as f32 - self.3 as f32) * t) as u8,
        )
    }
}

impl Interpolate for crate::Rect {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        crate::Rect {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            w: self.w.interpolate(&other.w, t),
            h: self.h.interpolate(&other.h, t),
        }
    }
}

// Animation clock
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

static CLOCK: RwLock<Option<Arc<dyn Clock>>> = RwLock::new(None);

/// Install the animation clock, replacing any previous one. Hosts install
/// `SystemClock`; tests install a `TestClock`. Without an installed clock,
/// `Instant::now()` is used directly.
pub fn set_clock(clock: Arc<dyn Clock>) {
    *CLOCK.write() = Some(clock);
}

pub(crate) fn now() -> Instant {
    CLOCK
        .read()
        .as_ref()
        .map(|c| c.now())
        .unwrap_or_else(Instant::now)
}

/// A clock tests can drive deterministically.
pub struct TestClock {
    t: Mutex<Instant>,
}

impl TestClock {
    pub fn at(t: Instant) -> Arc<Self> {
        Arc::new(Self { t: Mutex::new(t) })
    }
    pub fn advance(&self, d: Duration) {
        *self.t.lock() += d;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        *self.t.lock()
    }
}

/// A value that eases toward its target. The owner calls `update` once per
/// frame; a retarget mid-flight restarts from the current (mid-flight)
/// position, superseding the running transition.
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Animate toward `target` with the value's current spec.
    pub fn set_target(&mut self, target: T) {
        let spec = self.spec;
        self.set_target_with(target, spec);
    }

    /// Animate toward `target` with a per-transition spec.
    pub fn set_target_with(&mut self, target: T, spec: AnimationSpec) {
        self.start = self.current.clone();
        self.target = target;
        self.spec = spec;
        self.start_time = Some(now());
    }

    /// Jump to `value` immediately, cancelling any running transition.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
    }

    /// Advance using the installed clock; returns true while animating.
    pub fn update(&mut self) -> bool {
        self.update_at(now())
    }

    /// Advance to an explicit instant; returns true while animating.
    pub fn update_at(&mut self, now: Instant) -> bool {
        if let Some(start) = self.start_time {
            let elapsed = now.saturating_duration_since(start);

            if elapsed < self.spec.delay {
                return true;
            }

            let animation_time = elapsed - self.spec.delay;

            if animation_time >= self.spec.duration {
                self.current = self.target.clone();
                self.start_time = None;
                return false;
            }

            let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
            let eased_t = self.spec.easing.interpolate(t);
            self.current = self.start.interpolate(&self.target, eased_t);

            true
        } else {
            false
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }
}
