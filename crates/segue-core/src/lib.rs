//! # segue-core
//!
//! Host-toolkit independent building blocks for the segue segmented switch.
//! The widget in `segue-ui` consumes these; a host embeds the widget by
//! wiring three surfaces:
//!
//! - [`input::PointerEvent`] — pointer traffic in.
//! - [`scene::Scene`] — a flat display list out, replayed by whatever
//!   renderer the host already has.
//! - [`signal::Signal`] — observable values; subscribing to the widget's
//!   selection signal is the value-changed notification.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use segue_core::signal;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Note that `set` notifies subscribers unconditionally, even when the new
//! value equals the old one. Callers that want change-only notification
//! compare before calling `set`.
//!
//! ## Animation
//!
//! [`animation::AnimatedValue`] holds a value that eases toward a target.
//! The host drives it once per frame via `update()`; there is no internal
//! timer. Time comes from an installable [`animation::Clock`], so tests can
//! run the whole animation pipeline deterministically:
//!
//! ```rust
//! use segue_core::animation::*;
//! use web_time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut v = AnimatedValue::new(0.0f32, AnimationSpec::tween(Duration::from_secs(10), Easing::Linear));
//! v.set_target(10.0);
//! v.update_at(t0 + Duration::from_secs(5));
//! assert!((*v.get() - 5.0).abs() < 0.01);
//! ```

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod semantics;
pub mod signal;
pub mod tests;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use scene::*;
pub use semantics::*;
pub use signal::*;
