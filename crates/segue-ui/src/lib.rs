//! # segue-ui
//!
//! A sliding segmented switch: a row of titled segments with an indicator
//! that can be tapped or dragged between them. The widget is retained state
//! (see [`SegmentedSwitchState`]) that a host embeds by:
//!
//! - calling [`SegmentedSwitchState::set_bounds`] from its layout pass,
//! - routing pointer events to [`SegmentedSwitchState::handle_pointer`],
//! - ticking [`SegmentedSwitchState::tick`] once per frame while
//!   [`SegmentedSwitchState::is_animating`] is true,
//! - replaying the display list emitted by [`SegmentedSwitchState::paint`].
//!
//! ```rust
//! use segue_ui::{SegmentedSwitchState, SwitchConfig};
//!
//! let switch = SegmentedSwitchState::new(
//!     SwitchConfig::new(["Daily", "Weekly", "Monthly"]).bounds(300.0, 44.0),
//! )
//! .unwrap();
//!
//! switch.on_change(|i| println!("selected segment {i}"));
//! switch.select(2, false);
//! assert_eq!(switch.index(), 2);
//! ```

pub mod gestures;
pub mod label;
pub mod layout;
pub mod render;
pub mod style;
pub mod switch;

pub use gestures::*;
pub use label::*;
pub use layout::*;
pub use style::*;
pub use switch::*;
