//! Pure segment geometry.
//!
//! Every function in this module is a calculation from dimensions, counts,
//! and points to rectangles and indices. No widget state, no side effects;
//! the switch and its tests share these.

use segue_core::{Rect, Size, Vec2};

/// Frame of segment `index` for `count` equal-width segments inside
/// `bounds`, shrunk by `inset` on every side.
pub fn segment_frame(bounds: Size, inset: f32, count: usize, index: usize) -> Rect {
    let total_inset = 2.0 * inset;
    let width = (bounds.width - total_inset) / count as f32;
    Rect {
        x: index as f32 * width + inset,
        y: inset,
        w: width,
        h: bounds.height - total_inset,
    }
}

/// Index of the frame whose center is horizontally closest to `point`.
/// Ties resolve to the lowest index (stable argmin). Returns 0 for empty
/// input.
pub fn nearest_index<I>(frames: I, point: Vec2) -> usize
where
    I: IntoIterator<Item = Rect>,
{
    let mut best = 0usize;
    let mut best_d = f32::INFINITY;
    for (i, frame) in frames.into_iter().enumerate() {
        let d = (point.x - frame.center().x).abs();
        if d < best_d {
            best_d = d;
            best = i;
        }
    }
    best
}

/// Clamp a dragged indicator's x origin so the indicator stays inside the
/// inset bounds for any translation magnitude.
pub fn clamp_indicator_x(x: f32, bounds_width: f32, inset: f32, indicator_width: f32) -> f32 {
    x.min(bounds_width - inset - indicator_width).max(inset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 300.0,
        height: 44.0,
    };

    #[test]
    fn test_segment_frames_partition_bounds() {
        for &(inset, count) in &[(0.0f32, 2usize), (2.0, 3), (5.0, 4), (0.0, 7)] {
            let mut covered = inset;
            for i in 0..count {
                let f = segment_frame(BOUNDS, inset, count, i);
                assert!((f.x - covered).abs() < 1e-3, "gap before segment {i}");
                assert_eq!(f.y, inset);
                assert_eq!(f.h, BOUNDS.height - 2.0 * inset);
                covered += f.w;
            }
            assert!((covered + inset - BOUNDS.width).abs() < 1e-3);
        }
    }

    #[test]
    fn test_worked_example_three_segments() {
        // 3 segments, width 300, inset 0: each 100 wide, index 1 spans [100, 200]
        let f = segment_frame(BOUNDS, 0.0, 3, 1);
        assert_eq!(f.x, 100.0);
        assert_eq!(f.w, 100.0);
    }

    #[test]
    fn test_nearest_index_in_range_and_idempotent_at_centers() {
        let frames: Vec<Rect> = (0..3).map(|i| segment_frame(BOUNDS, 0.0, 3, i)).collect();
        for x in [-50.0, 0.0, 149.9, 150.1, 250.0, 400.0] {
            let i = nearest_index(frames.iter().copied(), Vec2 { x, y: 22.0 });
            assert!(i < 3);
        }
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(nearest_index(frames.iter().copied(), f.center()), i);
        }
        // Tap at x = 250 selects index 2
        assert_eq!(
            nearest_index(frames.iter().copied(), Vec2 { x: 250.0, y: 0.0 }),
            2
        );
    }

    #[test]
    fn test_nearest_index_tie_takes_first() {
        let frames: Vec<Rect> = (0..2).map(|i| segment_frame(BOUNDS, 0.0, 2, i)).collect();
        // x = 150 is equidistant from both centers (75 and 225)
        assert_eq!(
            nearest_index(frames.iter().copied(), Vec2 { x: 150.0, y: 0.0 }),
            0
        );
    }

    #[test]
    fn test_clamp_indicator_x() {
        assert_eq!(clamp_indicator_x(-1e6, 300.0, 2.0, 98.0), 2.0);
        assert_eq!(clamp_indicator_x(1e6, 300.0, 2.0, 98.0), 200.0);
        assert_eq!(clamp_indicator_x(50.0, 300.0, 2.0, 98.0), 50.0);
    }
}
