#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Vec2;
    use crate::animation::*;
    use crate::signal::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.set(42); // set notifies unconditionally
        assert_eq!(*seen.borrow(), vec![42, 42]);
    }

    #[test]
    fn test_signal_subscriber_may_read_back() {
        let sig = signal(1);
        let observed = std::rc::Rc::new(std::cell::Cell::new(0));

        let sig2 = sig.clone();
        let observed_clone = observed.clone();
        sig.subscribe(move |_| observed_clone.set(sig2.get()));

        sig.set(7);
        assert_eq!(observed.get(), 7);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nonsense"), Color::BLACK);
    }

    #[test]
    fn test_rect_contains_and_center() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.center(), Vec2 { x: 60.0, y: 35.0 });
        assert_eq!(rect.with_x(0.0).x, 0.0);
        assert_eq!(rect.with_x(0.0).w, 100.0);
    }

    #[test]
    fn test_animation_deterministic() {
        // Long duration so the real-clock gap between `Instant::now()` here
        // and the timestamp `set_target` records stays negligible.
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_secs(100), Easing::Linear),
        );
        a.set_target(10.0);

        assert!(a.update_at(t0 + Duration::from_secs(25)));
        assert!((*a.get() - 2.5).abs() < 0.01);

        let cont = a.update_at(t0 + Duration::from_secs(100));
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_retarget_restarts_from_current_position() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_secs(100), Easing::Linear),
        );
        a.set_target(10.0);
        a.update_at(t0 + Duration::from_secs(50));
        assert!((*a.get() - 5.0).abs() < 0.01);

        // New request supersedes the in-flight one, starting at ~5.0
        a.set_target_with(
            0.0,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.update_at(t0 + Duration::from_secs(200));
        assert!((*a.get()).abs() < 0.001);
    }

    #[test]
    fn test_snap_cancels_animation() {
        let mut a = AnimatedValue::new(
            Rect::default(),
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(Rect {
            x: 100.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        });
        assert!(a.is_animating());

        let snapped = Rect {
            x: 50.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        a.snap_to(snapped);
        assert!(!a.is_animating());
        assert_eq!(*a.get(), snapped);
        assert_eq!(*a.target(), snapped);
    }

    #[test]
    fn test_rect_interpolation() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 40.0,
        };
        let b = Rect {
            x: 200.0,
            y: 0.0,
            w: 100.0,
            h: 40.0,
        };
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.x, 100.0);
        assert_eq!(mid.w, 100.0);
    }

    #[test]
    fn test_spring_easing_settles() {
        let easing = Easing::Spring {
            damping: 0.75,
            stiffness: 200.0,
        };
        // Underdamped: must overshoot somewhere and stay finite
        let mut overshoot = false;
        for i in 0..=100 {
            let v = easing.interpolate(i as f32 / 100.0);
            assert!(v.is_finite());
            if v > 1.0 {
                overshoot = true;
            }
        }
        assert!(overshoot);
    }
}
