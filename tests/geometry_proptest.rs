//! Property-based tests for the geometry and color codec invariants.

use framekit::{Aspect, Color, Rect, Size, Slider, decode, encode};

const REL: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL * a.abs().max(b.abs()).max(1.0)
}

fn ratio(s: Size) -> f64 {
    s.width / s.height
}

proptest::proptest! {
    /// grow keeps the aspect ratio and covers the target on both axes.
    #[test]
    fn grow_contains_target(
        sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        tw in 1.0f64..5000.0, th in 1.0f64..5000.0
    ) {
        let s = Size::new(sw, sh);
        let t = Size::new(tw, th);
        let r = s.grow(t).unwrap();
        assert!(close(ratio(r), ratio(s)), "{s:?} grown to {r:?}");
        assert!(r.width >= tw * (1.0 - REL), "{s:?} grown to {r:?} misses {t:?}");
        assert!(r.height >= th * (1.0 - REL), "{s:?} grown to {r:?} misses {t:?}");
    }

    /// shrink keeps the aspect ratio and fits inside the target.
    #[test]
    fn shrink_fits_target(
        sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        tw in 1.0f64..5000.0, th in 1.0f64..5000.0
    ) {
        let s = Size::new(sw, sh);
        let t = Size::new(tw, th);
        let r = s.shrink(t).unwrap();
        assert!(close(ratio(r), ratio(s)), "{s:?} shrunk to {r:?}");
        assert!(r.width <= tw * (1.0 + REL), "{s:?} shrunk to {r:?} exceeds {t:?}");
        assert!(r.height <= th * (1.0 + REL), "{s:?} shrunk to {r:?} exceeds {t:?}");
    }

    /// satisfy_min/max never move a size that already meets the bound,
    /// and always meet it afterwards.
    #[test]
    fn satisfy_bounds(
        sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        bw in 1.0f64..5000.0, bh in 1.0f64..5000.0
    ) {
        let s = Size::new(sw, sh);
        let b = Size::new(bw, bh);
        let min = s.satisfy_min_size(b).unwrap();
        assert!(min.width >= bw * (1.0 - REL) && min.height >= bh * (1.0 - REL));
        if sw >= bw && sh >= bh {
            assert_eq!(min, s);
        }
        let max = s.satisfy_max_size(b).unwrap();
        assert!(max.width <= bw * (1.0 + REL) && max.height <= bh * (1.0 + REL));
        if sw <= bw && sh <= bh {
            assert_eq!(max, s);
        }
    }

    /// Cropping lands on the target aspect inside the original, and
    /// expanding the result again changes nothing.
    #[test]
    fn crop_then_expand_is_stable(
        sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        a in 0.2f64..5.0
    ) {
        let s = Size::new(sw, sh);
        let target = Aspect::new(a).unwrap();
        let cropped = s.crop(target).unwrap();
        assert!(close(ratio(cropped), a));
        assert!(cropped.width <= sw * (1.0 + REL) && cropped.height <= sh * (1.0 + REL));
        let expanded = cropped.expand(target).unwrap();
        assert_eq!(expanded, cropped, "{cropped:?} expanded to {expanded:?}");
    }

    /// Expanding contains the original and lands on the target aspect.
    #[test]
    fn expand_contains_original(
        sw in 1.0f64..5000.0, sh in 1.0f64..5000.0,
        a in 0.2f64..5.0
    ) {
        let s = Size::new(sw, sh);
        let expanded = s.expand(Aspect::new(a).unwrap()).unwrap();
        assert!(close(ratio(expanded), a));
        assert!(expanded.width >= sw * (1.0 - REL) && expanded.height >= sh * (1.0 - REL));
    }

    /// constrain keeps the origin at or past the bounds' origin and the far
    /// edges at or before the bounds' far edges.
    #[test]
    fn constrain_stays_inside(
        x in -2000.0f64..2000.0, y in -2000.0f64..2000.0,
        w in 1.0f64..3000.0, h in 1.0f64..3000.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
        bw in 1.0f64..3000.0, bh in 1.0f64..3000.0
    ) {
        let bounds = Rect::new(bx, by, bw, bh);
        let r = Rect::new(x, y, w, h).constrain(bounds);
        let eps = 1e-9;
        assert!(r.x >= bx && r.y >= by);
        assert!(r.x + r.width <= bx + bw + eps, "{r:?} past right edge of {bounds:?}");
        assert!(r.y + r.height <= by + bh + eps, "{r:?} past bottom edge of {bounds:?}");
        assert!(r.width <= w && r.height <= h);
    }

    /// centered_resize preserves the center point.
    #[test]
    fn centered_resize_keeps_center(
        x in -2000.0f64..2000.0, y in -2000.0f64..2000.0,
        w in 0.0f64..3000.0, h in 0.0f64..3000.0,
        nw in 0.0f64..3000.0, nh in 0.0f64..3000.0
    ) {
        let r = Rect::new(x, y, w, h);
        let n = r.centered_resize(Size::new(nw, nh));
        assert_eq!(n.size(), Size::new(nw, nh));
        assert!((n.x + nw / 2.0 - (x + w / 2.0)).abs() < 1e-9);
        assert!((n.y + nh / 2.0 - (y + h / 2.0)).abs() < 1e-9);
    }

    /// For values inside the range the knob stays on the track.
    #[test]
    fn knob_stays_on_track(
        x in -500.0f64..500.0, width in 20.0f64..2000.0,
        thickness in 0.0f64..20.0,
        min in -100.0f64..100.0, span in 0.001f64..1000.0, t in 0.0f64..=1.0
    ) {
        let slider = Slider {
            frame: Rect::new(x, 0.0, width, 20.0),
            knob_thickness: thickness,
            value: min + span * t,
            min,
            max: min + span,
        };
        let pos = slider.knob_position().unwrap();
        let eps = 1e-6;
        assert!(pos >= x + thickness / 2.0 - eps);
        assert!(pos <= x + width - thickness / 2.0 + eps);
    }

    /// Encoding then decoding gives back the same bits.
    #[test]
    fn color_round_trip(
        r in 0.0f64..=1.0, g in 0.0f64..=1.0,
        b in 0.0f64..=1.0, a in 0.0f64..=1.0
    ) {
        let c = Color::rgba(r, g, b, a);
        assert_eq!(decode(&encode(&c)), Ok(c));
    }

    /// decode never panics on arbitrary input.
    #[test]
    fn decode_never_panics(s in "\\PC*") {
        let _ = decode(&s);
    }

    /// Anything other than three or four numeric segments is rejected.
    #[test]
    fn decode_rejects_wrong_count(values in proptest::collection::vec(0.0f64..=1.0, 0..8)) {
        let s = values
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join("/");
        let decoded = decode(&s);
        match values.len() {
            3 | 4 => assert!(decoded.is_ok(), "{s:?} rejected"),
            _ => assert!(decoded.is_err(), "{s:?} accepted"),
        }
    }
}
