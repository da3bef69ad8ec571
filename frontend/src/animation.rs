use crate::config;

/// Fraction of the document scrolled, in `[0, 1]`. A page that fits in the
/// viewport reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || scroll_top.is_nan() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Maps `value` linearly from `input` onto `output`, clamping to the output
/// range. An empty input range maps everything to the output start.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if value.is_nan() || span == 0.0 || !span.is_finite() {
        return out_start;
    }

    let t = ((value - in_start) / span).clamp(0.0, 1.0);
    let mapped = out_start + t * (out_end - out_start);
    mapped.clamp(out_start.min(out_end), out_start.max(out_end))
}

/// Height of the scroll progress line, in percent of the viewport.
pub fn scroll_line_height(progress: f64) -> f64 {
    interpolate(progress, config::SCROLL_LINE_INPUT_RANGE, (0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn progress_at_top_and_bottom() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert!(approx(scroll_progress(500.0, 3000.0, 1000.0), 0.25));
    }

    #[test]
    fn progress_of_unscrollable_page_is_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn scroll_line_fills_over_first_fifth() {
        assert_eq!(scroll_line_height(0.0), 0.0);
        assert!(approx(scroll_line_height(0.1), 50.0));
        assert_eq!(scroll_line_height(0.2), 100.0);
        assert_eq!(scroll_line_height(0.75), 100.0);
    }

    #[test]
    fn descending_output_range() {
        assert!(approx(interpolate(0.25, (0.0, 1.0), (1.0, 0.0)), 0.75));
    }

    #[test]
    fn empty_input_range_maps_to_output_start() {
        assert_eq!(interpolate(5.0, (1.0, 1.0), (10.0, 20.0)), 10.0);
    }

    #[test]
    fn nan_maps_to_output_start() {
        assert_eq!(interpolate(f64::NAN, (0.0, 1.0), (3.0, 7.0)), 3.0);
    }

    proptest! {
        #[test]
        fn interpolate_stays_within_output_range(
            value in -1.0e6f64..1.0e6,
            in_start in -1.0e3f64..1.0e3,
            in_len in 1.0e-3f64..1.0e3,
            out_start in -1.0e3f64..1.0e3,
            out_end in -1.0e3f64..1.0e3,
        ) {
            let y = interpolate(value, (in_start, in_start + in_len), (out_start, out_end));
            prop_assert!(y >= out_start.min(out_end));
            prop_assert!(y <= out_start.max(out_end));
        }

        #[test]
        fn progress_is_a_fraction(
            top in -1.0e5f64..1.0e5,
            height in 0.0f64..1.0e5,
            viewport in 0.0f64..1.0e4,
        ) {
            let p = scroll_progress(top, height, viewport);
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}
