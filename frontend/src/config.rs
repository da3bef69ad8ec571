use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Delay before the header slides in, in milliseconds.
pub const HEADER_ENTRANCE_DELAY_MS: u32 = 500;
/// Delay before the hero content fades in, in milliseconds.
pub const HERO_ENTRANCE_DELAY_MS: u32 = 700;

/// Scroll progress range over which the progress line grows from 0% to 100%.
pub const SCROLL_LINE_INPUT_RANGE: (f64, f64) = (0.0, 0.2);

/// Visible fraction of a section before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_log_verbosely() {
        assert_eq!(log_level(), Level::Debug);
    }

    #[test]
    fn scroll_line_range_is_a_fraction_of_the_page() {
        let (start, end) = SCROLL_LINE_INPUT_RANGE;
        assert!((0.0..end).contains(&start));
        assert!(end <= 1.0);
    }
}
