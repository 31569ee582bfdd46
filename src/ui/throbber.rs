//! Spinner and pulse glyphs driven by elapsed scene time.
//!
//! Frames are picked from the scene's own clock instead of the wall clock,
//! so a rendered frame is fully determined by the state being drawn.

use std::time::Duration;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAME_MS: u128 = 100;
const BLINK_MS: u128 = 500;

/// Cycles every 100ms, a full rotation per second.
pub fn spinner_char(elapsed: Duration) -> char {
    SPINNER[((elapsed.as_millis() / SPINNER_FRAME_MS) % SPINNER.len() as u128) as usize]
}

/// On for half a second, off for half a second.
pub fn blink_on(elapsed: Duration) -> bool {
    (elapsed.as_millis() / BLINK_MS) % 2 == 0
}

/// The "live" dot next to streaming telemetry.
pub fn pulse_glyph(elapsed: Duration) -> &'static str {
    if blink_on(elapsed) {
        "●"
    } else {
        "○"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_every_100ms() {
        assert_eq!(spinner_char(Duration::ZERO), '⠋');
        assert_eq!(spinner_char(Duration::from_millis(99)), '⠋');
        assert_eq!(spinner_char(Duration::from_millis(100)), '⠙');
        assert_eq!(spinner_char(Duration::from_millis(1000)), '⠋');
    }

    #[test]
    fn test_pulse_alternates() {
        assert_eq!(pulse_glyph(Duration::from_millis(10)), "●");
        assert_eq!(pulse_glyph(Duration::from_millis(510)), "○");
        assert_eq!(pulse_glyph(Duration::from_millis(1010)), "●");
    }
}
