use crate::{Brightness, BRIGHTNESS_INCREMENT, BRIGHTNESS_MAX};

/// Next value of the rotating threshold, a sawtooth over `BRIGHTNESS_LEVELS` steps.
pub fn next_threshold(threshold: Brightness) -> Brightness {
    ((threshold as u16 + BRIGHTNESS_INCREMENT) % BRIGHTNESS_MAX) as Brightness
}

pub fn is_lit(brightness: Brightness, threshold: Brightness) -> bool {
    brightness > threshold
}
