//! Math utility functions.

use crate::Component;

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < Component::EPSILON
}

/// Evaluate one RGB channel of an HSL color. `t` is the hue as a fraction of
/// a full turn, offset by a third of a turn for red and blue.
pub fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
