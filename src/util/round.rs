use crate::util::*;

/// Round `x` up to the nearest multiple of `base`.
///
/// `round_up(x, 1.0)` is the ordinary ceiling, `round_up(3.54, 0.2)` is 3.6.
/// A non-positive base is not checked.
pub fn round_up<F: Float>(x: F, base: F) -> F {
    (x / base).ceil() * base
}
