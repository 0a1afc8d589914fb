use cfg_if::cfg_if;
use crate::MathError;

/// Convergence threshold of the Newton-Raphson square root, the iteration stops once the upper
/// and lower estimates are at most this far apart.
///
pub const SQRT_EPSILON: f32 = 0.00001;

/// The sine series stops adding terms once the next term is smaller than this.
///
pub const SERIES_EPSILON: f32 = 0.000001;

/// Value of pi used for the phase shift between sine and cosine.
///
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI_APPROX: f32 = 3.14159265;

/// Square root of `value`, or 0 if `value` is negative.
///
pub fn sqrt(value: f32) -> f32 {
    if value < 0.0 {
        cfg_if!{ if #[cfg(feature = "debug")] {
            log::debug!("Square root of negative value {}, falling back to 0", value);
        }}
        return 0.0;
    }
    sqrt_impl(value)
}

/// Like [`sqrt`] but refuses negative input instead of returning 0.
///
pub fn checked_sqrt(value: f32) -> Result<f32, MathError> {
    if value < 0.0 {
        return Err(MathError::NegativeRadicand);
    }
    Ok(sqrt_impl(value))
}

/// Sine of `angle` (in radians).
///
pub fn sin(angle: f32) -> f32 {
    sin_impl(angle)
}

/// Cosine of `angle` (in radians). Without the `precise` feature this is the sine shifted by a
/// quarter turn, so it shares the accuracy of [`sin`].
///
pub fn cos(angle: f32) -> f32 {
    cos_impl(angle)
}

cfg_if! {
    if #[cfg(feature = "precise")] {
        #[inline]
        fn sqrt_impl(value: f32) -> f32 {
            libm::sqrtf(value)
        }

        #[inline]
        fn sin_impl(angle: f32) -> f32 {
            libm::sinf(angle)
        }

        #[inline]
        fn cos_impl(angle: f32) -> f32 {
            libm::cosf(angle)
        }
    } else {
        #[inline]
        fn sqrt_impl(value: f32) -> f32 {
            newton_sqrt(value)
        }

        #[inline]
        fn sin_impl(angle: f32) -> f32 {
            taylor_sin(angle)
        }

        #[inline]
        fn cos_impl(angle: f32) -> f32 {
            taylor_sin(angle + PI_APPROX / 2.0)
        }
    }
}

/// Newton-Raphson (Babylonian) square root for non-negative input.
///
/// Keeps an upper estimate `x` and a lower estimate `y = value / x` and averages them until they
/// are within [`SQRT_EPSILON`] of each other. The result is the upper estimate, so it is never
/// below the true root by more than rounding. Negative input is not guarded here, use [`sqrt`].
///
pub fn newton_sqrt(value: f32) -> f32 {
    if value == 0.0 {
        return 0.0;
    }

    // The upper estimate has to start above the root, which for values below one means starting
    // from one rather than from the value itself.
    let (mut x, mut y) = if value < 1.0 { (1.0, value) } else { (value, 1.0) };

    while x - y > SQRT_EPSILON {
        let next = (x + y) / 2.0;

        // Once x and y are neighbouring floats the average rounds back onto x and we would spin
        // forever, the estimate cannot get any better at this point.
        if next >= x {
            break;
        }
        x = next;
        y = value / x;
    }
    x
}

/// Sine through its Taylor series around zero: `angle - angle^3/3! + angle^5/5! - ...`
///
/// There is no range reduction, so the result drifts away from the real sine as `angle` moves
/// further from zero (it is fine within a couple of turns). When `angle` is so large that a term
/// overflows the series cannot be evaluated and NaN is returned.
///
pub fn taylor_sin(angle: f32) -> f32 {
    if !angle.is_finite() {
        return f32::NAN;
    }

    let angle_2 = angle * angle;
    let mut term = angle;
    let mut sum = 0.0;
    let mut n = 1.0;

    while libm::fabsf(term) >= SERIES_EPSILON {
        if !term.is_finite() {
            cfg_if!{ if #[cfg(feature = "debug")] {
                log::debug!("Sine series overflowed for angle {}", angle);
            }}
            return f32::NAN;
        }
        sum += term;

        // Next odd term: multiply by -angle^2 / ((n + 1) * (n + 2))
        term = term * -angle_2 / ((n + 1.0) * (n + 2.0));
        n += 2.0;
    }
    sum
}
