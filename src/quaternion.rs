use core::ops::{Add, Div, Mul};
use bytemuck::{Pod, Zeroable};
use cfg_if::cfg_if;
use crate::*;

/// Scalar part `w` plus vector part `(x, y, z)`. Represents a rotation when it has a magnitude of
/// one, but nothing forces that; every operation below also works on non-unit quaternions.
///
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        let [w, x, y, z] = values;
        Self { w, x, y, z }
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        [q.w, q.x, q.y, q.z]
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    pub const fn zero() -> Self {
        Quaternion::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub const fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Constructs a quaternion from a scalar (w) and a vector (x, y, z)
    ///
    pub fn from_parts(w: f32, vector: Vector3) -> Self {
        Quaternion {
            w,
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }

    /// Rotation of `angle` radians around `axis`. The axis is expected to be normalized already,
    /// it is used as is.
    ///
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let half_angle = angle * 0.5;
        Quaternion::from_parts(
            elementary::cos(half_angle),
            axis * elementary::sin(half_angle),
        )
    }

    /// The (x, y, z) part.
    ///
    #[inline]
    pub fn vector_part(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Clone/copy in place option to replace the current values with those of the other quaternion
    ///
    #[inline]
    pub fn replace(&mut self, other: &Quaternion) {
        self.w = other.w;
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Get the magnitude of the quaternion.
    ///
    #[inline]
    pub fn magnitude(&self) -> f32 {
        elementary::sqrt(self.magnitude_squared())
    }

    /// Normalize the quaternion to make it a unit quaternion, a quaternion with zero magnitude
    /// gives back the zero quaternion.
    ///
    pub fn normalize(&self) -> Quaternion {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            cfg_if!{ if #[cfg(feature = "debug")] {
                log::debug!("Normalizing zero quaternion, falling back to zero");
            }}
            return Quaternion::zero();
        }
        *self / magnitude
    }

    /// Same as `normalize` but reports a zero magnitude as an error.
    ///
    pub fn try_normalize(&self) -> Result<Quaternion, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    /// Compute the conjugate of the quaternion.
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// The multiplicative inverse, i.e. the conjugate divided by the squared magnitude. For unit
    /// quaternions this equals the conjugate. The zero quaternion has no inverse and gives back
    /// the zero quaternion.
    ///
    pub fn inverse(&self) -> Quaternion {
        let magnitude_2 = self.magnitude_squared();
        if magnitude_2 == 0.0 {
            cfg_if!{ if #[cfg(feature = "debug")] {
                log::debug!("Inverting zero quaternion, falling back to zero");
            }}
            return Quaternion::zero();
        }
        self.conjugate() * (1.0 / magnitude_2)
    }

    /// Same as `inverse` but reports a zero magnitude as an error.
    ///
    pub fn try_inverse(&self) -> Result<Quaternion, MathError> {
        let magnitude_2 = self.magnitude_squared();
        if magnitude_2 == 0.0 {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(self.conjugate() * (1.0 / magnitude_2))
    }

    /// Rotates a vector with `q * v * q^-1`.
    ///
    /// This uses the full inverse rather than the conjugate, so it also rotates correctly with a
    /// quaternion that is not normalized (its scale cancels against the inverse).
    ///
    pub fn rotate(&self, vector: &Vector3) -> Vector3 {
        // Convert the vector into a quaternion with w = 0
        let vector_quat = Quaternion::from_parts(0.0, *vector);

        let rotated_quat = self * vector_quat * self.inverse();

        rotated_quat.vector_part()
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        libm::fabsf(self.w - other.w) <= tol
            && libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }

    /// Quaternion multiplication (Hamilton product). Not commutative, `a * b` first applies the
    /// rotation `b` and then `a`.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// The components as a flat array in the order w, x, y, z.
    ///
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref::<Quaternion, [f32; 4]>(self)
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut::<Quaternion, [f32; 4]>(self)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}

impl Add for Quaternion
{
    type Output = Self;

    /// Component wise sum. Note that the sum of two rotations is generally not a rotation.
    ///
    fn add(self, other: Self) -> Self::Output {
        Quaternion {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Mul<f32> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Div<f32> for Quaternion
{
    type Output = Self;

    fn div(self, other: f32) -> Self::Output {
        Quaternion {
            w: self.w / other,
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
