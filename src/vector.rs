use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use bytemuck::{Pod, Zeroable};
use cfg_if::cfg_if;
use crate::{elementary, MathError};

/// A point or direction in 2D space.
///
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector2
{
    pub x: f32,
    pub y: f32,
}

/// A point or direction in 3D space, also used as the rotation axis for quaternions.
///
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector3
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector. Despite the shared field names this is not a quaternion and there is no
/// conversion between the two.
///
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector4
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Everything the vector types have in common, they only differ in their number of components.
///
macro_rules! impl_vector {
    ($name:ident, $n:literal, $($field:ident),+) => {
        impl $name
        {
            pub const fn new($($field: f32),+) -> Self {
                $name { $($field),+ }
            }

            /// Returns a zero vector.
            ///
            pub const fn zero() -> Self {
                $name { $($field: 0.0),+ }
            }

            /// Take the dot product of two vectors.
            ///
            pub fn dot(&self, other: &$name) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            #[inline]
            pub fn magnitude_squared(&self) -> f32 {
                self.dot(self)
            }

            /// Calculate the length/magnitude of the vector
            ///
            pub fn magnitude(&self) -> f32 {
                elementary::sqrt(self.magnitude_squared())
            }

            /// Normalize the vector. A vector with a magnitude of exactly zero gives back the zero
            /// vector, anything else (no matter how small) gets divided by its magnitude.
            ///
            pub fn normalize(&self) -> $name {
                let mag = self.magnitude();
                if mag == 0.0 {
                    cfg_if!{ if #[cfg(feature = "debug")] {
                        log::debug!("Normalizing zero length {}, falling back to zero", stringify!($name));
                    }}
                    return $name::zero();
                }
                *self / mag
            }

            /// Same as `normalize` but reports a zero magnitude as an error.
            ///
            pub fn try_normalize(&self) -> Result<$name, MathError> {
                let mag = self.magnitude();
                if mag == 0.0 {
                    return Err(MathError::ZeroMagnitude);
                }
                Ok(*self / mag)
            }

            /// Approximate equality check with a given tolerance.
            pub fn approx_eq(&self, other: &$name, tol: f32) -> bool {
                true $(&& libm::fabsf(self.$field - other.$field) <= tol)+
            }

            /// Replaces the value with the given vector, this essentially clones the other vector
            /// in place
            ///
            #[inline]
            pub fn replace(&mut self, other: &$name) {
                $(self.$field = other.$field;)+
            }

            /// The components as a flat array, in declared field order.
            ///
            #[inline]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref::<$name, [f32; $n]>(self)
            }

            #[inline]
            pub fn as_mut_array(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut::<$name, [f32; $n]>(self)
            }

            /// Raw bytes of the components, e.g. for copying into a vertex buffer.
            ///
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(values: [f32; $n]) -> Self {
                let [$($field),+] = values;
                $name { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                [$(v.$field),+]
            }
        }

        impl Add for $name
        {
            type Output = Self;

            fn add(self, other: Self) -> Self::Output {
                $name { $($field: self.$field + other.$field),+ }
            }
        }

        impl AddAssign for $name
        {
            fn add_assign(&mut self, other: Self) {
                $(self.$field += other.$field;)+
            }
        }

        impl Sub for $name
        {
            type Output = Self;

            fn sub(self, other: Self) -> Self::Output {
                $name { $($field: self.$field - other.$field),+ }
            }
        }

        impl SubAssign for $name
        {
            fn sub_assign(&mut self, other: Self) {
                $(self.$field -= other.$field;)+
            }
        }

        impl Neg for $name
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                $name { $($field: -self.$field),+ }
            }
        }

        impl Mul<f32> for $name
        {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self::Output {
                $name { $($field: self.$field * scalar),+ }
            }
        }

        impl MulAssign<f32> for $name
        {
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$field *= scalar;)+
            }
        }

        impl Div<f32> for $name
        {
            type Output = Self;

            fn div(self, scalar: f32) -> Self::Output {
                $name { $($field: self.$field / scalar),+ }
            }
        }

        impl DivAssign<f32> for $name
        {
            fn div_assign(&mut self, scalar: f32) {
                $(self.$field /= scalar;)+
            }
        }
    };
}

impl_vector!(Vector2, 2, x, y);
impl_vector!(Vector3, 3, x, y, z);
impl_vector!(Vector4, 4, x, y, z, w);

impl Vector3
{
    /// Get the cross product of two vectors.
    ///
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}
