use std::fmt;

use crate::{
    error::Error,
    matrix::Matrix,
    traits::{NegOne, Number, One, Sqrt, Zero},
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 5-dimensional vector.
pub type Vec5<T> = Vector<T, 5>;
/// A 5-dimensional vector with [`f32`] elements.
pub type Vec5f = Vec5<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// A [`Vector`] is a thin wrapper around a single-column [`Matrix`]. It
/// forwards equality and the compound-assignment arithmetic to the wrapped
/// matrix and adds the operations that only make sense for a column of
/// scalars: geometric length, normalization, dot and cross products, and the
/// element-wise product.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`], [`vec4`] and [`vec5`] functions
///   directly create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the
///   index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation,
///   or from runtime slices using [`Vector::try_from_slice`].
/// - [`Vector::extend`] and [`Vector::prepend`] build an `N`-element vector
///   out of an `N - 1`-element vector plus one more element, so known
///   components do not have to be restated.
/// - The [`Default`] implementation initializes each element with its default
///   value.
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones.
/// - For 2-, 3- and 4-dimensional vectors, `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction; 3-dimensional vectors additionally have
///   [`NEG_Z`][Self::NEG_Z].
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields
///   `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays and
///   panic when out of bounds; [`Vector::at`] and [`Vector::at_mut`] return a
///   `Result` instead.
/// - [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   elements.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) Matrix<T, N, 1>);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    const ZERO_CELL: [T; 1] = [T::ZERO];

    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self(Matrix([Self::ZERO_CELL; N]));
}

impl<T: One, const N: usize> Vector<T, N> {
    const ONE_CELL: [T; 1] = [T::ONE];

    /// A vector with each element initialized to 1.
    ///
    /// This uses [`T::ONE`][One::ONE] as the value for all elements.
    pub const ONE: Self = Self(Matrix([Self::ONE_CELL; N]));
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self(Matrix([[T::ONE], [T::ZERO]]));
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self(Matrix([[T::ZERO], [T::ONE]]));
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self(Matrix([[T::ONE], [T::ZERO], [T::ZERO]]));
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self(Matrix([[T::ZERO], [T::ONE], [T::ZERO]]));
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self(Matrix([[T::ZERO], [T::ZERO], [T::ONE]]));
}

impl<T: Zero + NegOne> Vector<T, 3> {
    /// A unit vector pointing in the negative Z direction.
    pub const NEG_Z: Self = Self(Matrix([[T::ZERO], [T::ZERO], [T::NEG_ONE]]));
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self(Matrix([[T::ONE], [T::ZERO], [T::ZERO], [T::ZERO]]));
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self(Matrix([[T::ZERO], [T::ONE], [T::ZERO], [T::ZERO]]));
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self(Matrix([[T::ZERO], [T::ZERO], [T::ONE], [T::ZERO]]));
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self(Matrix([[T::ZERO], [T::ZERO], [T::ZERO], [T::ONE]]));
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(Matrix::splat(elem))
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(Matrix::from_fn(|row, _| cb(row)))
    }

    /// Creates a vector from a runtime slice of elements.
    ///
    /// Fails with [`Error::ElementCount`] unless the slice holds exactly `N`
    /// elements.
    pub fn try_from_slice(elems: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        Matrix::try_from_slice(elems).map(Self)
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::OutOfBounds`] when `index >= N`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.0.at(index, 0)
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::OutOfBounds`] when `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.0.at_mut(index, 0)
    }

    /// Returns the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// Returns the underlying elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }

    /// Converts this vector into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0 .0.map(|[elem]| elem)
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    ///
    /// For integer elements the square root truncates towards zero, following
    /// the host integer square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Fails with [`Error::ZeroLength`] when the vector has length zero, for
    /// floating-point elements as well; the degenerate case is reported at
    /// the call site instead of quietly turning into infinities or NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize().unwrap();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec3f::ZERO.normalize().is_err());
    /// ```
    pub fn normalize(self) -> Result<Self, Error>
    where
        T: Number + Sqrt + std::ops::DivAssign,
    {
        if self.length2() == T::ZERO {
            return Err(Error::ZeroLength);
        }
        Ok(self / self.length())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T> Vector<T, 1> {
    /// Appends another value to the vector, yielding a vector with 2
    /// dimensions.
    pub fn extend(self, last: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [x, last].into()
    }

    /// Prepends another value to the vector, yielding a vector with 2
    /// dimensions.
    pub fn prepend(self, first: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        [first, x].into()
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, last: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, last].into()
    }

    /// Prepends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = vec2(-1.0, 2.0).prepend(5.0);
    /// assert_eq!(v, vec3(5.0, -1.0, 2.0));
    /// ```
    pub fn prepend(self, first: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [first, x, y].into()
    }
}

impl<T> Vector<T, 3> {
    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    ///
    /// The usual way to move a position into homogeneous coordinates:
    ///
    /// ```
    /// # use fixmat::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, last: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, last].into()
    }

    /// Prepends another value to the vector, yielding a vector with 4
    /// dimensions.
    pub fn prepend(self, first: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [first, x, y, z].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and
    /// `other`. Its direction depends on the order of the arguments: swapping
    /// them will invert the direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self(Matrix::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(Matrix(elems.map(|elem| [elem])))
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.into_array()
    }
}

impl<T, const N: usize> From<Matrix<T, N, 1>> for Vector<T, N> {
    #[inline]
    fn from(column: Matrix<T, N, 1>) -> Self {
        Self(column)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Matrix<T, N, 1> {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.as_slice() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in self.as_slice() {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector(Matrix([[x], [y]]))
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector(Matrix([[x], [y], [z]]))
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector(Matrix([[x], [y], [z], [w]]))
}

/// Constructs a [`Vec5`] from its five elements.
#[inline]
pub const fn vec5<T>(a: T, b: T, c: T, d: T, e: T) -> Vec5<T> {
    Vector(Matrix([[a], [b], [c], [d], [e]]))
}

/// Computes the dot product of two column vectors.
///
/// Free-function form of [`Vector::dot`]; row vectors have
/// [`Matrix::dot`][crate::Matrix::dot] instead.
pub fn dot<T: Number, const N: usize>(left: Vector<T, N>, right: Vector<T, N>) -> T {
    left.dot(right)
}

/// Computes the cross product of two 3-dimensional vectors.
///
/// Free-function form of [`Vector::cross`].
pub fn cross<T: Number>(left: Vector<T, 3>, right: Vector<T, 3>) -> Vector<T, 3> {
    left.cross(right)
}
