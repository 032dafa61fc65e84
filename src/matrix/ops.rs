//! Implementations of `std::ops` and comparison traits.

use std::ops::{AddAssign, Index, IndexMut, Mul, MulAssign, Neg, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{ops::binop_from_assign, traits::Number, Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.0.iter_mut().zip(rhs.0) {
            for (elem, rhs_elem) in row.iter_mut().zip(rhs_row) {
                *elem += rhs_elem;
            }
        }
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign for Matrix<T, R, C>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Self) {
        for (row, rhs_row) in self.0.iter_mut().zip(rhs.0) {
            for (elem, rhs_elem) in row.iter_mut().zip(rhs_row) {
                *elem -= rhs_elem;
            }
        }
    }
}

/// Scalar addition (broadcast to every element).
impl<T, const R: usize, const C: usize> AddAssign<T> for Matrix<T, R, C>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: T) {
        for row in &mut self.0 {
            for elem in row {
                *elem += rhs;
            }
        }
    }
}

/// Scalar subtraction (broadcast to every element).
impl<T, const R: usize, const C: usize> SubAssign<T> for Matrix<T, R, C>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: T) {
        for row in &mut self.0 {
            for elem in row {
                *elem -= rhs;
            }
        }
    }
}

/// Scalar multiplication (scaling).
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.0 {
            for elem in row {
                *elem *= rhs;
            }
        }
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

binop_from_assign! {
    impl<T, const R, const C> Add/AddAssign<Matrix<T, R, C>> for Matrix<T, R, C> => add/add_assign;
    impl<T, const R, const C> Sub/SubAssign<Matrix<T, R, C>> for Matrix<T, R, C> => sub/sub_assign;
    impl<T, const R, const C> Add/AddAssign<T> for Matrix<T, R, C> => add/add_assign;
    impl<T, const R, const C> Sub/SubAssign<T> for Matrix<T, R, C> => sub/sub_assign;
    impl<T, const R, const C> Mul/MulAssign<T> for Matrix<T, R, C> => mul/mul_assign;
}

/// Matrix * Matrix.
impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        Matrix::from_fn(|i, k| (0..C).fold(T::ZERO, |acc, j| acc + self[(i, j)] * rhs[(j, k)]))
    }
}

/// Matrix * Column Vector.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector(self * rhs.0)
    }
}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}
