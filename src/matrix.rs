use std::{array, fmt};

use crate::{
    error::Error,
    traits::{Number, One, Zero},
};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 5x5 matrix.
pub type Mat5<T> = Matrix<T, 5, 5>;
/// A 5x5 matrix with [`f32`] elements.
pub type Mat5f = Mat5<f32>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from
///   explicit element arrays, with the element count checked by the type
///   system.
/// - [`Matrix::try_from_slice`] fills a matrix from a row-major runtime slice
///   and reports an [`Error`] when the slice holds the wrong number of
///   elements.
/// - [`Matrix::splat`] copies a single value into every element.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its
///   row and column.
/// - The [`Default`] implementation initializes each element with its default
///   value.
///
/// Additionally, associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] exists for square matrices only and has 1 on its
///   diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row*, the second
/// is the *column*, matching common mathematical notation. Indices are
/// 0-based, and indexing out of bounds panics, just like it does for slices.
///
/// [`Matrix::at`] and [`Matrix::at_mut`] perform the same access but return a
/// `Result`, reporting [`Error::OutOfBounds`] instead of panicking:
///
/// ```
/// # use fixmat::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.at(0, 1), Ok(&1));
/// assert!(mat.at(0, 2).is_err());
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    const ZERO_ROW: [T; C] = [T::ZERO; C];

    /// A matrix with every element set to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([Self::ZERO_ROW; R]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. It is
    /// only defined for square matrices, and multiplying any matrix or vector
    /// with it returns the operand unchanged.
    ///
    /// Each distinct combination of `N` and `T` evaluates this constant
    /// independently, at compile time.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < N {
            this.0[i][i] = T::ONE;
            i += 1;
        }
        this
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::splat(7);
    /// assert_eq!(mat, Matrix::from_rows([[7, 7], [7, 7]]));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([[elem; C]; R])
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    #[inline]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] from an array of columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]));
    /// ```
    pub fn from_columns(columns: [[T; R]; C]) -> Self
    where
        T: Copy,
    {
        Matrix(columns).transpose()
    }

    /// Creates a [`Matrix`] from a flat slice of elements in row-major order.
    ///
    /// Fails with [`Error::ElementCount`] unless the slice holds exactly
    /// `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    ///
    /// assert!(Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3]).is_err());
    /// ```
    pub fn try_from_slice(elems: &[T]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if elems.len() != R * C {
            return Err(Error::ElementCount {
                rows: R,
                cols: C,
                expected: R * C,
                got: elems.len(),
            });
        }
        Ok(Self::from_fn(|row, col| elems[row * C + col]))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts every element to a different element type.
    ///
    /// Together with [`Matrix::from_rows`], this covers building a matrix
    /// from elements of a foreign numeric type: construct in the source type,
    /// then cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let ints = Matrix::from_rows([[1, 2], [3, 4]]);
    /// let floats: Matrix<f64, 2, 2> = ints.cast();
    /// assert_eq!(floats, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Into<U>,
    {
        self.map(T::into)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns a reference to the element at `(row, col)`, or
    /// [`Error::OutOfBounds`] when the position lies outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixmat::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.at(1, 0), Ok(&3));
    /// assert!(mat.at(2, 0).is_err());
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<&T, Error> {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(Error::OutOfBounds {
                row,
                col,
                rows: R,
                cols: C,
            })
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`Error::OutOfBounds`] when the position lies outside the matrix.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, Error> {
        self.0
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::OutOfBounds {
                row,
                col,
                rows: R,
                cols: C,
            })
    }

    /// Returns the elements as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }
}

impl<T: Number, const C: usize> Matrix<T, 1, C> {
    /// Computes the dot product of two row vectors.
    ///
    /// The column vector counterpart is [`Vector::dot`][crate::Vector::dot].
    pub fn dot(self, other: Self) -> T {
        let [row] = self.0;
        let [other_row] = other.0;
        row.into_iter()
            .zip(other_row)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, elem) in row.iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", elem)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::vec2;

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn transpose_involution() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.transpose().transpose(), mat);

        let square = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(square.transpose(), Matrix::from_rows([[1, 3], [2, 4]]));
        assert_eq!(square.transpose().transpose(), square);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for both renderings.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
        assert_eq!(format!("{}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each
        // individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]]),
        );
    }

    #[test]
    fn identity_is_neutral() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(Mat3::IDENTITY * mat, mat);
        assert_eq!(mat * Mat3::IDENTITY, mat);

        let mat = Matrix::from_rows([[0.5, -1.5], [2.25, 4.0]]);
        assert_eq!(Mat2f::IDENTITY * mat, mat);
        assert_eq!(mat * Mat2f::IDENTITY, mat);
    }

    #[test]
    fn mat_mat_mul() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        assert_eq!(a * b, Matrix::from_rows([[19, 22], [43, 50]]));

        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [ 9, 10, 11, 12],
            [13, 14, 15, 16],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 3)], a[(2, 0)] * b[(0, 3)] + a[(2, 1)] * b[(1, 3)]);
    }

    #[test]
    fn mul_associativity() {
        let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::from_rows([[7, 8], [9, 10], [11, 12]]);
        let d = Matrix::from_rows([[13, 14, 15], [16, 17, 18]]);
        assert_eq!((a * b) * d, a * (b * d));

        let a = Matrix::<f64, 2, 3>::from_rows([[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]);
        let b = Matrix::<f64, 3, 2>::from_rows([[1.7, 2.9], [-0.3, 0.11], [5.0, -7.25]]);
        let d = Matrix::<f64, 2, 2>::from_rows([[0.01, 1.5], [-2.5, 3.125]]);
        assert_relative_eq!((a * b) * d, a * (b * d), max_relative = 1e-12);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn add_sub() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));

        let mut acc = a;
        acc += b;
        acc -= a;
        assert_eq!(acc, b);
    }

    #[test]
    fn scalar_broadcast() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        mat += 10;
        assert_eq!(mat, Matrix::from_rows([[11, 12], [13, 14]]));
        mat -= 1;
        assert_eq!(mat, Matrix::from_rows([[10, 11], [12, 13]]));
        mat *= 2;
        assert_eq!(mat, Matrix::from_rows([[20, 22], [24, 26]]));

        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat + 1, Matrix::from_rows([[2, 3], [4, 5]]));
        assert_eq!(mat - 1, Matrix::from_rows([[0, 1], [2, 3]]));
        assert_eq!(mat * 3, Matrix::from_rows([[3, 6], [9, 12]]));
    }

    #[test]
    fn negate() {
        let mat = Matrix::from_rows([[1, -2], [0, 4]]);
        assert_eq!(-mat, Matrix::from_rows([[-1, 2], [0, -4]]));
    }

    #[test]
    fn checked_access() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.at(1, 1), Ok(&4));
        assert_eq!(
            mat.at(2, 0),
            Err(Error::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2,
            }),
        );
        assert_eq!(
            mat.at(0, 2),
            Err(Error::OutOfBounds {
                row: 0,
                col: 2,
                rows: 2,
                cols: 2,
            }),
        );

        *mat.at_mut(0, 1).unwrap() = 9;
        assert_eq!(mat[(0, 1)], 9);
        assert!(mat.at_mut(5, 5).is_err());
    }

    #[test]
    fn slice_construction() {
        let mat = Matrix::<i32, 2, 3>::try_from_slice(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));

        assert_eq!(
            Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3]),
            Err(Error::ElementCount {
                rows: 2,
                cols: 2,
                expected: 4,
                got: 3,
            }),
        );
    }

    #[test]
    fn cast() {
        let ints = Matrix::from_rows([[1i8, -2], [3, 4]]);
        let floats: Matrix<f32, 2, 2> = ints.cast();
        assert_eq!(floats, Matrix::from_rows([[1.0, -2.0], [3.0, 4.0]]));
    }

    #[test]
    fn row_dot() {
        let a = Matrix::from_rows([[1, 3, -5]]);
        let b = Matrix::from_rows([[4, -2, -1]]);
        assert_eq!(a.dot(b), 3);
    }

    #[test]
    fn default_fills_elements() {
        let mat = Matrix::<i32, 2, 2>::default();
        assert_eq!(mat, Matrix::ZERO);
    }

    #[test]
    fn as_slice_is_row_major() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.as_slice(), &[1, 2, 3, 4]);
    }
}
