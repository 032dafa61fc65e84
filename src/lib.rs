//! Small, fixed-dimension linear algebra types with value semantics.
//!
//! # Motivation
//!
//! Graphics, physics, and simulation code mostly works with tiny matrices
//! and vectors whose dimensions are known when the program is written. This
//! library provides exactly that: stack-allocated [`Matrix`] and [`Vector`]
//! types whose row and column counts are const generic parameters, so shape
//! errors in arithmetic are caught by the compiler instead of at runtime.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be
//!   significantly simplified by relying on const generics to specify vector
//!   and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices and
//!   vectors, further simplifying their API.
//! - Be generic over the element type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Make every failure mode an explicit [`Error`] value rather than
//!   undefined or silently-wrong behavior: constructing from the wrong
//!   number of elements, accessing out of bounds, and normalizing a
//!   zero-length vector all report errors.
//! - No decompositions, no matrix inversion, no SIMD kernels, and no
//!   serialization beyond the human-readable [`Display`][std::fmt::Display]
//!   rendering. Dimensions are expected to stay small (5 and below), so all
//!   arithmetic uses the plain textbook loops.

mod error;
mod matrix;
mod ops;
mod traits;
mod vector;

pub use error::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
