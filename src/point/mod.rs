//! Fixed-dimension points in Euclidean space.
//!
//! A [`Point`] is an ordered tuple of f32 coordinates. Elementwise arithmetic
//! is exposed through the standard operator traits; norm and distance route
//! through the SIMD kernels in [`simd`]. Equality is tolerance-based and
//! deliberately exposed as [`Point::approx_eq`] rather than `PartialEq` —
//! comparison within an absolute tolerance is not transitive, so it stays a
//! named predicate.
//!
//! Points taking part in binary operations must share a dimension; the hot
//! paths assume it the way the distance kernels assume equal slice lengths.

/// SIMD kernels: sum of squares and squared Euclidean distance.
pub mod simd;

use crate::config::EPSILON;
use crate::error::{PointError, PointResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A point in D-dimensional Euclidean space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    coords: Vec<f32>,
}

impl Point {
    /// Creates a point from raw coordinates.
    pub fn new(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// Creates the origin of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coords: vec![0.0; dimension],
        }
    }

    /// Returns the dimensionality of the point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Borrows the raw coordinate slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.coords
    }

    /// Reads the coordinate at `index`.
    ///
    /// Fails with [`PointError::OutOfRange`] when `index >= dimension`.
    pub fn at(&self, index: usize) -> PointResult<f32> {
        self.coords
            .get(index)
            .copied()
            .ok_or(PointError::OutOfRange {
                index,
                dimension: self.coords.len(),
            })
    }

    /// Writes the coordinate at `index`.
    ///
    /// Fails with [`PointError::OutOfRange`] when `index >= dimension`.
    pub fn set(&mut self, index: usize, value: f32) -> PointResult<()> {
        let dimension = self.coords.len();
        match self.coords.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PointError::OutOfRange { index, dimension }),
        }
    }

    /// Euclidean norm: `√Σ xᵢ²`.
    pub fn norm(&self) -> f32 {
        simd::sum_squares(&self.coords).sqrt()
    }

    /// Euclidean distance between two points: `√Σ (aᵢ − bᵢ)²`.
    ///
    /// Symmetric and non-negative. Points must share a dimension.
    pub fn distance(a: &Point, b: &Point) -> f32 {
        debug_assert_eq!(a.dimension(), b.dimension());
        simd::squared_distance(&a.coords, &b.coords).sqrt()
    }

    /// Elementwise equality within [`EPSILON`].
    ///
    /// Points of different dimension are never equal.
    pub fn approx_eq(&self, other: &Point) -> bool {
        self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| (a - b).abs() <= EPSILON)
    }

    /// Elementwise division by a scalar.
    ///
    /// Fails with [`PointError::DivisionByZero`] when `|scalar| <= EPSILON`.
    pub fn divide(&self, scalar: f32) -> PointResult<Point> {
        if scalar.abs() <= EPSILON {
            return Err(PointError::DivisionByZero { scalar });
        }
        Ok(Point {
            coords: self.coords.iter().map(|x| x / scalar).collect(),
        })
    }

    /// In-place elementwise division by a scalar.
    ///
    /// Fails with [`PointError::DivisionByZero`] when `|scalar| <= EPSILON`.
    pub fn divide_in_place(&mut self, scalar: f32) -> PointResult<()> {
        if scalar.abs() <= EPSILON {
            return Err(PointError::DivisionByZero { scalar });
        }
        for x in &mut self.coords {
            *x /= scalar;
        }
        Ok(())
    }

    /// Draws a point with each coordinate independently uniform over
    /// `[min, max]`, using a fresh thread-local RNG.
    pub fn random(dimension: usize, min: f32, max: f32) -> Point {
        Self::random_with(&mut rand::thread_rng(), dimension, min, max)
    }

    /// Draws a uniform random point from a caller-supplied RNG.
    ///
    /// Pass a seeded `StdRng` for reproducible test data.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, dimension: usize, min: f32, max: f32) -> Point {
        Point {
            coords: (0..dimension).map(|_| rng.gen_range(min..=max)).collect(),
        }
    }
}

impl Add for &Point {
    type Output = Point;

    fn add(self, other: &Point) -> Point {
        debug_assert_eq!(self.dimension(), other.dimension());
        Point {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl AddAssign<&Point> for Point {
    fn add_assign(&mut self, other: &Point) {
        debug_assert_eq!(self.dimension(), other.dimension());
        for (a, b) in self.coords.iter_mut().zip(other.coords.iter()) {
            *a += b;
        }
    }
}

impl Sub for &Point {
    type Output = Point;

    fn sub(self, other: &Point) -> Point {
        debug_assert_eq!(self.dimension(), other.dimension());
        Point {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

impl SubAssign<&Point> for Point {
    fn sub_assign(&mut self, other: &Point) {
        debug_assert_eq!(self.dimension(), other.dimension());
        for (a, b) in self.coords.iter_mut().zip(other.coords.iter()) {
            *a -= b;
        }
    }
}

impl Mul<f32> for &Point {
    type Output = Point;

    fn mul(self, scalar: f32) -> Point {
        Point {
            coords: self.coords.iter().map(|x| x * scalar).collect(),
        }
    }
}

impl MulAssign<f32> for Point {
    fn mul_assign(&mut self, scalar: f32) {
        for x in &mut self.coords {
            *x *= scalar;
        }
    }
}
