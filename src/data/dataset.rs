/// A single supervised sample: `D` feature values followed by one target.
///
/// A point is immutable once constructed. The feature count is `len() - 1`;
/// a point of length 1 carries only a target (bias-only fitting).
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    values: Vec<f64>,
}

impl Point {
    /// Creates a point from its raw values (features first, target last).
    ///
    /// # Panics
    /// - if `values` is empty (every point carries at least a target)
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "a point must hold at least a target value");
        Self { values }
    }

    /// Total number of components (features + target).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // constructor rejects empty points
    }

    /// Number of feature components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len() - 1
    }

    /// The feature components, positionally aligned with a weight vector.
    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.values[..self.values.len() - 1]
    }

    /// The target value (last component).
    #[inline]
    pub fn target(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

/// A minimal in-memory dataset of points.
///
/// Construction does not enforce rectangularity or non-emptiness; that is the
/// job of [`validate`], which the descent step consults before any numeric
/// work. This keeps malformed datasets representable so the validation gate
/// can be exercised and report them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    points: Vec<Point>,
}

impl InMemoryDataset {
    /// Creates a dataset from owned points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Convenience constructor from raw rows.
    ///
    /// # Panics
    /// - if any row is empty
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self {
            points: rows.into_iter().map(Point::new).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Checks that every point has exactly `weight_len + 1` components.
///
/// Returns `false` for an empty dataset. `weight_len == 0` is accepted: a
/// dataset of bare targets is a valid bias-only fit.
///
/// The check deliberately visits every point instead of short-circuiting, so
/// the result is independent of point ordering.
pub fn validate(dataset: &InMemoryDataset, weight_len: usize) -> bool {
    if dataset.is_empty() {
        return false;
    }

    dataset
        .points()
        .iter()
        .fold(true, |ok, point| ok & (point.len() == weight_len + 1))
}
