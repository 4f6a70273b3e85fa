use crate::error::{FilterError, Result};

/// Map a value linearly from `[start1, stop1]` onto `[start2, stop2]`
pub fn remap(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Owned sample sequence with elementwise helpers
///
/// Every transforming operation allocates and returns a new `DataSet`;
/// the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet(Vec<f64>);

impl From<Vec<f64>> for DataSet {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for DataSet {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for DataSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl DataSet {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Return `(min, max)`; an empty set yields `(+inf, -inf)`
    pub fn bounds(&self) -> (f64, f64) {
        self.0
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (if v < lo { v } else { lo }, if v > hi { v } else { hi })
            })
    }

    pub fn range(&self) -> f64 {
        let (min, max) = self.bounds();
        max - min
    }

    /// First difference; element 0 is left at zero
    pub fn derivative(&self) -> DataSet {
        let mut deriv = vec![0.0; self.len()];
        for (i, pair) in self.0.windows(2).enumerate() {
            deriv[i + 1] = pair[1] - pair[0];
        }
        Self(deriv)
    }

    /// Map every element from `[start1, stop1]` onto `[start2, stop2]`
    pub fn map(&self, start1: f64, stop1: f64, start2: f64, stop2: f64) -> DataSet {
        self.0
            .iter()
            .map(|&v| remap(v, start1, stop1, start2, stop2))
            .collect()
    }

    /// Rescale onto `[0, 1]` using the set's own bounds
    pub fn map_range(&self) -> DataSet {
        let (min, max) = self.bounds();
        let range = max - min;
        self.0
            .iter()
            .map(|&v| remap(v / range, min / range, max / range, 0.0, 1.0))
            .collect()
    }

    pub fn mult(&self, num: f64) -> DataSet {
        self.map_each(|v| v * num)
    }

    pub fn div(&self, denom: f64) -> DataSet {
        self.map_each(|v| v / denom)
    }

    pub fn add(&self, num: f64) -> DataSet {
        self.map_each(|v| v + num)
    }

    pub fn sub(&self, num: f64) -> DataSet {
        self.add(-num)
    }

    /// Apply `fns` left-to-right to every element
    ///
    /// # Errors
    /// Returns `FilterError::Config` if `fns` is empty
    pub fn apply(&self, fns: &[&dyn Fn(f64) -> f64]) -> Result<DataSet> {
        if fns.is_empty() {
            return Err(FilterError::Config(
                "apply requires at least one function".to_string(),
            ));
        }
        Ok(self.map_each(|v| fns.iter().fold(v, |acc, f| f(acc))))
    }

    fn map_each<F: Fn(f64) -> f64>(&self, f: F) -> DataSet {
        self.0.iter().map(|&v| f(v)).collect()
    }

    pub fn reduce<F: Fn(&[f64]) -> f64>(&self, f: F) -> f64 {
        f(&self.0)
    }

    pub fn min(&self) -> f64 {
        self.reduce(|d| d.iter().copied().fold(f64::INFINITY, f64::min))
    }

    pub fn max(&self) -> f64 {
        self.reduce(|d| d.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    pub fn sum(&self) -> f64 {
        self.reduce(|d| d.iter().sum())
    }

    /// Arithmetic mean; zero for an empty set
    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.sum() / self.len() as f64
    }

    /// Population variance; zero for fewer than two elements
    pub fn var(&self) -> f64 {
        if self.len() <= 1 {
            return 0.0;
        }
        self.reduce(|d| {
            let (sum, ssq) = d
                .iter()
                .fold((0.0, 0.0), |(sum, ssq), &v| (sum + v, ssq + v * v));
            let n = d.len() as f64;
            let mean = sum / n;
            ssq / n - mean * mean
        })
    }

    pub fn stdev(&self) -> f64 {
        self.var().sqrt()
    }

    /// Sorted copy (IEEE total order)
    pub fn sorted(&self) -> Vec<f64> {
        let mut s = self.0.clone();
        s.sort_by(f64::total_cmp);
        s
    }

    pub fn median(&self) -> Option<f64> {
        let s = self.sorted();
        if s.is_empty() {
            return None;
        }
        let half = s.len() / 2;
        if s.len() % 2 == 0 {
            Some((s[half] + s[half - 1]) / 2.0)
        } else {
            Some(s[half])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_and_range() {
        let d = DataSet::from(vec![3.0, -1.0, 4.0, 1.5]);
        assert_eq!(d.bounds(), (-1.0, 4.0));
        assert_eq!(d.range(), 5.0);

        let empty = DataSet::default();
        assert_eq!(empty.bounds(), (f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn test_derivative() {
        let d = DataSet::from(vec![1.0, 4.0, 2.0, 2.0]);
        assert_eq!(d.derivative().as_slice(), &[0.0, 3.0, -2.0, 0.0]);
        assert!(DataSet::default().derivative().is_empty());
    }

    #[test]
    fn test_remap() {
        assert_relative_eq!(remap(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
        assert_relative_eq!(remap(0.0, 0.0, 10.0, 100.0, 200.0), 100.0);
        assert_relative_eq!(remap(10.0, 0.0, 10.0, 100.0, 200.0), 200.0);
    }

    #[test]
    fn test_map_range_unit_interval() {
        let d = DataSet::from(vec![2.0, 6.0, 4.0, 10.0]);
        let mapped = d.map_range();

        assert_relative_eq!(mapped.as_slice()[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(mapped.as_slice()[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(mapped.as_slice()[2], 0.25, epsilon = 1e-12);
        assert_relative_eq!(mapped.as_slice()[3], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic_returns_new_set() {
        let d = DataSet::from(vec![1.0, 2.0, 3.0]);

        assert_eq!(d.mult(2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(d.div(2.0).as_slice(), &[0.5, 1.0, 1.5]);
        assert_eq!(d.add(1.0).as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(d.sub(1.0).as_slice(), &[0.0, 1.0, 2.0]);
        assert_eq!(d.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_apply_composes_in_order_including_first_element() {
        let d = DataSet::from(vec![1.0, 2.0, 3.0]);
        let double = |v: f64| v * 2.0;
        let inc = |v: f64| v + 1.0;

        let fns: [&dyn Fn(f64) -> f64; 2] = [&double, &inc];
        let out = d.apply(&fns).unwrap();
        assert_eq!(out.as_slice(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_apply_rejects_empty_function_list() {
        let d = DataSet::from(vec![1.0]);
        assert!(matches!(d.apply(&[]), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_reductions() {
        let d = DataSet::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert_eq!(d.min(), 2.0);
        assert_eq!(d.max(), 9.0);
        assert_eq!(d.sum(), 40.0);
        assert_relative_eq!(d.mean(), 5.0);
        assert_relative_eq!(d.var(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(d.stdev(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_statistics() {
        assert_eq!(DataSet::default().mean(), 0.0);
        assert_eq!(DataSet::from(vec![3.0]).var(), 0.0);
        assert_eq!(DataSet::default().median(), None);
    }

    #[test]
    fn test_median() {
        assert_eq!(DataSet::from(vec![3.0, 1.0, 2.0]).median(), Some(2.0));
        assert_eq!(DataSet::from(vec![4.0, 1.0, 3.0, 2.0]).median(), Some(2.5));
    }

    #[test]
    fn test_sorted_leaves_original() {
        let d = DataSet::from(vec![3.0, 1.0, 2.0]);
        assert_eq!(d.sorted(), vec![1.0, 2.0, 3.0]);
        assert_eq!(d.as_slice(), &[3.0, 1.0, 2.0]);
    }
}
