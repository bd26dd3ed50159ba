use std::iter::FusedIterator;

use num_traits::Float;

/// The smallest and largest values in `values`. Returns
/// `(inf, -inf)` for an empty slice.
pub fn minmax<T: Float>(values: &[T]) -> (T, T) {
    values.iter().fold(
        (T::infinity(), T::neg_infinity()),
        |(lo, hi), v| (lo.min(*v), hi.max(*v)),
    )
}

/// Arithmetic mean of `values`. NaN for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    let total = values.iter().fold(T::zero(), |acc, v| acc + *v);
    total / T::from(values.len()).unwrap()
}

/// A pair of parallel arrays forming one sampled metric over time,
/// e.g. an RMSD trace. The arrays are always the same length and
/// keep their file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimeSeries {
    pub time_array: Vec<f64>,
    pub value_array: Vec<f64>,
}

impl TimeSeries {
    pub fn new(time_array: Vec<f64>, value_array: Vec<f64>) -> Self {
        assert_eq!(
            time_array.len(),
            value_array.len(),
            "time and value arrays must be the same length"
        );
        Self {
            time_array,
            value_array,
        }
    }

    pub fn len(&self) -> usize {
        self.time_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_array.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<(f64, f64)> {
        let x = self.time_array.get(i)?;
        let y = self.value_array.get(i)?;
        Some((*x, *y))
    }

    pub fn push(&mut self, time: f64, value: f64) {
        self.time_array.push(time);
        self.value_array.push(value);
    }

    /// Iterate over `(time, value)` points in order.
    pub fn iter(&self) -> TimeSeriesIter<'_> {
        TimeSeriesIter {
            inner: self
                .time_array
                .iter()
                .copied()
                .zip(self.value_array.iter().copied()),
        }
    }

    /// Mean of the value array over the whole series.
    pub fn mean_value(&self) -> f64 {
        mean(&self.value_array)
    }

    pub fn time_range(&self) -> (f64, f64) {
        minmax(&self.time_array)
    }

    pub fn value_range(&self) -> (f64, f64) {
        minmax(&self.value_array)
    }
}

impl FromIterator<(f64, f64)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        let mut series = Self::default();
        for (x, y) in iter {
            series.push(x, y);
        }
        series
    }
}

pub struct TimeSeriesIter<'a> {
    inner: std::iter::Zip<
        std::iter::Copied<std::slice::Iter<'a, f64>>,
        std::iter::Copied<std::slice::Iter<'a, f64>>,
    >,
}

impl<'a> Iterator for TimeSeriesIter<'a> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for TimeSeriesIter<'a> {}
impl<'a> FusedIterator for TimeSeriesIter<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_minmax() {
        let (lo, hi) = minmax(&[3.0, 1.0, 2.0, 5.0, 4.0]);
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 5.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_series_invariants() {
        let series: TimeSeries = (0..5).map(|i| (i as f64, (i * i) as f64)).collect();
        assert_eq!(series.len(), 5);
        assert_eq!(series.time_array.len(), series.value_array.len());
        assert_eq!(series.get(2), Some((2.0, 4.0)));
        assert_eq!(series.get(5), None);
        assert_eq!(series.iter().len(), 5);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths() {
        TimeSeries::new(vec![0.0, 1.0], vec![1.0]);
    }
}
