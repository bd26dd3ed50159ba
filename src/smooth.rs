//! Sliding-window mean smoothing with valid-convolution semantics: a
//! window only produces an output once it is completely filled, so the
//! smoothed sequence has `len - window + 1` points and is aligned to
//! the end of each window.
use std::collections::VecDeque;
use std::ops::{AddAssign, SubAssign};

use num_traits::Float;
use thiserror::Error;

use crate::arrayops::TimeSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MovingAverageError {
    #[error("The window size must be greater than zero")]
    EmptyWindow,
}

#[derive(Debug, Clone)]
struct RingBuffer<F: Float + AddAssign> {
    buffer: VecDeque<F>,
    capacity: usize,
}

impl<F: Float + AddAssign> RingBuffer<F> {
    fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `value`, returning the evicted sample once the buffer is full.
    fn add(&mut self, value: F) -> Option<F> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };
        self.buffer.push_back(value);
        evicted
    }

    fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }
}

/// Running-sum moving average over a window of `window_size` samples.
#[derive(Debug, Clone)]
pub struct MovingAverage<F: Float + AddAssign + SubAssign> {
    buffer: RingBuffer<F>,
    running_sum: F,
    divisor: F,
}

impl<F: Float + AddAssign + SubAssign> MovingAverage<F> {
    pub fn new(window_size: usize) -> Result<Self, MovingAverageError> {
        if window_size == 0 {
            return Err(MovingAverageError::EmptyWindow);
        }
        Ok(Self {
            buffer: RingBuffer::new(window_size),
            running_sum: F::zero(),
            divisor: F::from(window_size).unwrap(),
        })
    }

    pub fn add(&mut self, value: F) {
        self.running_sum += value;
        if let Some(evicted) = self.buffer.add(value) {
            self.running_sum -= evicted;
        }
    }

    /// Whether enough samples have been seen to fill one window.
    pub fn is_primed(&self) -> bool {
        self.buffer.is_full()
    }

    pub fn average(&self) -> F {
        self.running_sum / self.divisor
    }

    pub fn average_over<I: Iterator<Item = F>>(self, source: I) -> MovingAverageIter<F, I> {
        MovingAverageIter {
            state: self,
            source,
        }
    }
}

pub struct MovingAverageIter<F: Float + AddAssign + SubAssign, I: Iterator<Item = F>> {
    state: MovingAverage<F>,
    source: I,
}

impl<F: Float + AddAssign + SubAssign, I: Iterator<Item = F>> Iterator for MovingAverageIter<F, I> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        for value in self.source.by_ref() {
            self.state.add(value);
            if self.state.is_primed() {
                return Some(self.state.average());
            }
        }
        None
    }
}

/// Smooth `data` with a `window_size`-sample mean. When the window is
/// longer than the data the result is empty.
pub fn moving_average<F: Float + AddAssign + SubAssign>(
    data: &[F],
    window_size: usize,
) -> Result<Vec<F>, MovingAverageError> {
    let state = MovingAverage::new(window_size)?;
    Ok(state.average_over(data.iter().copied()).collect())
}

/// Smooth the value array of `series`, pairing the result with the
/// trailing timestamps so each smoothed point sits at the end of its
/// window.
pub fn moving_average_series(
    series: &TimeSeries,
    window_size: usize,
) -> Result<TimeSeries, MovingAverageError> {
    let values = moving_average(&series.value_array, window_size)?;
    let times = series.time_array[series.len() - values.len()..].to_vec();
    Ok(TimeSeries::new(times, values))
}
