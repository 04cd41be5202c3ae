//! Mean of numeric values.

use super::CombineFn;

/// Arithmetic mean as `f64` over anything `Into<f64>`.
///
/// The accumulator is a running `(total, count)` pair; a group with no values
/// has no mean and finishes as `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V: Into<f64>> CombineFn<V, (f64, u64), Option<f64>> for AverageF64 {
    fn create(&self) -> (f64, u64) {
        (0.0, 0)
    }

    fn add_input(&self, (total, count): &mut (f64, u64), v: V) {
        *total += v.into();
        *count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(&self, (total, count): (f64, u64)) -> Option<f64> {
        (count > 0).then(|| total / count as f64)
    }
}
