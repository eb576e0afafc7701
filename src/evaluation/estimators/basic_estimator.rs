use crate::evaluation::Estimator;

/// Running mean of every non-NaN observation.
///
/// NaN inputs are skipped, which lets callers mark "not applicable" rows
/// (e.g. precision for a class that was not predicted).
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        assert!(BasicEstimator::default().estimation().is_nan());
    }

    #[test]
    fn mean_ignores_nan() {
        let mut e = BasicEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        e.add(0.0);
        assert_eq!(e.estimation(), 0.5);
    }
}
