use anyhow::Result;
use std::fmt::Display;

/// Numeric limits for a prompted value. Each end is inclusive unless its
/// `*_exclusive` flag is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub min_exclusive: bool,
    pub max_exclusive: bool,
}

impl<T> Bounds<T> {
    pub fn none() -> Self {
        Self::inclusive(None, None)
    }

    pub fn inclusive(min: Option<T>, max: Option<T>) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
            max_exclusive: false,
        }
    }
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    /// Checks `x`, returning a user-facing message on failure.
    pub fn check(&self, x: T) -> Result<(), String> {
        let too_low = self
            .min
            .is_some_and(|lo| if self.min_exclusive { x <= lo } else { x < lo });
        let too_high = self
            .max
            .is_some_and(|hi| if self.max_exclusive { x >= hi } else { x > hi });
        if !(too_low || too_high) {
            return Ok(());
        }

        let lower = |lo: T| if self.min_exclusive { format!("> {lo}") } else { format!("≥ {lo}") };
        let upper = |hi: T| if self.max_exclusive { format!("< {hi}") } else { format!("≤ {hi}") };
        Err(match (self.min, self.max) {
            (Some(lo), Some(hi)) if !self.min_exclusive && !self.max_exclusive => {
                format!("Must be between {lo} and {hi}")
            }
            (Some(lo), Some(hi)) => format!("Must be {} and {}", lower(lo), upper(hi)),
            (Some(lo), None) => format!("Must be {}", lower(lo)),
            (None, Some(hi)) => format!("Must be {}", upper(hi)),
            (None, None) => "Out of range".to_string(),
        })
    }
}

pub trait PromptDriver {
    /// Picks one of `options`, returning its index.
    fn select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize>;
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;
    fn ask_u64(&self, title: &str, help: &str, default: u64, bounds: Bounds<u64>) -> Result<u64>;
    fn ask_f64(&self, title: &str, help: &str, default: f64, bounds: Bounds<f64>) -> Result<f64>;
    /// Shows a non-fatal message, e.g. a rejected answer before re-asking.
    fn notify(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_messages() {
        let both = Bounds::inclusive(Some(1u64), Some(3));
        assert!(both.check(2).is_ok());
        assert!(both.check(3).is_ok());
        assert_eq!(both.check(4).unwrap_err(), "Must be between 1 and 3");

        let lo = Bounds::inclusive(Some(0.5), None);
        assert_eq!(lo.check(0.1).unwrap_err(), "Must be ≥ 0.5");
        assert!(Bounds::<f64>::none().check(-1e9).is_ok());
    }

    #[test]
    fn exclusive_ends_reject_the_limit_itself() {
        let open = Bounds {
            min: Some(0.0),
            max: Some(1.0),
            min_exclusive: true,
            max_exclusive: true,
        };
        assert!(open.check(0.5).is_ok());
        assert_eq!(open.check(0.0).unwrap_err(), "Must be > 0 and < 1");
        assert_eq!(open.check(1.0).unwrap_err(), "Must be > 0 and < 1");

        let half_open = Bounds {
            min: None,
            max: Some(10u64),
            min_exclusive: false,
            max_exclusive: true,
        };
        assert!(half_open.check(9).is_ok());
        assert_eq!(half_open.check(10).unwrap_err(), "Must be < 10");
    }
}
