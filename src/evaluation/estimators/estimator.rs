/// Incremental scalar estimator.
pub trait Estimator {
    /// Incorporates a new observation. Implementations may ignore NaN.
    fn add(&mut self, v: f64);

    /// Returns the current estimate, NaN when nothing has been observed.
    fn estimation(&self) -> f64;
}
