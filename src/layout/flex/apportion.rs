//! Weighted apportionment of the space left over for flexed children

/// Splits `total` units between weighted shares, rounding each share to an
/// integer while carrying the rounding error forward.
///
/// The carried `fraction` is the signed difference between everything
/// handed out so far and the ideal real-valued amount, so it stays within
/// half a unit. When the weights passed to [`share`](Self::share) add up to
/// `total_weight`, the shares therefore sum to exactly `total`.
#[derive(Debug, Clone, Copy)]
pub struct Apportioner {
    total: i32,
    total_weight: f32,
    fraction: f32,
}

impl Apportioner {
    pub fn new(total: i32, total_weight: f32) -> Self {
        Self {
            total,
            total_weight,
            fraction: 0.0,
        }
    }

    /// The rounding error carried into the next share
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Integer share for `weight`, rounded half up after adding the carry
    pub fn share(&mut self, weight: f32) -> i32 {
        if self.total_weight <= 0.0 {
            return 0;
        }
        let ideal = self.total as f32 * weight / self.total_weight + self.fraction;
        let size = (ideal + 0.5).floor() as i32;
        self.fraction = ideal - size as f32;
        size
    }
}
