use std::f64::consts::SQRT_2;

/// Two-sided tail probability of a standard normal score, `P(|Z| >= |z|)`.
pub fn two_sided_p_value(z: f64) -> f64 {
    libm::erfc(z.abs() / SQRT_2)
}
