//! Price arithmetic shared by books and stickers.

/// Compute the final price after applying a percentage discount.
///
/// A discount of 0 leaves the base price unchanged; 100 brings it to zero.
pub fn final_price(base_price: f64, discount_percentage: f64) -> f64 {
    base_price * (1.0 - discount_percentage / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_discount() {
        assert!((final_price(100.0, 25.0) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_discounts() {
        assert!((final_price(49.99, 0.0) - 49.99).abs() < 1e-9);
        assert!(final_price(49.99, 100.0).abs() < 1e-9);
    }
}
