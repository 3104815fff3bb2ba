//! Gating rules for serving cached recipes versus generating new ones.

/// Below this many matching catalog recipes the pool is insufficient.
pub const MIN_POOL_SIZE: usize = 3;

/// Recipes requested from the generator when the pool is insufficient.
pub const GENERATION_COUNT: usize = 5;

/// Existing matches written to the recommendation log when the pool suffices.
pub const LOGGED_EXISTING_LIMIT: usize = 5;

pub const MAX_RECOMMENDATIONS: usize = 10;

pub fn pool_is_sufficient(pool_size: usize) -> bool {
    pool_size >= MIN_POOL_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_threshold() {
        assert!(!pool_is_sufficient(0));
        assert!(!pool_is_sufficient(2));
        assert!(pool_is_sufficient(3));
        assert!(pool_is_sufficient(20));
    }
}
