/// Returns a fresh seed from the thread-local OS-seeded generator.
pub fn fresh_seed() -> u64 {
    rand::random::<u64>()
}

/// Explicit seed when one is configured, otherwise a fresh one.
pub fn session_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(fresh_seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_seed_is_configured_then_it_is_used_verbatim() {
        assert_eq!(session_seed(Some(1234)), 1234);
    }

    #[test]
    fn when_seed_is_not_configured_then_sessions_get_distinct_seeds() {
        let seeds: std::collections::HashSet<u64> = (0..16).map(|_| session_seed(None)).collect();
        assert_eq!(seeds.len(), 16);
    }
}
