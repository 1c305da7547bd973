//! Tests for logging setup

#[cfg(test)]
mod tests {
    use alternando::io::configuration::DEFAULT_LOG_FILTER;
    use alternando::io::logging::{default_filter, init_tracing};

    #[test]
    fn test_default_filter_by_verbosity() {
        assert_eq!(default_filter(false, false), DEFAULT_LOG_FILTER);
        assert_eq!(default_filter(true, false), "error");
        assert_eq!(default_filter(false, true), "debug");
        assert_eq!(default_filter(true, true), "error");
    }

    // A second global subscriber cannot be installed
    #[test]
    fn test_init_tracing_only_once() {
        init_tracing(true, false);
        assert!(!init_tracing(true, false));
    }
}
