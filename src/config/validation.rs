use crate::config::types::{
    Config, CrawlerConfig, ExtractionConfig, FilterConfig, OutputConfig, UserAgentConfig,
};
use crate::ConfigError;
use regex::RegexBuilder;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_filter_config(&config.filter)?;
    validate_extraction_config(&config.extraction)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    validate_seed_url(&config.seed_url)?;

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}

/// The seed fixes the crawl domain, so it must be an absolute http(s) URL with a host
fn validate_seed_url(seed: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.value.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent value cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.corpus_path.is_empty() {
        return Err(ConfigError::Validation(
            "corpus_path cannot be empty".to_string(),
        ));
    }

    if config.summary_path.is_empty() {
        return Err(ConfigError::Validation(
            "summary_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Every exclusion pattern must compile
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for pattern in &config.exclude_patterns {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
    }
    Ok(())
}

/// Validates the strategy list: non-empty, no repeats
fn validate_extraction_config(config: &ExtractionConfig) -> Result<(), ConfigError> {
    if config.strategies.is_empty() {
        return Err(ConfigError::Validation(
            "at least one extraction strategy is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for strategy in &config.strategies {
        if !seen.insert(strategy) {
            return Err(ConfigError::Validation(format!(
                "extraction strategy '{}' is listed more than once",
                strategy
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::StrategyKind;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::from_seed("https://example.com")).is_ok());
        assert!(validate(&Config::from_seed("http://localhost:8080/help")).is_ok());
    }

    #[test]
    fn test_validate_seed_url() {
        assert!(validate_seed_url("https://example.com/faq").is_ok());

        assert!(matches!(
            validate_seed_url("not a url"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(validate_seed_url("/relative/path").is_err());
        assert!(validate_seed_url("ftp://example.com/").is_err());
        assert!(validate_seed_url("mailto:help@example.com").is_err());
    }

    #[test]
    fn test_validate_limits() {
        let mut config = Config::from_seed("https://example.com");
        config.crawler.max_pages = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        let mut config = Config::from_seed("https://example.com");
        config.crawler.request_timeout_secs = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::from_seed("https://example.com");
        config.crawler.politeness_delay_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_output_paths() {
        let mut config = Config::from_seed("https://example.com");
        config.output.corpus_path.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_patterns() {
        let mut config = Config::from_seed("https://example.com");
        config.filter.exclude_patterns = vec!["/admin/".to_string(), "([unclosed".to_string()];
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_validate_strategies() {
        let mut config = Config::from_seed("https://example.com");
        config.extraction.strategies.clear();
        assert!(validate(&config).is_err());

        config.extraction.strategies = vec![StrategyKind::Toggle, StrategyKind::Toggle];
        assert!(validate(&config).is_err());

        config.extraction.strategies = vec![StrategyKind::HeadingAdjacency];
        assert!(validate(&config).is_ok());
    }
}
