//! Environment overlay for [`ReplenishmentConfig`].

use anyhow::{Context, bail};

use shelfsmart_inventory::ReplenishmentConfig;

pub const TARGET_COVERAGE_DAYS_ENV: &str = "SHELFSMART_TARGET_COVERAGE_DAYS";
pub const CRITICAL_THRESHOLD_ENV: &str = "SHELFSMART_CRITICAL_THRESHOLD";
pub const LOW_THRESHOLD_ENV: &str = "SHELFSMART_LOW_THRESHOLD";

/// Build the config from process environment variables.
pub fn from_env() -> anyhow::Result<ReplenishmentConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the config from an arbitrary key lookup, starting from defaults.
///
/// A variable that is set but unparseable is an error, not a silent default.
pub fn from_lookup<F>(lookup: F) -> anyhow::Result<ReplenishmentConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ReplenishmentConfig::default();

    if let Some(raw) = lookup(TARGET_COVERAGE_DAYS_ENV) {
        config.target_coverage_days = raw
            .trim()
            .parse()
            .with_context(|| format!("{TARGET_COVERAGE_DAYS_ENV}={raw:?} is not a number"))?;
    }
    if let Some(raw) = lookup(CRITICAL_THRESHOLD_ENV) {
        config.default_critical_threshold = raw
            .trim()
            .parse()
            .with_context(|| format!("{CRITICAL_THRESHOLD_ENV}={raw:?} is not a non-negative integer"))?;
    }
    if let Some(raw) = lookup(LOW_THRESHOLD_ENV) {
        config.default_low_threshold = raw
            .trim()
            .parse()
            .with_context(|| format!("{LOW_THRESHOLD_ENV}={raw:?} is not a non-negative integer"))?;
    }

    if let Err(e) = config.validate() {
        bail!("invalid replenishment configuration: {e}");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ReplenishmentConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_lookup(lookup(&[
            (TARGET_COVERAGE_DAYS_ENV, "14"),
            (CRITICAL_THRESHOLD_ENV, "10"),
            (LOW_THRESHOLD_ENV, " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.target_coverage_days, 14.0);
        assert_eq!(config.default_critical_threshold, 10);
        assert_eq!(config.default_low_threshold, 25);
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let err = from_lookup(lookup(&[(LOW_THRESHOLD_ENV, "-5")])).unwrap_err();
        assert!(err.to_string().contains(LOW_THRESHOLD_ENV));
    }

    #[test]
    fn inconsistent_values_fail_validation() {
        let err = from_lookup(lookup(&[(CRITICAL_THRESHOLD_ENV, "60")])).unwrap_err();
        assert!(err.to_string().contains("critical threshold (60)"));

        let err = from_lookup(lookup(&[(TARGET_COVERAGE_DAYS_ENV, "0")])).unwrap_err();
        assert!(err.to_string().contains("target_coverage_days"));
    }
}
