//! Pager configuration.
//!
//! `PagerConfig` is fixed at construction time. It can be built in code or
//! deserialized from JSON; every field except `total` has a default, the same
//! defaults the pager has always shipped with.

use std::num::NonZeroU64;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::state::{PagerState, ResultRange};
use crate::error::ConfigError;

/// Page sizes offered when none are configured.
pub static DEFAULT_TAKES: Lazy<Vec<TakeOption>> = Lazy::new(|| {
    [20u64, 50, 100, 200]
        .into_iter()
        .filter_map(|n| TakeOption::new(n, n.to_string()).ok())
        .collect()
});

/// One entry of the page-size selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TakeOption {
    id: NonZeroU64,
    #[serde(alias = "text")]
    label: String,
}

impl TakeOption {
    /// Creates a selector entry. A zero page size is rejected.
    pub fn new(id: u64, label: impl Into<String>) -> Result<Self, ConfigError> {
        let id = NonZeroU64::new(id).ok_or(ConfigError::ZeroTake)?;
        Ok(Self {
            id,
            label: label.into(),
        })
    }

    /// Entry whose label is the page size itself.
    pub fn from_take(take: NonZeroU64) -> Self {
        Self {
            id: take,
            label: take.to_string(),
        }
    }

    pub fn id(&self) -> NonZeroU64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Construction-time pager settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Number of items in the result set
    pub total: u64,
    /// Initial 1-indexed page
    pub default_page: u64,
    /// Initial offset; derived from `default_page` when absent
    pub default_skip: Option<u64>,
    /// Initial page size
    pub default_take: NonZeroU64,
    /// Page sizes offered by the selector
    pub takes: Vec<TakeOption>,
    /// Show the page-size selector
    pub is_take_change_enable: bool,
    /// Show the "results x to y of z" summary
    pub is_extra_info_display: bool,
    pub no_result_message: String,
    pub nb_by_page_message: String,
    pub result_prefix: String,
    pub range_separator: String,
    pub total_separator: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            total: 0,
            default_page: 1,
            default_skip: None,
            default_take: NonZeroU64::new(50).unwrap_or(NonZeroU64::MIN),
            takes: DEFAULT_TAKES.clone(),
            is_take_change_enable: true,
            is_extra_info_display: true,
            no_result_message: "Aucun résultat".to_string(),
            nb_by_page_message: "Nbre par page".to_string(),
            result_prefix: "Résultat(s)".to_string(),
            range_separator: "à".to_string(),
            total_separator: "sur".to_string(),
        }
    }
}

impl PagerConfig {
    /// Default configuration for a result set of `total` items.
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Field names are snake_case.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn default_take(mut self, take: u64) -> Result<Self, ConfigError> {
        self.default_take = NonZeroU64::new(take).ok_or(ConfigError::ZeroTake)?;
        Ok(self)
    }

    pub fn default_page(mut self, page: u64) -> Self {
        self.default_page = page;
        self
    }

    pub fn default_skip(mut self, skip: u64) -> Self {
        self.default_skip = Some(skip);
        self
    }

    pub fn takes(mut self, takes: Vec<TakeOption>) -> Self {
        self.takes = takes;
        self
    }

    pub fn take_change_enabled(mut self, enabled: bool) -> Self {
        self.is_take_change_enable = enabled;
        self
    }

    pub fn extra_info_displayed(mut self, displayed: bool) -> Self {
        self.is_extra_info_display = displayed;
        self
    }

    /// Checks the configuration and returns the initial pager state.
    pub fn validate(&self) -> Result<PagerState, ConfigError> {
        if self.default_page == 0 {
            return Err(ConfigError::ZeroPage);
        }
        if self.is_take_change_enable && self.takes.is_empty() {
            return Err(ConfigError::NoTakes);
        }

        let in_range = (self.default_page - 1)
            .checked_mul(self.default_take.get())
            .and_then(|skip| skip.checked_add(self.default_take.get()))
            .is_some();
        if !in_range {
            return Err(ConfigError::PageOutOfRange {
                page: self.default_page,
                take: self.default_take.get(),
            });
        }

        let state = PagerState::at_page(self.default_page, self.default_take);
        if let Some(skip) = self.default_skip {
            if skip != state.skip() {
                return Err(ConfigError::InconsistentSkip {
                    skip,
                    page: self.default_page,
                    take: self.default_take.get(),
                    expected: state.skip(),
                });
            }
        }
        Ok(state)
    }

    /// Label for a page size: the configured one if the size is offered,
    /// otherwise the number itself.
    pub fn take_label(&self, take: NonZeroU64) -> String {
        self.takes
            .iter()
            .find(|option| option.id() == take)
            .map(|option| option.label().to_string())
            .unwrap_or_else(|| take.to_string())
    }

    /// Text of the result-range summary.
    pub fn summary_text(&self, range: ResultRange) -> String {
        match range {
            ResultRange::NoResults => self.no_result_message.clone(),
            ResultRange::Range { from, to, total } => format!(
                "{} {} {} {} {} {}",
                self.result_prefix, from, self.range_separator, to, self.total_separator, total
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::default();
        assert_eq!(config.default_take.get(), 50);
        assert_eq!(config.default_page, 1);
        let ids: Vec<u64> = config.takes.iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, vec![20, 50, 100, 200]);
        assert!(config.is_take_change_enable);
        assert!(config.is_extra_info_display);

        let state = config.validate().unwrap();
        assert_eq!((state.page(), state.skip(), state.take().get()), (1, 0, 50));
    }

    #[test]
    fn test_zero_take_option_rejected() {
        assert!(matches!(TakeOption::new(0, "0"), Err(ConfigError::ZeroTake)));
        assert!(matches!(
            PagerConfig::default().default_take(0),
            Err(ConfigError::ZeroTake)
        ));
    }

    #[test]
    fn test_zero_default_page_rejected() {
        let config = PagerConfig::with_total(10).default_page(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPage)));
    }

    #[test]
    fn test_huge_default_page_rejected() {
        let json = r#"{"total": 10, "default_take": 50, "default_page": 18446744073709551615}"#;
        let config = PagerConfig::from_json_str(json).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PageOutOfRange { take: 50, .. })
        ));

        // Largest page whose last item offset still fits
        let last_fitting = u64::MAX / 50;
        let config = PagerConfig::with_total(10)
            .default_take(50)
            .unwrap()
            .default_page(last_fitting);
        assert!(config.validate().is_ok());
        assert!(config.default_page(last_fitting + 1).validate().is_err());
    }

    #[test]
    fn test_skip_derived_from_page() {
        let config = PagerConfig::with_total(95)
            .default_take(20)
            .unwrap()
            .default_page(3);
        let state = config.validate().unwrap();
        assert_eq!(state.skip(), 40);
    }

    #[test]
    fn test_inconsistent_skip_rejected() {
        let config = PagerConfig::with_total(95)
            .default_take(20)
            .unwrap()
            .default_page(3)
            .default_skip(10);
        match config.validate() {
            Err(ConfigError::InconsistentSkip { expected, .. }) => assert_eq!(expected, 40),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_takes_only_rejected_when_selector_enabled() {
        let config = PagerConfig::with_total(10).takes(Vec::new());
        assert!(matches!(config.validate(), Err(ConfigError::NoTakes)));
        assert!(config.take_change_enabled(false).validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "total": 95,
            "default_take": 20,
            "takes": [{"id": 20, "text": "20"}, {"id": 50, "label": "fifty"}],
            "is_extra_info_display": false
        }"#;
        let config = PagerConfig::from_json_str(json).unwrap();
        assert_eq!(config.total, 95);
        assert_eq!(config.default_take.get(), 20);
        assert_eq!(config.takes[1].label(), "fifty");
        assert!(!config.is_extra_info_display);
        assert_eq!(config.no_result_message, "Aucun résultat");
    }

    #[test]
    fn test_from_json_rejects_zero_take() {
        let json = r#"{"total": 10, "takes": [{"id": 0, "label": "none"}]}"#;
        assert!(matches!(PagerConfig::from_json_str(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_summary_text() {
        let config = PagerConfig::default();
        assert_eq!(config.summary_text(ResultRange::NoResults), "Aucun résultat");
        assert_eq!(
            config.summary_text(ResultRange::Range { from: 81, to: 95, total: 95 }),
            "Résultat(s) 81 à 95 sur 95"
        );
    }

    #[test]
    fn test_take_label_falls_back_to_number() {
        let config = PagerConfig::default()
            .takes(vec![TakeOption::new(25, "twenty-five").unwrap()]);
        assert_eq!(config.take_label(NonZeroU64::new(25).unwrap()), "twenty-five");
        assert_eq!(config.take_label(NonZeroU64::new(30).unwrap()), "30");
    }
}
