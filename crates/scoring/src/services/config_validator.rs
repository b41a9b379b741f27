use rust_decimal::Decimal;
use validator::{Validate, ValidationErrors};

use crate::dto::ValidationReport;
use crate::error::{Result, ScoringError};
use crate::models::{ScoringAlgorithm, ScoringConfig, TiebreakerMethod, TraditionalConfig};

pub struct ConfigValidator;

impl ConfigValidator {
    /// Check a scoring configuration before it is used for an event.
    ///
    /// Hard problems fail with `ScoringError::ValidationError`; suspicious but
    /// usable settings come back as warnings.
    pub fn validate(config: &ScoringConfig) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if let Err(errors) = config.tiebreaker.validate() {
            report.errors.extend(messages("tiebreaker", &errors));
        }
        if config.tiebreaker.primary == TiebreakerMethod::None {
            report
                .warnings
                .push("No tiebreaker configured, tied athletes will share a rank".to_string());
        }

        match &config.algorithm {
            ScoringAlgorithm::Traditional { traditional } => {
                Self::check_traditional(traditional, &mut report);
            }
            ScoringAlgorithm::PScore { p_score } => {
                if p_score.allow_negatives {
                    report
                        .warnings
                        .push("P-score event points may be negative".to_string());
                }
            }
            ScoringAlgorithm::WinnerTakesMore | ScoringAlgorithm::Online => {}
            ScoringAlgorithm::Custom {
                custom_table,
                traditional,
            } => {
                if let Err(errors) = custom_table.validate() {
                    report.errors.extend(messages("customTable", &errors));
                }
                Self::check_traditional(traditional, &mut report);

                if custom_table.overrides.is_empty() {
                    report.warnings.push(
                        "Custom table has no overrides, the base template is used as is"
                            .to_string(),
                    );
                }
                for (rank, points) in &custom_table.overrides {
                    if *points < Decimal::ZERO {
                        report
                            .warnings
                            .push(format!("Override for rank {} awards negative points", rank));
                    }
                }
                let values: Vec<(&u32, &Decimal)> = custom_table.overrides.iter().collect();
                for pair in values.windows(2) {
                    let ((better, better_points), (worse, worse_points)) = (pair[0], pair[1]);
                    if worse_points > better_points {
                        report.warnings.push(format!(
                            "Rank {} earns more than rank {} ({} > {})",
                            worse, better, worse_points, better_points
                        ));
                    }
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ScoringError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }

    fn check_traditional(traditional: &TraditionalConfig, report: &mut ValidationReport) {
        if let Err(errors) = traditional.validate() {
            report.errors.extend(messages("traditional", &errors));
        }
        if traditional.step.is_zero() {
            report
                .warnings
                .push("Traditional step is 0, every ranked athlete earns the same points".to_string());
        }
    }
}

/// Flatten validator output into sorted `section.field: message` lines.
fn messages(section: &str, errors: &ValidationErrors) -> Vec<String> {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                format!("{}.{}: {}", section, field, message)
            })
        })
        .collect();
    lines.sort();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseTemplate, CustomTableConfig, PScoreConfig, TiebreakerConfig};

    #[test]
    fn test_default_config_is_clean() {
        let report = ConfigValidator::validate(&ScoringConfig::default()).unwrap();
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_negative_step_fails() {
        let config = ScoringConfig::traditional(TraditionalConfig {
            step: Decimal::from(-5),
            ..TraditionalConfig::default()
        });
        match ConfigValidator::validate(&config) {
            Err(ScoringError::ValidationError(message)) => assert!(message.contains("traditional.step")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_head_to_head_event_fails() {
        let config = ScoringConfig::default().with_tiebreaker(TiebreakerConfig::new(TiebreakerMethod::HeadToHead));
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_override_rank_zero_fails() {
        let table = CustomTableConfig::new(BaseTemplate::Traditional).with_override(0, Decimal::from(100));
        assert!(ConfigValidator::validate(&ScoringConfig::custom(table)).is_err());
    }

    #[test]
    fn test_warnings() {
        let config = ScoringConfig::traditional(TraditionalConfig {
            step: Decimal::ZERO,
            ..TraditionalConfig::default()
        })
        .with_tiebreaker(TiebreakerConfig::new(TiebreakerMethod::None));
        let report = ConfigValidator::validate(&config).unwrap();
        assert_eq!(report.warnings.len(), 2);

        let report = ConfigValidator::validate(&ScoringConfig::p_score(PScoreConfig::default())).unwrap();
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_online_config_is_clean() {
        let config = ScoringConfig {
            algorithm: ScoringAlgorithm::Online,
            ..ScoringConfig::default()
        };
        let report = ConfigValidator::validate(&config).unwrap();
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_custom_table_warnings() {
        let empty = ScoringConfig::custom(CustomTableConfig::new(BaseTemplate::WinnerTakesMore));
        let report = ConfigValidator::validate(&empty).unwrap();
        assert_eq!(report.warnings.len(), 1);

        let inverted = CustomTableConfig::new(BaseTemplate::Traditional)
            .with_override(1, Decimal::from(50))
            .with_override(2, Decimal::from(80));
        let report = ConfigValidator::validate(&ScoringConfig::custom(inverted)).unwrap();
        assert!(report.warnings.iter().any(|w| w.contains("Rank 2 earns more than rank 1")));
    }
}
