use std::path::PathBuf;

use crate::domain::{errors::ValidationError, value_objects::RetentionDays};

/// Retrieval tier for an archive restore job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RestoreTier {
    #[default]
    Standard,
    Bulk,
    Expedited,
}

impl RestoreTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestoreTier::Standard => "Standard",
            RestoreTier::Bulk => "Bulk",
            RestoreTier::Expedited => "Expedited",
        }
    }
}

impl std::str::FromStr for RestoreTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(RestoreTier::Standard),
            "bulk" => Ok(RestoreTier::Bulk),
            "expedited" => Ok(RestoreTier::Expedited),
            _ => Err(ValidationError::InvalidField {
                field: "tier".to_string(),
                value: s.to_string(),
                expected: "standard, bulk or expedited".to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RestoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a restore request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreRequestSpec {
    pub days: RetentionDays,
    pub tier: RestoreTier,
}

/// Why an invocation intentionally does nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyPresent,
    RestoreInProgress,
    RestoreNotRequested,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadyPresent => write!(f, "already present, no overwrite"),
            SkipReason::RestoreInProgress => write!(f, "restore in progress"),
            SkipReason::RestoreNotRequested => write!(f, "archived; restore not requested"),
        }
    }
}

/// The single next step for an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DoNothing(SkipReason),
    FetchObject,
    IssueRestore(RestoreRequestSpec),
}

/// Terminal state of a successful invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Fetched { path: PathBuf, bytes: u64 },
    RestoreRequested(RestoreRequestSpec),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Skipped(reason) => write!(f, "skipped ({})", reason),
            Outcome::Fetched { path, bytes } => {
                write!(f, "fetched {} bytes to {}", bytes, path.display())
            }
            Outcome::RestoreRequested(spec) => write!(
                f,
                "restore requested ({} tier, {} days)",
                spec.tier, spec.days
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("standard".parse::<RestoreTier>().unwrap(), RestoreTier::Standard);
        assert_eq!("BULK".parse::<RestoreTier>().unwrap(), RestoreTier::Bulk);
        assert_eq!("Expedited".parse::<RestoreTier>().unwrap(), RestoreTier::Expedited);
        assert!("fast".parse::<RestoreTier>().is_err());
    }

    #[test]
    fn test_skip_reasons_read_well_in_logs() {
        assert_eq!(
            SkipReason::AlreadyPresent.to_string(),
            "already present, no overwrite"
        );
        assert_eq!(SkipReason::RestoreInProgress.to_string(), "restore in progress");
        assert_eq!(
            SkipReason::RestoreNotRequested.to_string(),
            "archived; restore not requested"
        );
    }

    #[test]
    fn test_outcome_display() {
        let spec = RestoreRequestSpec {
            days: RetentionDays::new(7).unwrap(),
            tier: RestoreTier::Bulk,
        };
        assert_eq!(
            Outcome::RestoreRequested(spec).to_string(),
            "restore requested (Bulk tier, 7 days)"
        );
        assert_eq!(
            Outcome::Skipped(SkipReason::RestoreInProgress).to_string(),
            "skipped (restore in progress)"
        );
    }
}
