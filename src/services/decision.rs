//! Restore decision engine.
//!
//! `decide` maps the stat-time status of an object, whether the destination
//! file already exists locally, and the configured policy onto exactly one
//! [`Action`]. It is pure, so running it again against the same backend state
//! gives the same answer: an in-flight restore is never re-issued and a
//! downloaded copy is never fetched again unless overwriting was asked for.
//!
//! | archived | restoring | restored | local | overwrite | restore | action                    |
//! |----------|-----------|----------|-------|-----------|---------|---------------------------|
//! | no       |           |          | yes   | no        |         | skip (already present)    |
//! | no       |           |          | yes   | yes       |         | fetch                     |
//! | no       |           |          | no    |           |         | fetch                     |
//! | yes      | yes       | no       |       |           |         | skip (restore in progress)|
//! | yes      | no        | yes      | yes   | no        |         | skip (already present)    |
//! | yes      | no        | yes      | yes   | yes       |         | fetch                     |
//! | yes      | no        | yes      | no    |           |         | fetch                     |
//! | yes      | no        | no       |       |           | no      | skip (not requested)      |
//! | yes      | no        | no       |       |           | yes     | restore                   |

use crate::domain::models::{Action, DecisionPolicy, ObjectStatus, SkipReason};

/// Choose the next step for an object
pub fn decide(status: &ObjectStatus, local_exists: bool, policy: &DecisionPolicy) -> Action {
    match (status.is_archived(), status.is_restoring(), status.is_restored()) {
        (false, _, _) | (true, false, true) => fetch_unless_present(local_exists, policy),
        (true, true, _) => Action::DoNothing(SkipReason::RestoreInProgress),
        (true, false, false) if policy.restore_enabled => Action::IssueRestore(policy.restore),
        (true, false, false) => Action::DoNothing(SkipReason::RestoreNotRequested),
    }
}

/// Whether `decide` can give a different answer depending on the local file.
/// Callers use this to skip the filesystem stat when it cannot matter.
pub fn depends_on_local_file(status: &ObjectStatus) -> bool {
    !status.is_archived() || status.is_restored()
}

fn fetch_unless_present(local_exists: bool, policy: &DecisionPolicy) -> Action {
    if local_exists && !policy.overwrite_enabled {
        Action::DoNothing(SkipReason::AlreadyPresent)
    } else {
        Action::FetchObject
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        models::{RestoreRequestSpec, RestoreTier},
        value_objects::RetentionDays,
    };

    fn policy(overwrite_enabled: bool, restore_enabled: bool) -> DecisionPolicy {
        DecisionPolicy {
            restore_enabled,
            overwrite_enabled,
            restore: RestoreRequestSpec {
                days: RetentionDays::new(3).unwrap(),
                tier: RestoreTier::Standard,
            },
        }
    }

    #[test]
    fn test_available_local_present_no_overwrite() {
        let action = decide(&ObjectStatus::available(10), true, &policy(false, true));
        assert_eq!(action, Action::DoNothing(SkipReason::AlreadyPresent));
    }

    #[test]
    fn test_available_local_present_overwrite() {
        let action = decide(&ObjectStatus::available(10), true, &policy(true, false));
        assert_eq!(action, Action::FetchObject);
    }

    #[test]
    fn test_available_local_absent() {
        let action = decide(&ObjectStatus::available(10), false, &policy(false, false));
        assert_eq!(action, Action::FetchObject);
    }

    #[test]
    fn test_archived_restoring() {
        let action = decide(&ObjectStatus::restoring(10), false, &policy(true, true));
        assert_eq!(action, Action::DoNothing(SkipReason::RestoreInProgress));
    }

    #[test]
    fn test_restored_local_present_no_overwrite() {
        let action = decide(&ObjectStatus::restored(10), true, &policy(false, true));
        assert_eq!(action, Action::DoNothing(SkipReason::AlreadyPresent));
    }

    #[test]
    fn test_restored_local_present_overwrite() {
        let action = decide(&ObjectStatus::restored(10), true, &policy(true, false));
        assert_eq!(action, Action::FetchObject);
    }

    #[test]
    fn test_restored_local_absent() {
        let action = decide(&ObjectStatus::restored(10), false, &policy(false, false));
        assert_eq!(action, Action::FetchObject);
    }

    #[test]
    fn test_archived_restore_disabled() {
        let action = decide(&ObjectStatus::archived(10), false, &policy(true, false));
        assert_eq!(action, Action::DoNothing(SkipReason::RestoreNotRequested));
    }

    #[test]
    fn test_archived_restore_enabled() {
        let policy = policy(false, true);
        let action = decide(&ObjectStatus::archived(10), true, &policy);
        assert_eq!(action, Action::IssueRestore(policy.restore));
    }

    #[test]
    fn test_local_file_only_matters_for_readable_objects() {
        assert!(depends_on_local_file(&ObjectStatus::available(1)));
        assert!(depends_on_local_file(&ObjectStatus::restored(1)));
        assert!(!depends_on_local_file(&ObjectStatus::restoring(1)));
        assert!(!depends_on_local_file(&ObjectStatus::archived(1)));
    }
}
