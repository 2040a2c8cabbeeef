use s3_restore::{
    decide, Action, DecisionPolicy, ObjectStatus, RawObjectMetadata, RestoreRequestSpec,
    RestoreTier, RetentionDays, SkipReason, StorageClass,
};

fn policy(overwrite_enabled: bool, restore_enabled: bool, days: u32) -> DecisionPolicy {
    DecisionPolicy {
        restore_enabled,
        overwrite_enabled,
        restore: RestoreRequestSpec {
            days: RetentionDays::new(days).unwrap(),
            tier: RestoreTier::Standard,
        },
    }
}

/// Every status shape a probe can produce, paired with each local/flag combination
fn all_inputs() -> Vec<(ObjectStatus, bool, DecisionPolicy)> {
    let statuses = [
        ObjectStatus::available(10),
        ObjectStatus::archived(10),
        ObjectStatus::restoring(10),
        ObjectStatus::restored(10),
    ];
    let mut inputs = Vec::new();
    for status in statuses {
        for local_exists in [false, true] {
            for overwrite in [false, true] {
                for restore in [false, true] {
                    inputs.push((status.clone(), local_exists, policy(overwrite, restore, 3)));
                }
            }
        }
    }
    inputs
}

#[test]
fn decide_is_idempotent() {
    for (status, local_exists, policy) in all_inputs() {
        assert_eq!(
            decide(&status, local_exists, &policy),
            decide(&status, local_exists, &policy)
        );
    }
}

#[test]
fn never_restores_an_object_that_is_not_archived() {
    for (status, local_exists, policy) in all_inputs() {
        if !status.is_archived() {
            assert!(!matches!(
                decide(&status, local_exists, &policy),
                Action::IssueRestore(_)
            ));
        }
    }
}

#[test]
fn never_restores_when_restore_is_disabled() {
    for (status, local_exists, policy) in all_inputs() {
        if !policy.restore_enabled {
            assert!(!matches!(
                decide(&status, local_exists, &policy),
                Action::IssueRestore(_)
            ));
        }
    }
}

#[test]
fn never_fetches_over_a_local_file_without_overwrite() {
    for (status, local_exists, policy) in all_inputs() {
        if local_exists && !policy.overwrite_enabled {
            assert_ne!(decide(&status, local_exists, &policy), Action::FetchObject);
        }
    }
}

#[test]
fn scenario_a_plain_object_without_local_copy_is_fetched() {
    let action = decide(&ObjectStatus::available(10), false, &policy(false, false, 1));
    assert_eq!(action, Action::FetchObject);
}

#[test]
fn scenario_b_restoring_object_is_left_alone_regardless_of_flags() {
    for (status, local_exists, policy) in all_inputs() {
        if status.is_restoring() {
            assert_eq!(
                decide(&status, local_exists, &policy),
                Action::DoNothing(SkipReason::RestoreInProgress)
            );
        }
    }
}

#[test]
fn scenario_c_restored_object_already_downloaded_is_skipped() {
    let action = decide(&ObjectStatus::restored(10), true, &policy(false, true, 1));
    assert_eq!(action, Action::DoNothing(SkipReason::AlreadyPresent));
}

#[test]
fn scenario_d_archived_object_gets_a_seven_day_restore() {
    let action = decide(&ObjectStatus::archived(10), false, &policy(false, true, 7));
    match action {
        Action::IssueRestore(spec) => {
            assert_eq!(spec.days.get(), 7);
            assert_eq!(spec.tier, RestoreTier::Standard);
        }
        other => panic!("Expected a restore, got {:?}", other),
    }
}

#[test]
fn scenario_e_archived_object_without_restore_flag_is_skipped() {
    let action = decide(&ObjectStatus::archived(10), false, &policy(false, false, 7));
    assert_eq!(action, Action::DoNothing(SkipReason::RestoreNotRequested));
}

#[test]
fn archive_fixture_without_restore_header_is_archived() {
    let metadata: RawObjectMetadata =
        serde_json::from_str(include_str!("fixtures/archive_head.json")).unwrap();
    let status = ObjectStatus::from_metadata(&metadata);

    assert!(status.is_archived());
    assert!(!status.is_restoring());
    assert!(!status.is_restored());
    assert_eq!(status.size(), 1_048_576);
}

#[test]
fn restored_fixture_keeps_expiry() {
    let metadata: RawObjectMetadata =
        serde_json::from_str(include_str!("fixtures/restored_head.json")).unwrap();
    let status = ObjectStatus::from_metadata(&metadata);

    assert_eq!(status.storage_class(), &StorageClass::DeepArchive);
    assert!(status.is_archived());
    assert!(status.is_restored());
    assert_eq!(status.restore_expiry(), Some("Fri, 21 Dec 2012 00:00:00 GMT"));
}

#[test]
fn glacier_instant_retrieval_takes_the_plain_fetch_path() {
    let metadata = RawObjectMetadata {
        storage_class: Some("GLACIER_IR".to_string()),
        ..Default::default()
    };
    let status = ObjectStatus::from_metadata(&metadata);

    assert!(!status.is_archived());
    assert_eq!(decide(&status, false, &policy(false, true, 1)), Action::FetchObject);
}
