use optic_common::{Jobname, NewRequest, RequestForm};
use optic_storage::RequestStorage;
use tempfile::TempDir;

async fn fresh_storage() -> (TempDir, RequestStorage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let dsn = format!("sqlite://{}?mode=rwc", dir.path().join("intake.db").display());
    let storage = RequestStorage::connect(&dsn).await.expect("connect");
    storage.sync().await.expect("sync");
    (dir, storage)
}

fn valid_request() -> NewRequest {
    RequestForm {
        created_by: "ana@example.com".to_string(),
        start_date: Some("2026-08-10".to_string()),
        end_date: Some("2026-08-12".to_string()),
        jobnames: vec![Jobname::Retention],
        prompt_name: "Refusals".to_string(),
        user_prompt: "Flag calls where the agent refuses outright.".to_string(),
        ..RequestForm::default()
    }
    .validate()
    .expect("valid form")
}

#[tokio::test]
async fn valid_submission_inserts_exactly_one_new_row() {
    let (_dir, storage) = fresh_storage().await;

    let request_id = storage.insert_request(valid_request()).await.expect("insert");
    assert_eq!(request_id.get_version_num(), 4);
    assert_eq!(storage.count_requests().await.unwrap(), 1);

    let row = storage
        .find_request(request_id)
        .await
        .unwrap()
        .expect("row present");
    assert_eq!(row.status, "NEW");
    assert_eq!(row.priority, 10);
    assert_eq!(row.max_rows, 5000);
    assert_eq!(row.model_type, "reasoning");
    assert_eq!(row.created_by, "ana@example.com");
    assert_eq!(row.notes, None);
}

#[tokio::test]
async fn request_ids_are_distinct_across_submissions() {
    let (_dir, storage) = fresh_storage().await;

    let first = storage.insert_request(valid_request()).await.unwrap();
    let second = storage.insert_request(valid_request()).await.unwrap();
    assert_ne!(first, second);
    assert_eq!(storage.count_requests().await.unwrap(), 2);
}

#[tokio::test]
async fn persisted_jobnames_round_trip() {
    let (_dir, storage) = fresh_storage().await;

    let request_id = storage.insert_request(valid_request()).await.unwrap();
    let row = storage.find_request(request_id).await.unwrap().unwrap();
    let jobnames: Vec<Jobname> = serde_json::from_str(&row.jobnames).unwrap();
    assert_eq!(jobnames, vec![Jobname::Retention]);
}

#[tokio::test]
async fn persisted_end_ts_is_the_exclusive_day_after_end_date() {
    let (_dir, storage) = fresh_storage().await;

    let request_id = storage.insert_request(valid_request()).await.unwrap();
    let row = storage.find_request(request_id).await.unwrap().unwrap();
    assert_eq!(row.start_ts, time::macros::datetime!(2026-08-10 00:00 UTC));
    assert_eq!(row.end_ts, time::macros::datetime!(2026-08-13 00:00 UTC));
}

#[tokio::test]
async fn validation_failure_never_reaches_storage() {
    let (_dir, storage) = fresh_storage().await;

    let form = RequestForm {
        created_by: "  ".to_string(),
        prompt_name: "Refusals".to_string(),
        user_prompt: "Find refusals.".to_string(),
        ..RequestForm::default()
    };
    assert!(form.validate().is_err());
    assert_eq!(storage.count_requests().await.unwrap(), 0);
}

#[tokio::test]
async fn storage_failure_surfaces_the_raw_error_and_persists_nothing() {
    // No sync: the table does not exist, so the insert must fail.
    let dir = tempfile::tempdir().expect("tempdir");
    let dsn = format!("sqlite://{}?mode=rwc", dir.path().join("intake.db").display());
    let storage = RequestStorage::connect(&dsn).await.expect("connect");

    let err = storage.insert_request(valid_request()).await.unwrap_err();
    assert!(err.to_string().contains("adhoc_llm_requests"));

    storage.sync().await.expect("sync");
    assert_eq!(storage.count_requests().await.unwrap(), 0);
}
