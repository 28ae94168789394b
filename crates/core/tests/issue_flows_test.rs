//! Integration tests for issue CRUD flows against a scripted store.

mod common;

use std::sync::Arc;

use serde_json::json;

use cleancity_core::errors::Error;
use cleancity_core::identity::UserIdentity;
use cleancity_core::issues::{
    IssueCategory, IssueError, IssueService, IssueServiceTrait, IssueStatus, IssueUpdate, NewIssue,
};
use common::{issue_record, MockRemoteStore};

fn owner() -> UserIdentity {
    UserIdentity {
        email: "Owner@X.com".to_string(),
        display_name: "Owner".to_string(),
        photo_url: String::new(),
    }
}

fn new_issue() -> NewIssue {
    NewIssue {
        title: "Overflowing bins".to_string(),
        category: IssueCategory::Garbage,
        location: "Ward 5".to_string(),
        description: "Bins uncollected for a week".to_string(),
        image: None,
        suggested_amount: 500.0,
        status: IssueStatus::Ongoing,
    }
}

fn issue_update() -> IssueUpdate {
    IssueUpdate {
        title: "Overflowing bins - cleared?".to_string(),
        category: IssueCategory::Garbage,
        location: "Ward 5".to_string(),
        description: "Crew visited, checking".to_string(),
        image: None,
        suggested_amount: 500.0,
        status: IssueStatus::Ended,
    }
}

#[tokio::test]
async fn create_issue_validates_before_any_network_call() {
    let store = Arc::new(MockRemoteStore::new());
    let service = IssueService::new(store.clone());

    let mut invalid = new_issue();
    invalid.title = String::new();

    let outcome = service.create_issue(&owner(), invalid).await;
    assert!(matches!(outcome, Err(Error::Validation(_))));
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn create_issue_requires_an_authenticated_identity() {
    let store = Arc::new(MockRemoteStore::new());
    let service = IssueService::new(store.clone());

    let anonymous = UserIdentity::default();
    let outcome = service.create_issue(&anonymous, new_issue()).await;
    assert!(matches!(outcome, Err(Error::Validation(_))));
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn create_issue_stamps_owner_and_timestamp() {
    let store = Arc::new(MockRemoteStore::new());
    store.push_ok(json!({"acknowledged": true, "insertedId": "66f9"}));
    let service = IssueService::new(store.clone());

    let created = service.create_issue(&owner(), new_issue()).await.unwrap();
    assert_eq!(created.id, "66f9");
    assert_eq!(created.owner_email, "Owner@X.com");

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/issues");

    let body = calls[0].body.as_ref().unwrap();
    assert_eq!(body["email"], "Owner@X.com");
    assert_eq!(body["status"], "ongoing");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn get_issue_maps_404_to_not_found() {
    let store = Arc::new(MockRemoteStore::new());
    store.push_status(404, "no such issue");
    let service = IssueService::new(store.clone());

    let outcome = service.get_issue("missing").await;
    assert!(matches!(
        outcome,
        Err(Error::Issue(IssueError::NotFound(id))) if id == "missing"
    ));
}

#[tokio::test]
async fn update_is_rejected_for_non_owners_without_a_write() {
    let store = Arc::new(MockRemoteStore::new());
    store.push_ok(issue_record("i-1", "somebody@else.org"));
    let service = IssueService::new(store.clone());

    let outcome = service.update_issue(&owner(), "i-1", issue_update()).await;
    assert!(matches!(
        outcome,
        Err(Error::Issue(IssueError::NotOwned { .. }))
    ));

    let calls = store.calls();
    assert_eq!(calls.len(), 1, "only the ownership check may hit the store");
    assert_eq!(calls[0].method, "GET");
}

#[tokio::test]
async fn update_by_owner_sends_put_without_the_ownership_key() {
    let store = Arc::new(MockRemoteStore::new());
    // stored casing differs from the authenticated identity's casing
    store.push_ok(issue_record("i-1", "owner@x.com"));
    store.push_ok(json!({"modifiedCount": 1}));
    let service = IssueService::new(store.clone());

    let updated = service
        .update_issue(&owner(), "i-1", issue_update())
        .await
        .unwrap();
    assert_eq!(updated.status, IssueStatus::Ended);
    assert_eq!(updated.owner_email, "owner@x.com");

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].method, "PUT");
    assert_eq!(calls[1].path, "/issues/i-1");

    let body = calls[1].body.as_ref().unwrap();
    assert!(body.get("email").is_none(), "ownership is immutable");
    assert_eq!(body["title"], "Overflowing bins - cleared?");
}

#[tokio::test]
async fn delete_by_owner_is_a_get_then_delete() {
    let store = Arc::new(MockRemoteStore::new());
    store.push_ok(issue_record("i-1", "owner@x.com"));
    store.push_ok(json!({"deletedCount": 1}));
    let service = IssueService::new(store.clone());

    service.delete_issue(&owner(), "i-1").await.unwrap();

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[1].method, "DELETE");
    assert_eq!(calls[1].path, "/issues/i-1");
}

#[tokio::test]
async fn latest_issues_sorts_newest_first_and_respects_the_limit() {
    let store = Arc::new(MockRemoteStore::new());
    let mut old = issue_record("old", "a@x.com");
    old["createdAt"] = json!("2025-11-01T08:00:00Z");
    let mut mid = issue_record("mid", "a@x.com");
    mid["createdAt"] = json!("2025-11-05T08:00:00Z");
    let mut new = issue_record("new", "a@x.com");
    new["createdAt"] = json!("2025-11-09T08:00:00Z");
    store.push_ok(json!([old, new, mid]));
    let service = IssueService::new(store.clone());

    let feed = service.latest_issues(2).await.unwrap();
    let ids: Vec<String> = feed.into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["new", "mid"]);

    let calls = store.calls();
    assert_eq!(
        calls[0].params,
        vec![("limit".to_string(), "2".to_string())]
    );
}

#[tokio::test]
async fn get_issues_tolerates_a_non_array_body() {
    let store = Arc::new(MockRemoteStore::new());
    store.push_ok(json!({"message": "maintenance"}));
    let service = IssueService::new(store.clone());

    let issues = service.get_issues().await.unwrap();
    assert!(issues.is_empty());
}
