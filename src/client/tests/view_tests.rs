//! Serialization tests for the view snapshot.

use crate::client::ViewHandle;
use crate::session::domain::Account;
use crate::tasks::domain::{Task, TaskId};
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn empty_view_serializes_as_disconnected() {
    let handle = ViewHandle::new();

    let serialized = serde_json::to_value(handle.snapshot()).expect("view should serialize");

    assert_eq!(
        serialized,
        json!({
            "status": { "state": "disconnected" },
            "tasks": [],
            "last_synced_at": null,
            "draft_title": "",
            "draft_description": "",
        })
    );
}

#[test]
fn connected_view_serializes_for_presentation() {
    let handle = ViewHandle::new();
    let account = Account::new("0xa11ce00000000000000000000000000000000001")
        .expect("valid account address");
    let synced_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    handle.set_connected(account);
    handle.publish_tasks(vec![Task::new(TaskId::new(1), "Buy milk", "2%", false)], synced_at);
    handle.set_draft("next", "thing");

    let serialized = serde_json::to_value(handle.snapshot()).expect("view should serialize");

    assert_eq!(
        serialized,
        json!({
            "status": {
                "state": "connected",
                "account": "0xa11ce00000000000000000000000000000000001",
            },
            "tasks": [{
                "id": 1,
                "title": "Buy milk",
                "description": "2%",
                "completed": false,
            }],
            "last_synced_at": "2024-05-01T12:00:00Z",
            "draft_title": "next",
            "draft_description": "thing",
        })
    );
}
