//! Integration tests for the validate-then-apply pipeline
//!
//! Covers:
//! - Song appends with sorting and duplicates
//! - Removal followed by playlist creation numbering
//! - Fail-fast validation leaving the input untouched
//! - No-op change sets

use highspot_core::types::{PlaylistId, SongId, UserId};
use highspot_core::{
    apply_changes, to_sorted_json, ChangeOptions, ChangeSet, HighspotError, LibraryDocument,
    PlaylistFault, RemovePolicy,
};
use serde_json::{json, Value};

fn document(value: Value) -> LibraryDocument {
    serde_json::from_value(value).expect("valid library document")
}

fn changes(value: Value) -> ChangeSet {
    serde_json::from_value(value).expect("valid change set")
}

fn run(doc: &LibraryDocument, changes: &ChangeSet) -> highspot_core::Result<LibraryDocument> {
    apply_changes(doc, changes, &ChangeOptions::default())
}

#[test]
fn test_add_song_appends_and_sorts() {
    let doc = document(json!({
        "playlists": [{"id": 1, "song_ids": [5]}],
        "songs": [{"id": 5}, {"id": 7}],
        "users": []
    }));
    let changes = changes(json!({
        "playlist_remove": [],
        "playlist_add_song": [{"playlist_id": 1, "song_id": 7}],
        "user_add_playlist": []
    }));

    let updated = run(&doc, &changes).unwrap();

    assert_eq!(
        serde_json::to_value(&updated).unwrap()["playlists"],
        json!([{"id": 1, "song_ids": [5, 7]}])
    );
}

#[test]
fn test_remove_then_create_numbers_from_remaining_playlists() {
    let doc = document(json!({
        "playlists": [{"id": 3}],
        "songs": [],
        "users": [{"id": 9}]
    }));
    let changes = changes(json!({
        "playlist_remove": [3],
        "playlist_add_song": [],
        "user_add_playlist": [{"user_id": 9, "song_ids": []}]
    }));

    let updated = run(&doc, &changes).unwrap();

    assert_eq!(
        serde_json::to_value(&updated).unwrap()["playlists"],
        json!([{"id": 1, "user_id": 9, "song_ids": []}])
    );
}

#[test]
fn test_batch_of_new_playlists_gets_increasing_ids() {
    let doc = document(json!({
        "playlists": [{"id": 2, "song_ids": []}, {"id": 8, "song_ids": []}],
        "songs": [{"id": "a"}, {"id": "b"}],
        "users": [{"id": 1}, {"id": 2}]
    }));
    let changes = changes(json!({
        "playlist_remove": [8],
        "user_add_playlist": [
            {"user_id": 1, "song_ids": ["b", "a"], "name": "first"},
            {"user_id": 2, "song_ids": ["a"], "name": "second"}
        ]
    }));

    let updated = run(&doc, &changes).unwrap();

    let ids: Vec<_> = updated.playlist_ids().cloned().collect();
    assert_eq!(
        ids,
        vec![PlaylistId::from(2), PlaylistId::from(3), PlaylistId::from(4)]
    );

    // Request fields are copied verbatim, songs unsorted
    let first = updated.playlist(&PlaylistId::from(3)).unwrap();
    assert_eq!(first.songs(), &[SongId::from("b"), SongId::from("a")]);
    assert_eq!(first.user_id, Some(UserId::from(1)));
    assert_eq!(first.extra.get("name"), Some(&json!("first")));
}

#[test]
fn test_reapplying_add_song_duplicates_the_song() {
    let doc = document(json!({
        "playlists": [{"id": 1, "song_ids": [5]}],
        "songs": [{"id": 5}, {"id": 7}],
        "users": []
    }));
    let changes = changes(json!({
        "playlist_remove": [],
        "playlist_add_song": [{"playlist_id": 1, "song_id": 7}]
    }));

    let once = run(&doc, &changes).unwrap();
    let twice = run(&once, &changes).unwrap();

    assert_eq!(
        twice.playlist(&PlaylistId::from(1)).unwrap().songs(),
        &[SongId::from(5), SongId::from(7), SongId::from(7)]
    );
}

#[test]
fn test_unknown_playlist_fails_and_leaves_input_alone() {
    let doc = document(json!({
        "playlists": [{"id": 1, "song_ids": [5]}],
        "songs": [{"id": 5}],
        "users": []
    }));
    let before = doc.clone();
    let changes = changes(json!({
        "playlist_remove": [],
        "playlist_add_song": [{"playlist_id": 99, "song_id": 5}]
    }));

    let err = run(&doc, &changes).unwrap_err();

    assert!(matches!(
        err,
        HighspotError::Playlist(PlaylistFault::MissingAddSongTarget)
    ));
    assert!(err.is_validation());
    assert_eq!(doc, before);
}

#[test]
fn test_dangling_song_in_new_playlist_request() {
    let doc = document(json!({
        "playlists": [],
        "songs": [{"id": 5}],
        "users": [{"id": 1}]
    }));
    let changes = changes(json!({
        "playlist_remove": [],
        "user_add_playlist": [{"user_id": 1, "song_ids": [5, 6]}]
    }));

    assert!(matches!(run(&doc, &changes).unwrap_err(), HighspotError::Song));
}

#[test]
fn test_dangling_user() {
    let doc = document(json!({"playlists": [], "songs": [], "users": [{"id": 1}]}));
    let changes = changes(json!({
        "playlist_remove": [],
        "user_add_playlist": [{"user_id": 2, "song_ids": []}]
    }));

    assert!(matches!(run(&doc, &changes).unwrap_err(), HighspotError::User));
}

#[test]
fn test_remove_policy_controls_missing_remove_list() {
    let doc = document(json!({"playlists": [{"id": 1}], "songs": [], "users": []}));
    let changes = changes(json!({}));

    let err = run(&doc, &changes).unwrap_err();
    assert!(matches!(err, HighspotError::MissingOperation("playlist_remove")));

    let lenient = ChangeOptions {
        remove_policy: RemovePolicy::DefaultEmpty,
    };
    let updated = apply_changes(&doc, &changes, &lenient).unwrap();
    assert_eq!(updated, doc);
}

#[test]
fn test_empty_change_set_is_a_no_op() {
    let raw = json!({
        "users": [{"name": "Ada", "id": 1}],
        "songs": [{"title": "Intro", "artist": "X", "id": 10}],
        "playlists": [{"song_ids": [10, 10], "id": 4, "user_id": 1}],
        "version": "2"
    });
    let doc = document(raw.clone());
    let changes = changes(json!({"playlist_remove": []}));

    let updated = run(&doc, &changes).unwrap();

    assert_eq!(serde_json::to_value(&updated).unwrap(), raw);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let doc = document(json!({
        "playlists": [{"id": 1, "song_ids": [3, 1]}, {"id": 2, "song_ids": []}],
        "songs": [{"id": 1}, {"id": 2}, {"id": 3}],
        "users": [{"id": 1}]
    }));
    let changes = changes(json!({
        "playlist_remove": [2],
        "playlist_add_song": [{"playlist_id": 1, "song_id": 2}],
        "user_add_playlist": [{"user_id": 1, "song_ids": [3]}]
    }));

    let first = to_sorted_json(&run(&doc, &changes).unwrap()).unwrap();
    let second = to_sorted_json(&run(&doc, &changes).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_null_song_list_in_request_creates_empty_playlist() {
    let doc = document(json!({"playlists": [], "songs": [], "users": [{"id": 1}]}));
    let changes = changes(json!({
        "playlist_remove": [],
        "user_add_playlist": [{"user_id": 1, "song_ids": null}]
    }));

    let updated = run(&doc, &changes).unwrap();

    assert_eq!(
        serde_json::to_value(&updated).unwrap()["playlists"],
        json!([{"id": 1, "user_id": 1, "song_ids": []}])
    );
}

#[test]
fn test_creation_past_largest_integer_id_fails_without_duplicates() {
    let doc = document(json!({
        "playlists": [{"id": i64::MAX, "song_ids": []}],
        "songs": [],
        "users": [{"id": 1}]
    }));
    let changes = changes(json!({
        "playlist_remove": [],
        "user_add_playlist": [
            {"user_id": 1, "song_ids": []},
            {"user_id": 1, "song_ids": []}
        ]
    }));

    let err = run(&doc, &changes).unwrap_err();

    assert!(matches!(err, HighspotError::PlaylistIdsExhausted));
    assert!(!err.is_validation());
}
