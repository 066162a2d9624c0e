use super::*;

#[test]
fn parses_items_in_order() {
    let items = parse_manifest(
        r#"[
            {"title": "Intro", "type": "youtube", "url": "https://www.youtube.com/embed/abc"},
            {"title": "Clip", "type": "mp4", "url": "media/clip.mp4"},
            {"type": "audio", "url": "media/song.mp3"}
        ]"#,
    )
    .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind, "youtube");
    assert_eq!(items[1].title(), "Clip");
    assert_eq!(items[2].title, None);
}

#[test]
fn empty_array_is_valid() {
    assert_eq!(parse_manifest("[]").unwrap(), Vec::<MediaItem>::new());
}

#[test]
fn non_array_json_is_a_format_error() {
    assert_eq!(parse_manifest(r#"{"videos": []}"#), Err(ManifestError::Format));
    assert_eq!(parse_manifest("42"), Err(ManifestError::Format));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(parse_manifest("[{"), Err(ManifestError::Json(_))));
}

#[test]
fn missing_fields_decode_as_empty() {
    let items = parse_manifest(r#"[{"title": "No type"}]"#).unwrap();
    assert_eq!(items[0].kind, "");
    assert_eq!(items[0].url, "");
}

#[test]
fn option_label_falls_back_to_position() {
    let titled = MediaItem::new("Trailer", "mp4", "a.mp4");
    let untitled = MediaItem {
        title: Some(String::new()),
        ..titled.clone()
    };
    assert_eq!(titled.option_label(0), "Trailer");
    assert_eq!(untitled.option_label(4), "Media Item 5");
}

#[test]
fn cache_buster_appends_timestamp() {
    let stamp = Timestamp::new(1_700_000_000_000);
    assert_eq!(
        cache_busted_url("data/videos.json", stamp),
        "data/videos.json?t=1700000000000"
    );
    assert_eq!(
        cache_busted_url("data/videos.json?v=2", stamp),
        "data/videos.json?v=2&t=1700000000000"
    );
}

#[test]
fn diagnostic_lists_every_check() {
    let msg = failure_diagnostic(&ManifestError::Status(404), "data/videos.json", "videos.json");
    assert!(msg.contains("HTTP error: 404"));
    assert!(msg.contains("file://"));
    assert!(msg.contains("(data/videos.json)"));
    assert!(msg.contains("videos.json is a valid JSON array"));
    assert!(msg.contains("Ctrl/Cmd+Shift+R"));
}

#[test]
fn mistyped_fields_only_affect_their_item() {
    let items = parse_manifest(
        r#"[
            {"title": 2024, "type": "mp4", "url": "a.mp4"},
            {"title": "Broken", "type": null, "url": ["b.mp4"]},
            {"title": "Fine", "type": "audio", "url": "c.mp3"}
        ]"#,
    )
    .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].title(), "2024");
    assert_eq!(items[1].kind, "");
    assert_eq!(items[1].url, "");
    assert_eq!(items[2], MediaItem::new("Fine", "audio", "c.mp3"));
}

#[test]
fn non_object_entries_keep_their_position() {
    let items = parse_manifest(r#"["oops", null, {"title": "Real", "type": "mp4", "url": "r.mp4"}]"#)
        .unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0], MediaItem::default());
    assert_eq!(items[1].option_label(1), "Media Item 2");
    assert_eq!(items[2].title(), "Real");
}

#[test]
fn only_abort_counts_as_cancellation() {
    assert!(ManifestError::Aborted.is_cancellation());
    assert!(!ManifestError::Timeout(10_000).is_cancellation());
    assert!(!ManifestError::Status(500).is_cancellation());
}
