use super::*;

use tempfile::tempdir;

/// Build an rss document with the given `(title, categories)` items.
fn rss_feed(items: &[(&str, &[&str])]) -> String {
    let mut body = String::new();
    body.push_str("<rss version=\"2.0\"><channel>");
    body.push_str("<title>Quiet Measures</title>");
    body.push_str("<link>https://example.org</link>");
    body.push_str("<description>Notes on data</description>");
    for (title, categories) in items {
        body.push_str("<item>");
        body.push_str(&format!("<title>{}</title>", title));
        body.push_str(&format!(
            "<link>https://example.org/posts/{}</link>",
            title
        ));
        body.push_str(&format!("<description>About {}</description>", title));
        for category in categories.iter() {
            body.push_str(&format!("<category>{}</category>", category));
        }
        body.push_str("</item>");
    }
    body.push_str("</channel></rss>");
    body
}

/// Build an atom document with the given `(title, categories)` entries.
fn atom_feed(entries: &[(&str, &[&str])]) -> String {
    let mut body = String::new();
    body.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">");
    body.push_str("<title>Quiet Measures</title>");
    body.push_str("<id>urn:quiet-measures</id>");
    body.push_str("<updated>2026-01-01T00:00:00Z</updated>");
    for (title, categories) in entries {
        body.push_str("<entry>");
        body.push_str(&format!("<title>{}</title>", title));
        body.push_str(&format!("<id>urn:quiet-measures:{}</id>", title));
        body.push_str("<updated>2026-01-01T00:00:00Z</updated>");
        for category in categories.iter() {
            body.push_str(&format!("<category term=\"{}\"/>", category));
        }
        body.push_str("</entry>");
    }
    body.push_str("</feed>");
    body
}

fn titles(doc: &FeedDocument) -> Vec<String> {
    doc.entries().map(|entry| entry.title().to_string()).collect()
}

#[test]
fn includes_only_tagged_items() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[
        ("alpha", &["R", "code"]),
        ("bravo", &["Python"]),
        ("charlie", &[]),
    ]);
    let mut doc: FeedDocument = body.parse().unwrap();
    assert_eq!(doc.entry_count(), 3);

    doc.retain_entries(&[include_category(Category::new("R"))]);

    assert_eq!(titles(&doc), vec!["alpha"]);
    assert_eq!(doc.title(), "Quiet Measures");
}

#[test]
fn preserves_order_and_content() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[("alpha", &["R"]), ("bravo", &["R"])]);
    let mut doc: FeedDocument = body.parse().unwrap();

    doc.retain_entries(&[include_category(Category::new("R"))]);

    assert_eq!(titles(&doc), vec!["alpha", "bravo"]);
    let FeedDocument::Rss(channel) = &doc else {
        panic!("expected rss");
    };
    assert_eq!(
        channel.items()[0].link(),
        Some("https://example.org/posts/alpha")
    );
    assert_eq!(channel.items()[0].description(), Some("About alpha"));
    assert_eq!(channel.items()[0].categories().len(), 1);
}

#[test]
fn preserves_channel_metadata() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[("alpha", &["Python"])]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("R"))]);

    let reparsed: FeedDocument = doc.to_xml().unwrap().parse().unwrap();
    assert_eq!(reparsed.entry_count(), 0);
    let FeedDocument::Rss(channel) = &reparsed else {
        panic!("expected rss");
    };
    assert_eq!(channel.title(), "Quiet Measures");
    assert_eq!(channel.link(), "https://example.org");
    assert_eq!(channel.description(), "Notes on data");
}

#[test]
fn matching_is_case_sensitive() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[("alpha", &["R"])]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("r"))]);
    assert_eq!(doc.entry_count(), 0);
}

#[test]
fn matching_is_not_substring() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[("alpha", &["Rust"]), ("bravo", &["R"])]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("R"))]);
    assert_eq!(titles(&doc), vec!["bravo"]);
}

#[test]
fn empty_feed_stays_valid() {
    tracing_subscriber::fmt::try_init().ok();

    let body = rss_feed(&[]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("R"))]);
    assert_eq!(doc.entry_count(), 0);

    let reparsed: FeedDocument = doc.to_xml().unwrap().parse().unwrap();
    assert_eq!(reparsed.entry_count(), 0);
}

#[test]
fn refiltering_is_idempotent() {
    tracing_subscriber::fmt::try_init().ok();

    let category = Category::new("R");
    let body = rss_feed(&[
        ("alpha", &["R"]),
        ("bravo", &["Python"]),
        ("charlie", &["R", "stats"]),
    ]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(category.clone())]);
    let once = doc.to_xml().unwrap();

    let mut doc: FeedDocument = once.parse().unwrap();
    doc.retain_entries(&[include_category(category)]);
    let twice = doc.to_xml().unwrap();

    assert_eq!(once, twice);
}

#[test]
fn atom_entries_filter_too() {
    tracing_subscriber::fmt::try_init().ok();

    let body = atom_feed(&[
        ("alpha", &["R", "code"]),
        ("bravo", &["Python"]),
        ("charlie", &[]),
    ]);
    let mut doc: FeedDocument = body.parse().unwrap();
    assert!(matches!(doc, FeedDocument::Atom(_)));
    assert_eq!(doc.entry_count(), 3);

    doc.retain_entries(&[include_category(Category::new("R"))]);

    assert_eq!(titles(&doc), vec!["alpha"]);
    assert_eq!(doc.title(), "Quiet Measures");
}

#[test]
fn missing_input_is_a_read_error() {
    tracing_subscriber::fmt::try_init().ok();

    let dir = tempdir().unwrap();
    let result = FeedDocument::load(dir.path().join("absent.xml"));
    assert!(matches!(result, Err(FeedError::Read { .. })));
}

#[test]
fn invalid_markup_is_a_parse_error() {
    tracing_subscriber::fmt::try_init().ok();

    let dir = tempdir().unwrap();
    let path = dir.path().join("not-a-feed.xml");
    std::fs::write(&path, "<html><body>nope</body></html>").unwrap();
    let result = FeedDocument::load(&path);
    assert!(matches!(result, Err(FeedError::Parse { .. })));
}

#[test]
fn write_then_load_round_trips() {
    tracing_subscriber::fmt::try_init().ok();

    let dir = tempdir().unwrap();
    let path = dir.path().join("filtered.xml");
    let body = rss_feed(&[("alpha", &["R"]), ("bravo", &["Python"])]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("R"))]);
    doc.write(&path).unwrap();

    assert!(path.exists());
    assert!(!dir.path().join("filtered.xml.tmp").exists());

    let reloaded = FeedDocument::load(&path).unwrap();
    assert_eq!(titles(&reloaded), vec!["alpha"]);
}

#[test]
fn unwritable_output_is_a_write_error() {
    tracing_subscriber::fmt::try_init().ok();

    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("filtered.xml");
    let body = rss_feed(&[("alpha", &["R"])]);
    let doc: FeedDocument = body.parse().unwrap();
    let result = doc.write(&path);
    assert!(matches!(result, Err(FeedError::Write { .. })));
    assert!(!path.exists());
}

#[test]
fn no_matches_still_writes_a_feed() {
    tracing_subscriber::fmt::try_init().ok();

    let dir = tempdir().unwrap();
    let path = dir.path().join("filtered.xml");
    let body = rss_feed(&[("alpha", &["Python"])]);
    let mut doc: FeedDocument = body.parse().unwrap();
    doc.retain_entries(&[include_category(Category::new("R"))]);
    doc.write(&path).unwrap();

    let reloaded = FeedDocument::load(&path).unwrap();
    assert_eq!(reloaded.entry_count(), 0);
    assert_eq!(reloaded.title(), "Quiet Measures");
}
