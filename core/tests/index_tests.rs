use newsindex::{Index, Posting, RegisterError};
use std::io::Write;
use tempfile::NamedTempFile;

fn hit(article_id: u32, count: u32) -> Posting {
    Posting { article_id, count }
}

fn stop_word_file(words: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(words.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn duplicate_url_is_rejected_regardless_of_title() {
    let mut idx = Index::new();
    assert_eq!(idx.register_article("http://news.example.com/a", Some("First")), Ok(0));
    assert_eq!(
        idx.register_article("http://news.example.com/a", Some("Second")),
        Err(RegisterError::DuplicateUrl("http://news.example.com/a".into()))
    );
    assert_eq!(idx.num_articles(), 1);
}

#[test]
fn duplicate_server_title_is_rejected_per_server() {
    let mut idx = Index::new();
    assert_eq!(idx.register_article("http://a.example.com/1", Some("Storm hits coast")), Ok(0));
    assert_eq!(
        idx.register_article("http://a.example.com/2", Some("Storm hits coast")),
        Err(RegisterError::DuplicateServerTitle {
            server: "a.example.com".into(),
            title: "Storm hits coast".into(),
        })
    );
    assert_eq!(idx.register_article("http://b.example.com/1", Some("Storm hits coast")), Ok(1));
}

#[test]
fn url_and_title_checks_are_case_sensitive() {
    let mut idx = Index::new();
    assert_eq!(idx.register_article("http://a.com/Story", Some("Title")), Ok(0));
    assert_eq!(idx.register_article("http://a.com/story", Some("title")), Ok(1));
}

#[test]
fn missing_url_is_distinguishable() {
    let mut idx = Index::new();
    assert_eq!(idx.register_article("", Some("x")), Err(RegisterError::MissingUrl));
}

#[test]
fn article_ids_are_dense_and_stable() {
    let mut idx = Index::new();
    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(idx.register_article(&format!("http://a.com/{i}"), Some(&format!("t{i}"))).unwrap());
        // a rejected registration must not consume an ID
        assert!(idx.register_article(&format!("http://a.com/{i}"), None).is_err());
    }
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(idx.article_title(2), Some("t2"));
    assert_eq!(idx.article_url(3), Some("http://a.com/3"));
    assert_eq!(idx.article_title(4), None);
    assert_eq!(idx.article(0).map(|a| a.server.as_str()), Some("a.com"));
}

#[test]
fn indexing_is_case_insensitive() {
    let mut idx = Index::new();
    let id = idx.register_article("http://a.com/1", Some("Cats")).unwrap();
    idx.add_tokens(id, ["Cat", "cat", "CAT"]);
    assert_eq!(idx.num_words(), 1);
    assert_eq!(idx.postings("cat"), Some(&[hit(id, 3)][..]));
    assert_eq!(idx.query_top_n("cAt", 5), vec![hit(id, 3)]);
}

#[test]
fn stop_words_are_never_indexed() {
    let file = stop_word_file("the\nAnd\r\nof\n");
    let mut idx = Index::new();
    assert_eq!(idx.load_stop_words(file.path()).unwrap(), 3);
    assert!(idx.is_stop_word("THE"));
    assert!(idx.is_stop_word("and"));
    assert!(!idx.is_stop_word("cat"));

    let id = idx.register_article("http://a.com/1", Some("A")).unwrap();
    idx.add_tokens(id, ["The", "cat", "AND", "the"]);
    assert!(idx.postings("the").is_none());
    assert!(idx.query_top_n("the", 10).is_empty());
    assert_eq!(idx.num_words(), 1);
}

#[test]
fn stop_words_leave_existing_postings_untouched() {
    let mut idx = Index::new();
    let id = idx.register_article("http://a.com/1", Some("A")).unwrap();
    idx.add_token(id, "the");
    assert_eq!(idx.postings("the"), Some(&[hit(id, 1)][..]));

    let file = stop_word_file("the\n");
    idx.load_stop_words(file.path()).unwrap();
    idx.add_token(id, "The");
    idx.add_token(id, "THE");
    assert_eq!(idx.postings("the"), Some(&[hit(id, 1)][..]));
    assert_eq!(idx.num_words(), 1);
}

#[test]
fn latin1_stop_word_file_loads_every_line() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"the\n\xFCber\nand\n").unwrap();
    f.flush().unwrap();

    let mut idx = Index::new();
    assert_eq!(idx.load_stop_words(f.path()).unwrap(), 3);
    assert!(idx.is_stop_word("the"));
    assert!(idx.is_stop_word("AND"));
}

#[test]
fn missing_stop_word_file_fails_without_side_effects() {
    let mut idx = Index::new();
    assert!(idx.load_stop_words("/no/such/dir/stop.txt").is_err());
    assert!(!idx.is_stop_word("the"));
}

#[test]
fn top_n_orders_by_count_then_article_id() {
    let mut idx = Index::new();
    for i in 0..4 {
        idx.register_article(&format!("http://a.com/{i}"), Some(&format!("t{i}"))).unwrap();
    }
    for _ in 0..5 {
        idx.add_token(3, "cat");
    }
    for _ in 0..5 {
        idx.add_token(1, "cat");
    }
    for _ in 0..9 {
        idx.add_token(2, "cat");
    }
    assert_eq!(idx.query_top_n("cat", 2), vec![hit(2, 9), hit(1, 5)]);
    assert_eq!(idx.query_top_n("cat", 100), vec![hit(2, 9), hit(1, 5), hit(3, 5)]);
}

#[test]
fn top_n_is_empty_for_unknown_word_or_zero_n() {
    let mut idx = Index::new();
    let id = idx.register_article("http://a.com/1", Some("A")).unwrap();
    idx.add_token(id, "cat");
    assert!(idx.query_top_n("dog", 5).is_empty());
    assert!(idx.query_top_n("cat", 0).is_empty());
    assert!(idx.query_top_n("", 5).is_empty());
}

#[test]
fn repeated_tokens_collapse_into_one_posting() {
    let mut idx = Index::new();
    let a = idx.register_article("http://a.com/1", Some("A")).unwrap();
    let b = idx.register_article("http://a.com/2", Some("B")).unwrap();
    for _ in 0..7 {
        idx.add_token(a, "news");
    }
    idx.add_token(b, "News");
    assert_eq!(idx.postings("news").map(|p| p.len()), Some(2));
    assert_eq!(idx.query_top_n("news", 5), vec![hit(a, 7), hit(b, 1)]);
}

#[test]
fn query_results_serialize_as_json() {
    let mut idx = Index::new();
    let id = idx.register_article("http://a.com/1", Some("A")).unwrap();
    idx.add_token(id, "cat");
    let json = serde_json::to_value(idx.query_top_n("cat", 1)).unwrap();
    assert_eq!(json, serde_json::json!([{ "article_id": 0, "count": 1 }]));
}
