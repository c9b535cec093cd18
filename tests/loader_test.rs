mod common;

use assert2::check;
use common::{Library, TempWorkspace, library};
use rstest::rstest;
use std::sync::Arc;
use verse_search::{
    Config, CorpusState, SourceConfig, Verse,
    loader::{load_batches, load_corpus},
    worker::spawn_load,
};

/// Test: Books are concatenated in configured order, records in file order.
#[rstest]
#[tokio::test]
async fn loads_books_in_source_order(library: Library) {
    let corpus = load_corpus(&library.config).await;
    check!(corpus.len() == 11);

    let books: Vec<&str> = corpus.iter().map(|v| v.book.as_str()).collect();
    check!(&books[..4] == &["Jubilees"; 4]);
    check!(&books[4..7] == &["Jasher"; 3]);
    check!(&books[7..] == &["Enoch"; 4]);
    check!(corpus.books() == vec!["Enoch", "Jasher", "Jubilees"]);
}

/// Test: Each legacy record shape normalizes to the same canonical form.
#[rstest]
#[tokio::test]
async fn normalizes_every_record_shape(library: Library) {
    let corpus = load_corpus(&library.config).await;
    let verses = corpus.verses();

    check!(
        verses[0]
            == Verse::new(
                "Jubilees",
                1,
                1,
                "In the first year of the exodus of the children of Israel out of Egypt"
            )
    );
    check!(verses[3].reference() == "Jubilees 4:2");
    check!(verses[4] == Verse::new("Jasher", 1, 1, "And God said, Let us make man in our image"));
    check!(verses[6].reference() == "Jasher 2:1");
    check!(verses[7].reference() == "Enoch 1:2");
}

/// Test: A missing book degrades to nothing without affecting the others.
#[rstest]
#[tokio::test]
async fn missing_source_is_skipped(library: Library) {
    library.workspace.remove_file("jasher.json");

    let batches = load_batches(&library.config).await;
    check!(batches.len() == 3);
    check!(batches[1].records.is_empty());

    let corpus = load_corpus(&library.config).await;
    check!(corpus.len() == 8);
    check!(corpus.books() == vec!["Enoch", "Jubilees"]);
}

/// Test: Malformed or non-array files degrade the same way.
#[rstest]
#[case("{ not json")]
#[case(r#"{ "verses": [] }"#)]
#[tokio::test]
async fn broken_source_is_skipped(library: Library, #[case] contents: &str) {
    library.workspace.create_file("enoch.json", contents);

    let corpus = load_corpus(&library.config).await;
    check!(corpus.len() == 7);
    check!(!corpus.books().contains(&"Enoch"));
}

/// Test: An unlabeled source uses record books, reference books, then the fallback.
#[tokio::test]
async fn unlabeled_source_uses_fallback() {
    let workspace = TempWorkspace::new();
    workspace.create_file(
        "misc.json",
        r#"[{ "text": "orphan" }, { "ref": "Jasher 3:3" }, { "book": "Enoch", "verse": 4 }]"#,
    );
    let config = Config {
        data_dir: workspace.path().to_path_buf(),
        fallback_book: "Unsorted".to_string(),
        sources: vec![SourceConfig::new("misc.json", None)],
        ..Config::default()
    };

    let corpus = load_corpus(&config).await;
    check!(corpus.verses()[0] == Verse::new("Unsorted", 0, 0, "orphan"));
    check!(corpus.verses()[1] == Verse::new("Jasher", 3, 3, ""));
    check!(corpus.verses()[2] == Verse::new("Enoch", 0, 4, ""));
}

/// Test: The background load publishes the corpus once it finishes.
#[rstest]
#[tokio::test]
async fn background_load_publishes_corpus(library: Library) {
    let state = Arc::new(CorpusState::new(library.config.clone()));
    check!(state.corpus().is_none());

    spawn_load(state.clone()).await.unwrap();

    check!(state.is_loaded());
    check!(state.corpus().map(|c| c.len()) == Some(11));
}
