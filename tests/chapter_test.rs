mod common;

use assert2::check;
use common::{Library, library};
use rstest::rstest;
use verse_search::{
    ChapterRequest, chapter_view,
    loader::load_corpus,
    tools::{CHAPTER_NOT_FOUND_MESSAGE, ReadChapterRequest, handle_read_chapter},
};

/// Test: Verses come back sorted, cleaned, highlighted and with one emphasized.
#[rstest]
#[tokio::test]
async fn chapter_is_sorted_cleaned_and_highlighted(library: Library) {
    let corpus = load_corpus(&library.config).await;
    let request = ChapterRequest {
        verse: Some(2),
        query: Some("parable".to_string()),
        ..ChapterRequest::new("Enoch", 1)
    };
    let entries = chapter_view(&corpus, &request);

    let verses: Vec<u32> = entries.iter().map(|e| e.verse).collect();
    check!(verses == vec![1, 2, 3]);

    check!(
        entries[0].html
            == "The words of the blessing of Enoch, wherewith he blessed the elect righteous"
    );
    check!(
        entries[1].html
            == "And he took up his <mark>parable</mark> and said. Enoch a righteous man"
    );
    check!(
        entries[2].html
            == "Concerning the elect I said. And took up my <mark>parable</mark> concerning them"
    );
    check!(entries.iter().filter(|e| e.emphasized).count() == 1);
    check!(entries[1].emphasized);
}

/// Test: The query only highlights; it never filters the chapter.
#[rstest]
#[tokio::test]
async fn query_does_not_filter(library: Library) {
    let corpus = load_corpus(&library.config).await;
    let request = ChapterRequest {
        query: Some("nowhere".to_string()),
        ..ChapterRequest::new("Jubilees", 4)
    };
    let entries = chapter_view(&corpus, &request);

    check!(entries.len() == 2);
    check!(entries.iter().all(|e| !e.html.contains("<mark>")));
}

/// Test: A record without a book is found under its source's book.
#[rstest]
#[tokio::test]
async fn default_book_records_are_addressable(library: Library) {
    let state = library.loaded_state().await;
    let request = ReadChapterRequest {
        book: "Jasher".to_string(),
        chapter: 2,
        verse: None,
        query: None,
    };
    let output = handle_read_chapter(&state, request);

    check!(output.starts_with("Jasher 2\n\n"));
    check!(output.contains("**Jasher 2:1** And it was in the hundred and thirtieth year"));
}

/// Test: Unknown chapters report "Chapter not found."
#[rstest]
#[case("Enoch", 99)]
#[case("Tobit", 1)]
#[tokio::test]
async fn unknown_chapter_is_reported(library: Library, #[case] book: &str, #[case] chapter: u32) {
    let state = library.loaded_state().await;
    let request = ReadChapterRequest {
        book: book.to_string(),
        chapter,
        verse: None,
        query: None,
    };
    check!(handle_read_chapter(&state, request) == CHAPTER_NOT_FOUND_MESSAGE);
}
