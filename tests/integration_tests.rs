use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use word_count::{FileWordCounter, QueryRunner, QueryStatus, WordCountError, WordCounter};

fn word_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

#[tokio::test]
async fn test_end_to_end_sample_queries() {
    let file = word_list(&["AAA", "word", "swim", "AAA", "Word", "magic", "AAA"]);
    let runner = QueryRunner::new(FileWordCounter::new(file.path()));

    let words: Vec<String> = ["AAA", "word", "storm"].iter().map(|w| w.to_string()).collect();
    let reports = runner.run(&words, None).await;

    let lines: Vec<String> = reports.iter().map(|r| r.console_line()).collect();
    assert_eq!(
        lines,
        vec![
            "word - \"AAA\" - count - 3",
            "word - \"word\" - count - 1",
            "word - \"storm\" - count - 0",
        ]
    );
    assert!(reports.iter().all(|r| r.status == QueryStatus::Complete));
    assert!(reports.iter().all(|r| r.lines_scanned == 7));
}

#[tokio::test]
async fn test_empty_word_list() {
    let file = NamedTempFile::new().unwrap();
    let counter = FileWordCounter::new(file.path());

    for word in ["a", "AAA", ""] {
        let outcome = counter.count_word(word, None).await.unwrap();
        assert_eq!(outcome.count, 0);
        assert_eq!(outcome.lines_scanned, 0);
    }
}

#[tokio::test]
async fn test_missing_word_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("words.txt");
    let counter = FileWordCounter::new(&path);

    // explicit API reports the failure
    let err = counter.count_word("AAA", None).await.unwrap_err();
    assert!(matches!(err, WordCountError::WordListNotFound { .. }));

    // fallback API degrades to zero
    assert_eq!(counter.count_word_or_zero("AAA", None).await, 0);

    // the runner keeps going and marks the query as failed
    let runner = QueryRunner::new(counter);
    let reports = runner.run(&["AAA".to_string()], None).await;
    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_failed());
    assert_eq!(reports[0].console_line(), "word - \"AAA\" - count - 0");
}

#[tokio::test]
async fn test_directory_instead_of_file() {
    let temp_dir = TempDir::new().unwrap();
    let counter = FileWordCounter::new(temp_dir.path());

    assert!(counter.count_word("AAA", None).await.is_err());
    assert_eq!(counter.count_word_or_zero("AAA", None).await, 0);
}

#[tokio::test]
async fn test_crlf_word_list() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"swim\r\nmagic\r\nswim\r\n").unwrap();
    let counter = FileWordCounter::new(file.path());

    let outcome = counter.count_word("swim", None).await.unwrap();
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let file = word_list(&["tempo", "storm", "tempo"]);
    let counter = FileWordCounter::new(file.path());

    let first = tokio_test::block_on(counter.count_word("tempo", None)).unwrap();
    for _ in 0..3 {
        let again = tokio_test::block_on(counter.count_word("tempo", None)).unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(first.count, 2);
}

#[tokio::test]
async fn test_large_word_list_streams() {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..50_000 {
        let word = if i % 10 == 0 { "needle" } else { "hay" };
        writeln!(file, "{}", word).unwrap();
    }
    file.flush().unwrap();

    let counter = FileWordCounter::new(file.path());
    let outcome = counter.count_word("needle", None).await.unwrap();
    assert_eq!(outcome.count, 5_000);
    assert_eq!(outcome.lines_scanned, 50_000);
}
