//! Shared fixtures for service integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use lexidrill_core::types::{TestContent, VocabItem};
use lexidrill_service::models::StoredTest;
use lexidrill_service::repo::MemoryRepository;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 13, 19, 0, 0).unwrap()
}

pub fn vocab(id: i64, user_id: i64, word: &str, translation: &str) -> VocabItem {
    VocabItem::new(id, user_id, word, translation, now())
}

/// Three due items for user 1, in insertion order.
pub fn seed_vocabulary(repo: &MemoryRepository) {
    repo.insert_item(vocab(1, 1, "Haus", "будинок"));
    repo.insert_item(vocab(2, 1, "Baum", "дерево"));
    repo.insert_item(vocab(3, 1, "Apfel", "яблуко"));
}

pub fn field_test(id: i64) -> StoredTest {
    StoredTest {
        id,
        name: "Geography basics".to_string(),
        book_id: 1,
        created_by: 1,
        content: TestContent::plain(
            "The capital of France is [Paris].\n#[Paris, London, Berlin] Berlin# is in Germany.",
        ),
    }
}

pub fn timed_field_test(id: i64, minutes: u32) -> StoredTest {
    let mut test = field_test(id);
    test.content.time_limit_minutes = Some(minutes);
    test
}

pub fn sentence_shuffle_test(id: i64) -> StoredTest {
    StoredTest {
        id,
        name: "Order the story".to_string(),
        book_id: 1,
        created_by: 1,
        content: TestContent {
            content: "The sun rose. Birds sang. The town woke up.".to_string(),
            shuffle_sentences: true,
            shuffle_paragraphs: false,
            time_limit_minutes: None,
        },
    }
}
