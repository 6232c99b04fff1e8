use super::*;
use tingxie_shared::Timestamp;

fn word(id: i64, spelling: &str, definition: &str, example: Option<&str>, level: u8) -> Word {
    Word {
        word_id: id,
        word: spelling.to_string(),
        definition: definition.to_string(),
        example: example.map(str::to_string),
        audio_url: None,
        srs_level: level,
        next_review: None,
    }
}

fn sample() -> Vec<Word> {
    vec![
        word(1, "cat", "a feline", Some("The cat sat."), 2),
        word(2, "Apple", "a fruit", None, 0),
        word(3, "banana", "a fruit", Some("Bananas are yellow."), 5),
        word(4, "dog", "a canine", None, 2),
    ]
}

#[test]
fn empty_query_matches_everything() {
    let state = WordTableState::default();
    let page = state.apply(&sample());
    assert_eq!(page.total_matches, 4);
}

#[test]
fn search_result_is_a_case_insensitive_subset() {
    let words = sample();
    let mut state = WordTableState::default();
    state.set_query("FRUIT".to_string());

    let page = state.apply(&words);
    assert_eq!(page.total_matches, 2);
    // 结果集必须是输入的子集，且每行都命中搜索词
    for row in &page.rows {
        assert!(words.iter().any(|w| w.word_id == row.word_id));
        assert!(WordTableState::matches(row, "FRUIT"));
    }
}

#[test]
fn search_covers_word_definition_and_example() {
    let words = sample();
    assert!(WordTableState::matches(&words[0], "CAT SAT")); // 例句
    assert!(WordTableState::matches(&words[1], "apple")); // 单词（忽略大小写）
    assert!(WordTableState::matches(&words[3], "canine")); // 释义
    assert!(!WordTableState::matches(&words[3], "feline"));
}

#[test]
fn sorting_same_column_twice_reverses_the_order() {
    let words = sample();
    let mut state = WordTableState::default();
    state.toggle_sort(SortKey::SrsLevel);
    // 换列后恢复升序
    assert!(state.ascending);

    let ascending: Vec<i64> = state.apply(&words).rows.iter().map(|w| w.word_id).collect();

    state.toggle_sort(SortKey::SrsLevel);
    assert!(!state.ascending);
    let descending: Vec<i64> = state.apply(&words).rows.iter().map(|w| w.word_id).collect();

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn word_sort_ignores_case() {
    let words = sample();
    let state = WordTableState::default(); // 默认按单词升序
    let page = state.apply(&words);
    let order: Vec<&str> = page.rows.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(order, vec!["Apple", "banana", "cat", "dog"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let words = sample();
    let mut state = WordTableState::default();
    state.toggle_sort(SortKey::SrsLevel);

    let ids: Vec<i64> = state.apply(&words).rows.iter().map(|w| w.word_id).collect();
    // 等级相同的 cat(1) 与 dog(4) 保持输入顺序
    assert_eq!(ids, vec![2, 1, 4, 3]);
}

#[test]
fn next_review_sort_puts_unreviewed_words_last() {
    let mut words = sample();
    words[0].next_review = Some(Timestamp::new(2_000));
    words[2].next_review = Some(Timestamp::new(1_000));

    let mut state = WordTableState::default();
    state.toggle_sort(SortKey::NextReview);

    let ids: Vec<i64> = state.apply(&words).rows.iter().map(|w| w.word_id).collect();
    assert_eq!(&ids[..2], &[3, 1]);
    // 没有复习日期的词（2 和 4）排在最后，且保持稳定顺序
    assert_eq!(&ids[2..], &[2, 4]);
}

#[test]
fn pages_hold_at_most_page_size_rows() {
    let words: Vec<Word> = (0..25)
        .map(|i| word(i, &format!("w{i:02}"), "d", None, 0))
        .collect();
    let mut state = WordTableState::default();

    let first = state.apply(&words);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.rows.len(), PAGE_SIZE);

    state.set_page(2);
    let last = state.apply(&words);
    assert_eq!(last.rows.len(), 5);
    assert_eq!(last.page, 2);
}

#[test]
fn out_of_range_page_clamps_to_last_page() {
    let words: Vec<Word> = (0..12)
        .map(|i| word(i, &format!("w{i:02}"), "d", None, 0))
        .collect();
    let mut state = WordTableState::default();
    state.set_page(99);

    let page = state.apply(&words);
    assert_eq!(page.page, 1);
    assert_eq!(page.rows.len(), 2);
}

#[test]
fn empty_match_set_yields_empty_single_page() {
    let mut state = WordTableState::default();
    state.set_query("zzz".to_string());
    let page = state.apply(&sample());
    assert_eq!(page.total_matches, 0);
    assert_eq!(page.page_count, 0);
    assert_eq!(page.page, 0);
    assert!(page.rows.is_empty());
}

#[test]
fn query_and_sort_changes_reset_the_page() {
    let mut state = WordTableState {
        page: 5,
        ..WordTableState::default()
    };
    state.set_query("a".to_string());
    assert_eq!(state.page, 0);

    state.set_page(3);
    state.toggle_sort(SortKey::Definition);
    assert_eq!(state.page, 0);
}
