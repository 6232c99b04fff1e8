use super::*;

/// Match + Extra 拼接应还原用户拼写；Match + Missing 拼接应还原正确拼写
fn assert_reconstructs(attempt: &str, correct: &str) {
    let segments = diff_spelling(attempt, correct);

    let rebuilt_attempt: String = segments
        .iter()
        .filter(|s| s.kind != SegmentKind::Missing)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(rebuilt_attempt, attempt);

    let rebuilt_correct: String = segments
        .iter()
        .filter(|s| s.kind != SegmentKind::Extra)
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(rebuilt_correct, correct);
}

#[test]
fn identical_input_yields_plain_word() {
    let segments = diff_spelling("the", "the");
    assert_eq!(
        segments,
        vec![DiffSegment {
            text: "the".to_string(),
            kind: SegmentKind::Match,
        }]
    );
}

#[test]
fn empty_pair_yields_no_segments() {
    assert!(diff_spelling("", "").is_empty());
}

#[test]
fn transposition_marks_a_mismatch() {
    let segments = diff_spelling("teh", "the");
    let mismatches = segments
        .iter()
        .filter(|s| s.kind != SegmentKind::Match)
        .count();
    assert!(mismatches >= 1);
    assert_reconstructs("teh", "the");
}

#[test]
fn missing_letters_are_marked_missing() {
    let segments = diff_spelling("ct", "cat");
    assert!(
        segments
            .iter()
            .any(|s| s.kind == SegmentKind::Missing && s.text == "a")
    );
    assert!(segments.iter().all(|s| s.kind != SegmentKind::Extra));
    assert_reconstructs("ct", "cat");
}

#[test]
fn extra_letters_are_marked_extra() {
    let segments = diff_spelling("caat", "cat");
    assert!(
        segments
            .iter()
            .any(|s| s.kind == SegmentKind::Extra && s.text == "a")
    );
    assert!(segments.iter().all(|s| s.kind != SegmentKind::Missing));
    assert_reconstructs("caat", "cat");
}

#[test]
fn empty_attempt_is_all_missing() {
    let segments = diff_spelling("", "cat");
    assert_eq!(
        segments,
        vec![DiffSegment {
            text: "cat".to_string(),
            kind: SegmentKind::Missing,
        }]
    );
}

#[test]
fn empty_correct_is_all_extra() {
    let segments = diff_spelling("cat", "");
    assert_eq!(
        segments,
        vec![DiffSegment {
            text: "cat".to_string(),
            kind: SegmentKind::Extra,
        }]
    );
}

#[test]
fn consecutive_same_kind_chars_merge_into_one_segment() {
    // "abXYcd" vs "abcd": XY 应合并为一个 Extra 片段
    let segments = diff_spelling("abXYcd", "abcd");
    assert_eq!(
        segments,
        vec![
            DiffSegment {
                text: "ab".to_string(),
                kind: SegmentKind::Match,
            },
            DiffSegment {
                text: "XY".to_string(),
                kind: SegmentKind::Extra,
            },
            DiffSegment {
                text: "cd".to_string(),
                kind: SegmentKind::Match,
            },
        ]
    );
}

#[test]
fn reconstruction_holds_for_assorted_pairs() {
    let pairs = [
        ("recieve", "receive"),
        ("definately", "definitely"),
        ("acommodate", "accommodate"),
        ("x", "y"),
        ("spelling", "spell"),
    ];
    for (attempt, correct) in pairs {
        assert_reconstructs(attempt, correct);
    }
}
