use super::*;
use crate::{ErrorBody, Timestamp, User};

#[test]
fn auth_endpoints_are_form_encoded() {
    assert_eq!(LoginRequest::ENCODING, Encoding::Form);
    assert_eq!(RegisterRequest::ENCODING, Encoding::Form);
    // 其余端点保持默认 JSON 编码
    assert_eq!(CreateWordListRequest::ENCODING, Encoding::Json);
    assert_eq!(SubmitPracticeRequest::ENCODING, Encoding::Json);
}

#[test]
fn form_urlencode_escapes_reserved_characters() {
    let req = LoginRequest {
        email: "a+b@test.cn".to_string(),
        password: "p&s=1 2".to_string(),
    };
    let body = form_urlencode(&req).unwrap();
    assert_eq!(body, "email=a%2Bb%40test.cn&password=p%26s%3D1%202");
}

#[test]
fn form_urlencode_rejects_nested_values() {
    #[derive(serde::Serialize)]
    struct Nested {
        inner: Vec<u32>,
    }
    assert!(form_urlencode(&Nested { inner: vec![1] }).is_err());
}

#[test]
fn paths_interpolate_resource_ids() {
    assert_eq!(
        GetWordListRequest { id: 42 }.path(),
        "/api/v1/word-lists/42"
    );
    assert_eq!(
        ListWordsRequest { list_id: 7 }.path(),
        "/api/v1/word-lists/7/words"
    );
    assert_eq!(
        SimilarWordsRequest { word_id: 3 }.path(),
        "/api/v1/word-lists/words/3/similar"
    );
    assert_eq!(
        SubmitReviewRequest {
            word_id: 9,
            correct: true
        }
        .path(),
        "/api/v1/srs/review/9/submit"
    );
    assert_eq!(
        GenerateListAudioRequest { list_id: 5 }.path(),
        "/api/v1/tts/word-list/5/generate"
    );
}

#[test]
fn path_only_ids_are_not_serialized_into_the_body() {
    let req = UpdateWordListRequest {
        id: 11,
        name: "CET-4".to_string(),
        description: None,
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "CET-4" }));

    let req = SubmitReviewRequest {
        word_id: 11,
        correct: false,
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, serde_json::json!({ "correct": false }));
}

#[test]
fn auth_session_deserializes_token_and_user_together() {
    let raw = r#"{
        "access_token": "tok",
        "token_type": "bearer",
        "user": { "id": 1, "email": "u@test.cn", "is_active": true }
    }"#;
    let session: AuthSession = serde_json::from_str(raw).unwrap();
    assert_eq!(session.access_token, "tok");
    assert_eq!(
        session.user,
        User {
            id: 1,
            email: "u@test.cn".to_string(),
            is_active: true
        }
    );
}

#[test]
fn word_tolerates_missing_optional_fields() {
    let raw = r#"{
        "word_id": 2,
        "word": "cat",
        "definition": "a feline",
        "srs_level": 0
    }"#;
    let word: Word = serde_json::from_str(raw).unwrap();
    assert_eq!(word.audio_url, None);
    assert_eq!(word.next_review, None);
    assert!(word.is_due(Timestamp::new(0)));
}

#[test]
fn word_due_check_compares_next_review() {
    let raw = r#"{
        "word_id": 2,
        "word": "cat",
        "definition": "a feline",
        "srs_level": 3,
        "next_review": 5000
    }"#;
    let word: Word = serde_json::from_str(raw).unwrap();
    assert_eq!(word.next_review, Some(Timestamp::new(5000)));
    assert!(!word.is_due(Timestamp::new(4999)));
    assert!(word.is_due(Timestamp::new(5000)));
}

#[test]
fn srs_stats_missing_levels_count_as_zero() {
    let raw = r#"{ "level_counts": { "0": 4, "5": 1 }, "total_words": 5, "total_due": 2 }"#;
    let stats: SrsStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.count_at(0), 4);
    assert_eq!(stats.count_at(3), 0);
    assert_eq!(stats.count_at(5), 1);
}

#[test]
fn error_body_prefers_detail_over_message() {
    let both = ErrorBody {
        detail: Some("detail".to_string()),
        message: Some("message".to_string()),
    };
    assert_eq!(both.into_message().as_deref(), Some("detail"));

    let message_only: ErrorBody = serde_json::from_str(r#"{ "message": "m" }"#).unwrap();
    assert_eq!(message_only.into_message().as_deref(), Some("m"));

    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.into_message(), None);
}
