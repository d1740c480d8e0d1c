//! Response interpretation against recorded API payloads.

use chrono::NaiveDate;
use reqwest::StatusCode;
use starmate_client::{
    ClientError, ProfilePayload, interpret_login, interpret_message, interpret_profile,
};
use starmate_model::{Gender, ProfileRecord, Zodiac};

#[test]
fn login_created_with_token() {
    let body = r#"{"message":"User has been logged in successfully","access_token":"eyJhbGciOi.x.y"}"#;
    let outcome = interpret_login(StatusCode::CREATED, body).unwrap();
    assert_eq!(outcome.token, "eyJhbGciOi.x.y");
    assert_eq!(outcome.message, "User has been logged in successfully");
    assert!(outcome.user.is_none());
}

#[test]
fn login_without_token_is_rejected_with_api_message() {
    let body = r#"{"message":"User not found"}"#;
    let err = interpret_login(StatusCode::CREATED, body).unwrap_err();
    assert!(matches!(err, ClientError::Rejected { status: 201, .. }));
    assert_eq!(err.user_message(), "User not found");
}

#[test]
fn login_failure_status_uses_fallback() {
    let err = interpret_login(StatusCode::UNAUTHORIZED, "").unwrap_err();
    assert_eq!(err.user_message(), "Login failed");
    assert!(!err.is_retryable());
}

#[test]
fn profile_is_read_from_data() {
    let body = r#"{
        "message": "Profile has been found successfully",
        "data": {
            "email": "ayu@example.com",
            "username": "ayu",
            "name": "Ayu",
            "birthday": "15 06 2000",
            "horoscope": "Error",
            "zodiac": "Gemini",
            "height": 160,
            "weight": 50,
            "interests": ["music", "art"]
        }
    }"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    assert_eq!(profile.name.as_deref(), Some("Ayu"));
    assert_eq!(profile.horoscope(), None);
    assert_eq!(profile.zodiac(), Some(Zodiac::Gemini));
    let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    assert_eq!(profile.age_on(today), Some(23));

    let input = profile.to_input();
    assert_eq!(input.height, "160");
    assert_eq!(input.gender, "");
}

#[test]
fn profile_with_null_interests_reads_as_empty() {
    let body = r#"{"data":{"email":"a@b.co","interests":null,"height":null}}"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    assert_eq!(profile.email.as_deref(), Some("a@b.co"));
    assert!(profile.interests.is_empty());
    assert_eq!(profile.height, None);
}

#[test]
fn profile_measurements_in_other_shapes() {
    let body = r#"{"data":{"height":"172","weight":64.6,"interests":["chess"]}}"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    assert_eq!(profile.height, Some(172));
    assert_eq!(profile.weight, Some(65));
    assert_eq!(profile.to_input().weight, "65");

    let body = r#"{"data":{"height":"tall","weight":-3,"zodiac":"Ophiuchus"}}"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    assert_eq!(profile.height, None);
    assert_eq!(profile.weight, None);
    assert_eq!(profile.zodiac(), None);

    let body = r#"{"data":{"height":true,"weight":{"kg":60}}}"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    assert_eq!(profile.height, None);
    assert_eq!(profile.weight, None);
}

#[test]
fn stored_tags_with_commas_prefill_as_list() {
    let body = r#"{"data":{"name":"Ayu","interests":["rock, roll","jazz"]}}"#;
    let profile = interpret_profile(StatusCode::OK, body).unwrap();
    let input = profile.to_input();
    assert_eq!(input.interests.raw_tags(), vec!["rock, roll", "jazz"]);
}

#[test]
fn empty_profile_data_is_a_failure() {
    let err = interpret_profile(StatusCode::OK, r#"{"message":"ok"}"#).unwrap_err();
    assert!(matches!(err, ClientError::Rejected { .. }));
}

#[test]
fn validation_messages_are_joined() {
    let body = r#"{"statusCode":400,"message":["email must be an email"],"error":"Bad Request"}"#;
    let err = interpret_message(StatusCode::BAD_REQUEST, body, "ok", "Registration failed.")
        .unwrap_err();
    assert_eq!(err.user_message(), "email must be an email");
}

#[test]
fn record_payload_uses_form_birthday() {
    let record = ProfileRecord {
        name: "Ayu".to_string(),
        birthday: NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(),
        height: 160,
        weight: 50,
        interests: vec!["music".to_string()],
        gender: Gender::Female,
        zodiac: Zodiac::Gemini,
        horoscope: "Gemini horoscope".to_string(),
        age: 23,
    };
    let json = serde_json::to_value(ProfilePayload::from(&record)).unwrap();
    assert_eq!(json["birthday"], "15 06 2000");
    assert_eq!(json["gender"], "female");
    assert_eq!(json["zodiac"], "Gemini");
    assert_eq!(json["height"], 160);
    assert!(json.get("age").is_none());
}
