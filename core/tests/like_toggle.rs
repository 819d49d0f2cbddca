use artfolio_core::{
    classify, like_endpoint, LikeError, LikePhase, LikeState, LikeToggle, Settlement,
};

#[test]
fn endpoint_path() {
    assert_eq!(like_endpoint("", "abc123"), "/api/artwork/abc123/like");
    assert_eq!(
        like_endpoint("https://art.example/", "abc123"),
        "https://art.example/api/artwork/abc123/like"
    );
}

#[test]
fn success_response_is_authoritative() {
    let state = classify(200, r#"{"success":true,"liked":true,"likes_count":5}"#).unwrap();
    assert_eq!(
        state,
        LikeState {
            liked: true,
            likes_count: 5
        }
    );
}

#[test]
fn application_failure_uses_message_or_fallback() {
    let err = classify(200, r#"{"success":false,"error":"Artwork not found"}"#).unwrap_err();
    assert_eq!(err, LikeError::Rejected("Artwork not found".to_string()));
    assert_eq!(err.to_string(), "Error: Artwork not found");

    let err = classify(200, r#"{"success":false}"#).unwrap_err();
    assert_eq!(err.to_string(), "Error: Failed to like.");
}

#[test]
fn unauthorized_is_distinct_from_other_failures() {
    let err = classify(401, r#"{"success":false,"error":"Login required"}"#).unwrap_err();
    assert_eq!(err, LikeError::Unauthorized);
    assert_eq!(err.to_string(), "Please log in to like artworks.");

    let err = classify(500, "Internal Server Error").unwrap_err();
    assert_eq!(err, LikeError::Transport("Internal Server Error".to_string()));
    assert_eq!(err.to_string(), "Error: Internal Server Error");
}

#[test]
fn malformed_success_bodies_are_rejected() {
    assert!(matches!(classify(200, "<html>"), Err(LikeError::Malformed(_))));
    assert!(matches!(
        classify(200, r#"{"success":true,"liked":true}"#),
        Err(LikeError::Malformed(_))
    ));
    assert!(matches!(
        classify(200, r#"{"success":true,"liked":false,"likes_count":-1}"#),
        Err(LikeError::Malformed(_))
    ));
}

#[test]
fn toggle_applies_latest_answer_only() {
    let mut toggle = LikeToggle::new(LikeState::from_rendered(false, "4"));
    assert_eq!(toggle.phase(), LikePhase::Idle);

    let first = toggle.begin();
    let second = toggle.begin();
    assert_eq!(toggle.phase(), LikePhase::Requesting);

    let newest = LikeState {
        liked: false,
        likes_count: 4,
    };
    assert_eq!(toggle.settle(second, Ok(newest)), Settlement::Apply(newest));
    let late = LikeState {
        liked: true,
        likes_count: 5,
    };
    assert_eq!(toggle.settle(first, Ok(late)), Settlement::Stale);
    assert_eq!(toggle.state(), newest);
    assert_eq!(toggle.phase(), LikePhase::Settled);
}

#[test]
fn failure_keeps_confirmed_state() {
    let initial = LikeState::from_rendered(true, " 12 ");
    assert_eq!(initial.likes_count, 12);
    let mut toggle = LikeToggle::new(initial);
    let ticket = toggle.begin();
    let settlement = toggle.settle(ticket, Err(LikeError::Unauthorized));
    assert_eq!(settlement, Settlement::Notify(LikeError::Unauthorized));
    assert_eq!(toggle.phase(), LikePhase::Failed);
    assert_eq!(toggle.state(), initial);
}

#[test]
fn rendered_count_falls_back_to_zero() {
    assert_eq!(LikeState::from_rendered(false, "n/a").likes_count, 0);
}
