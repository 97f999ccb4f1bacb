//! Integration tests for farecast-router
//!
//! Tests are organized by feature area and cover:
//! - Pattern parsing and registration errors
//! - Static and converter-gated matching
//! - Route priority
//! - Path normalization during matching
//! - Named routes and reverse URL generation

use farecast_router::*;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn app_router() -> Router {
    Router::new()
        .with_route(Route::parse("/").unwrap().with_name("home"))
        .with_route(Route::parse("/homePost/").unwrap().with_name("home-post"))
        .with_route(
            Route::parse("/results/{ticket:int}/{gender:int}/{age:int}/{fare:float}")
                .unwrap()
                .with_name("results"),
        )
}

#[test]
fn test_route_parse_static() {
    let route = Route::parse("/homePost").unwrap();
    assert_eq!(route.pattern, "/homePost");
    assert_eq!(route.params.len(), 0);
    assert_eq!(route.priority, 0);
}

#[test]
fn test_route_parse_root() {
    let route = Route::parse("/").unwrap();
    assert_eq!(route.pattern, "/");
    assert!(route.matches("/").is_some());
}

#[test]
fn test_route_parse_dynamic() {
    let route = Route::parse("/results/{ticket:int}/{fare:float}").unwrap();
    assert_eq!(route.params, vec!["ticket", "fare"]);
    assert!(route.priority > 0);
}

#[test]
fn test_route_parse_rejects_unknown_converter() {
    let err = Route::parse("/users/{id:uuid}").unwrap_err();
    assert!(matches!(err, PatternError::UnknownConverter { .. }));
}

#[test]
fn test_route_matches_static() {
    let route = Route::parse("/homePost").unwrap();
    assert!(route.matches("/homePost").is_some());
    assert!(route.matches("/homePost/").is_some());
    assert!(route.matches("/other").is_none());
}

#[test]
fn test_route_priority_static_first() {
    let static_route = Route::parse("/results/summary").unwrap();
    let dynamic_route = Route::parse("/results/{ticket:int}").unwrap();
    assert!(static_route.priority < dynamic_route.priority);
}

#[test]
fn test_results_path_resolves_with_typed_params() {
    let router = app_router();

    let m = router.match_route("/results/5/1/30/12.00").unwrap();
    assert_eq!(m.route.name.as_deref(), Some("results"));
    assert_eq!(m.params.get("ticket").unwrap().as_int(), Some(5));
    assert_eq!(m.params.get("gender").unwrap().as_int(), Some(1));
    assert_eq!(m.params.get("age").unwrap().as_int(), Some(30));
    assert_eq!(m.params.get("fare").unwrap().as_float(), Some(12.0));
}

#[test]
fn test_non_numeric_fare_does_not_dispatch() {
    let router = app_router();
    assert!(router.match_route("/results/5/1/30/abc").is_none());
}

#[test]
fn test_non_numeric_ticket_does_not_dispatch() {
    let router = app_router();
    assert!(router.match_route("/results/five/1/30/12.00").is_none());
}

#[test]
fn test_partial_results_path_does_not_match() {
    let router = app_router();
    assert!(router.match_route("/results/5/1/30").is_none());
    assert!(router.match_route("/results/5/1/30/12.00/extra").is_none());
}

#[test]
fn test_fare_accepts_all_float_shapes() {
    let router = app_router();

    for fare in ["12", "12.", ".5", "-0.5", "+3.25", "3.14159"] {
        let path = format!("/results/5/1/30/{}", fare);
        assert!(router.match_route(&path).is_some(), "should match {}", path);
    }
}

#[test]
fn test_trailing_slash_is_normalized() {
    let router = app_router();

    let m = router.match_route("/homePost/").unwrap();
    assert_eq!(m.route.name.as_deref(), Some("home-post"));

    let m = router.match_route("/homePost").unwrap();
    assert_eq!(m.route.name.as_deref(), Some("home-post"));
}

#[test]
fn test_unknown_path_yields_no_match() {
    let router = app_router();
    assert!(router.match_route("/nowhere").is_none());
}

#[test]
fn test_url_for_results_renders_fare_with_two_decimals() {
    let router = app_router();

    let url = router
        .url_for_params(
            "results",
            [
                ("ticket", SegmentValue::Int(5)),
                ("gender", SegmentValue::Int(1)),
                ("age", SegmentValue::Int(30)),
                ("fare", SegmentValue::Float(12.0)),
            ],
        )
        .unwrap();
    assert_eq!(url, "/results/5/1/30/12.00");
}

#[test]
fn test_url_for_truncates_fare_precision() {
    let router = app_router();

    let url = router
        .url_for_params(
            "results",
            [
                ("ticket", SegmentValue::Int(5)),
                ("gender", SegmentValue::Int(1)),
                ("age", SegmentValue::Int(30)),
                ("fare", SegmentValue::Float(3.14159)),
            ],
        )
        .unwrap();
    assert_eq!(url, "/results/5/1/30/3.14");
}

#[test]
fn test_url_for_negative_fare() {
    let router = app_router();

    let url = router
        .url_for_params(
            "results",
            [
                ("ticket", SegmentValue::Int(9)),
                ("gender", SegmentValue::Int(0)),
                ("age", SegmentValue::Int(62)),
                ("fare", SegmentValue::Float(-0.5)),
            ],
        )
        .unwrap();
    assert_eq!(url, "/results/9/0/62/-0.50");
}

#[test]
fn test_url_for_missing_param_is_none() {
    let router = app_router();

    let url = router.url_for_params("results", [("ticket", SegmentValue::Int(5))]);
    assert_eq!(url, None);
}

#[test]
fn test_url_for_unknown_name_is_none() {
    let router = app_router();
    assert_eq!(router.url_for("nowhere", &HashMap::new()), None);
}

#[test]
fn test_url_for_static_routes() {
    let router = app_router();
    assert_eq!(router.url_for("home", &HashMap::new()), Some("/".to_string()));
    assert_eq!(
        router.url_for("home-post", &HashMap::new()),
        Some("/homePost".to_string())
    );
}

#[test]
fn test_generated_url_resolves_back_to_same_params() {
    let router = app_router();

    let url = router
        .url_for_params(
            "results",
            [
                ("ticket", SegmentValue::Int(5)),
                ("gender", SegmentValue::Int(1)),
                ("age", SegmentValue::Int(30)),
                ("fare", SegmentValue::Float(12.0)),
            ],
        )
        .unwrap();

    let m = router.match_route(&url).unwrap();
    assert_eq!(m.params.get("fare").unwrap().as_float(), Some(12.0));
}
