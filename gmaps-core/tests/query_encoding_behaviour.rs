//! Behavioural tests for route request query encoding.

use gmaps_core::RouteRequest;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use url::form_urlencoded;

#[fixture]
fn request() -> RefCell<RouteRequest> {
    RefCell::new(RouteRequest::default())
}

#[fixture]
fn query() -> RefCell<String> {
    RefCell::new(String::new())
}

fn decoded(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

// --- Given steps ---

#[given("a route from {origin} to {destination}")]
fn given_route(
    #[from(request)] request: &RefCell<RouteRequest>,
    origin: String,
    destination: String,
) {
    *request.borrow_mut() = RouteRequest::new(
        origin.trim_matches('"').to_owned(),
        destination.trim_matches('"').to_owned(),
    );
}

#[given("an arrival time of {seconds}")]
fn given_arrival_time(#[from(request)] request: &RefCell<RouteRequest>, seconds: i64) {
    let current = request.borrow().clone();
    *request.borrow_mut() = current.with_arrival_time(seconds);
}

#[given("waypoints {first} and {second}")]
fn given_waypoints(
    #[from(request)] request: &RefCell<RouteRequest>,
    first: String,
    second: String,
) {
    let current = request.borrow().clone();
    *request.borrow_mut() = current
        .with_waypoint(first.trim_matches('"').to_owned())
        .with_waypoint(second.trim_matches('"').to_owned());
}

// --- When steps ---

#[when("I encode the distance matrix parameters")]
fn encode_matrix(
    #[from(request)] request: &RefCell<RouteRequest>,
    #[from(query)] query: &RefCell<String>,
) {
    *query.borrow_mut() = request.borrow().distance_matrix_params().encode();
}

#[when("I encode the directions parameters")]
fn encode_directions(
    #[from(request)] request: &RefCell<RouteRequest>,
    #[from(query)] query: &RefCell<String>,
) {
    *query.borrow_mut() = request.borrow().directions_params().encode();
}

// --- Then steps ---

#[then("the query omits {name}")]
fn then_omits(#[from(query)] query: &RefCell<String>, name: String) {
    let name = name.trim_matches('"');
    let borrowed = query.borrow();
    assert!(
        decoded(&borrowed, name).is_none(),
        "expected {name} to be dropped from {borrowed}"
    );
}

#[then("the query contains {fragment}")]
fn then_contains(#[from(query)] query: &RefCell<String>, fragment: String) {
    let fragment = fragment.trim_matches('"');
    let borrowed = query.borrow();
    assert!(
        borrowed.contains(fragment),
        "expected {fragment} in {borrowed}"
    );
}

#[then("the query is ASCII")]
fn then_ascii(#[from(query)] query: &RefCell<String>) {
    let borrowed = query.borrow();
    assert!(borrowed.is_ascii(), "expected percent-encoding, got {borrowed}");
}

#[then("decoding the query yields origin {expected}")]
fn then_origin(#[from(query)] query: &RefCell<String>, expected: String) {
    let borrowed = query.borrow();
    assert_eq!(
        decoded(&borrowed, "origins").as_deref(),
        Some(expected.trim_matches('"'))
    );
}

#[then("decoding the query yields waypoints {expected}")]
fn then_waypoints(#[from(query)] query: &RefCell<String>, expected: String) {
    let borrowed = query.borrow();
    assert_eq!(
        decoded(&borrowed, "waypoints").as_deref(),
        Some(expected.trim_matches('"'))
    );
}

// --- Scenario registrations ---

#[scenario(path = "tests/features/query_encoding.feature", index = 0)]
fn dropping_falsy_parameters(request: RefCell<RouteRequest>, query: RefCell<String>) {
    let _ = (request, query);
}

#[scenario(path = "tests/features/query_encoding.feature", index = 1)]
fn encoding_cyrillic_addresses(request: RefCell<RouteRequest>, query: RefCell<String>) {
    let _ = (request, query);
}

#[scenario(path = "tests/features/query_encoding.feature", index = 2)]
fn joining_waypoints(request: RefCell<RouteRequest>, query: RefCell<String>) {
    let _ = (request, query);
}
