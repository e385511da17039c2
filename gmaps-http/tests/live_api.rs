//! Checks against the live Maps web services.
//!
//! These need outbound network access and a service that still answers
//! keyless requests, so they are ignored by default. Run them with
//! `cargo test -p gmaps-http --test live_api -- --ignored`.

use gmaps_core::{Location, RouteRequest, TravelMode};
use gmaps_http::MapsClient;
use rstest::{fixture, rstest};

const KHRESHCHATYK_1: &str = "Київ, Хрещатик 1";
const KHRESHCHATYK_3: &str = "Київ, Хрещатик 3";

#[fixture]
fn client() -> MapsClient {
    MapsClient::new().expect("client should build")
}

#[rstest]
#[ignore = "requires network access to the Maps API"]
fn kiev_to_lviv_is_about_540_km(client: MapsClient) {
    let metres = client
        .get_distance(&RouteRequest::new("Kiev", "Lviv"))
        .expect("distance should load");

    assert!(
        (530_000..=545_000).contains(&metres),
        "unexpected distance {metres}"
    );
}

#[rstest]
#[ignore = "requires network access to the Maps API"]
fn short_walk_takes_under_1000_seconds(client: MapsClient) {
    let request =
        RouteRequest::new(KHRESHCHATYK_1, KHRESHCHATYK_3).with_mode(TravelMode::Walking);

    let travel_time = client.get_time(&request).expect("time should load");

    assert!(travel_time.as_secs() < 1_000, "walk took {travel_time:?}");
}

#[rstest]
#[ignore = "requires network access to the Maps API"]
fn short_walk_is_about_550_metres(client: MapsClient) {
    let metres = client
        .get_distance(&RouteRequest::new(KHRESHCHATYK_1, KHRESHCHATYK_3))
        .expect("distance should load");

    assert!(metres.abs_diff(550) <= 30, "unexpected distance {metres}");
}

#[rstest]
#[ignore = "requires network access to the Maps API"]
fn transit_between_cities_is_positive(client: MapsClient) {
    let request = RouteRequest::new("Kiev", "Lviv").with_mode(TravelMode::Transit);

    let travel_time = client.get_time(&request).expect("time should load");

    assert!(travel_time.as_secs() > 0);
}

#[rstest]
#[ignore = "requires network access to the Maps API"]
fn coordinates_match_place_names(client: MapsClient) {
    let by_coordinates = client
        .get_distance(&RouteRequest::new(
            Location::lat_lng(50.4501, 30.5234),
            Location::lat_lng(49.8396, 24.0297),
        ))
        .expect("distance by coordinates should load");
    let by_name = client
        .get_distance(&RouteRequest::new("Kiev", "Lviv"))
        .expect("distance by name should load");

    assert!(
        by_coordinates.abs_diff(by_name) <= 200,
        "{by_coordinates} vs {by_name}"
    );
}
