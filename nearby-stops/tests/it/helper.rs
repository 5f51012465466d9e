use nearby_stops::pipeline::LookupPipeline;
use nearby_stops::postcodes::{PostcodeClient, PostcodeClientConfig};
use nearby_stops::tfl::{StopPointClient, StopPointClientConfig, TflCredentials};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const APP_ID: &str = "test-id";
pub const APP_KEY: &str = "test-key";

/// One mock server standing in for both postcodes.io and TfL.
pub struct TestHelper {
    pub mock_server: MockServer,
}

impl TestHelper {
    pub async fn new() -> TestHelper {
        TestHelper {
            mock_server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.mock_server.uri()
    }

    pub fn postcode_client(&self) -> PostcodeClient {
        PostcodeClient::new(PostcodeClientConfig::new().with_base_url(self.base_url())).unwrap()
    }

    pub fn stop_point_client(&self) -> StopPointClient {
        let config = StopPointClientConfig::new(TflCredentials::new(APP_ID, APP_KEY))
            .with_base_url(self.base_url());
        StopPointClient::new(config).unwrap()
    }

    pub fn pipeline(&self, stop_count: usize) -> LookupPipeline {
        LookupPipeline::from_clients(self.postcode_client(), self.stop_point_client(), stop_count)
    }

    /// Serve `body` for `GET /postcodes/{code}`.
    pub async fn mock_postcode(&self, code: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/postcodes/{code}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_postcode_location(&self, code: &str, latitude: f64, longitude: f64) {
        self.mock_postcode(
            code,
            200,
            json!({
                "status": 200,
                "result": {
                    "postcode": code,
                    "latitude": latitude,
                    "longitude": longitude
                }
            }),
        )
        .await;
    }

    /// Serve `stopPoints` for a stop search, expecting exactly `calls` requests.
    pub async fn mock_stop_points(&self, status: u16, body: Value, calls: u64) {
        Mock::given(method("GET"))
            .and(path("/StopPoint"))
            .and(query_param("stopTypes", "NaptanPublicBusCoachTram"))
            .and(query_param("app_id", APP_ID))
            .and(query_param("app_key", APP_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(calls)
            .mount(&self.mock_server)
            .await;
    }
}

/// A TfL response listing `n` stops named `Stop 1`..`Stop n`.
pub fn stop_points_body(n: usize) -> Value {
    let stops: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "naptanId": format!("49000000{i}"),
                "commonName": format!("Stop {i}"),
                "distance": 10.0 * i as f64
            })
        })
        .collect();

    json!({ "centrePoint": [51.5, -0.1], "stopPoints": stops })
}
