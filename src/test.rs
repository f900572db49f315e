#![allow(dead_code)]
pub use crate::*;

use httptest::{matchers::*, responders::*, Expectation, Server};

pub static OEMBED_PATH: &str = "/api/oembed.json";

pub fn get_fixture_path() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path().join(name)).unwrap()
}

/// An oembed body with just the fields the adapter reads
pub fn oembed_body(title: &str, description: &str, thumbnail_url: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "video",
        "provider_name": "Vimeo",
        "title": title,
        "description": description,
        "thumbnail_url": thumbnail_url,
    })
}

pub fn thumbnail_url(width: u32, height: u32) -> String {
    format!(
        "http://i.vimeocdn.com/video/452001751_{}x{}.jpg?r=pad",
        width, height
    )
}

// the query values sent for each size, in the order they're requested
pub static SIZE_QUERIES: [(ThumbnailSize, &str, &str); 3] = [
    (ThumbnailSize::Small, "100", "75"),
    (ThumbnailSize::Medium, "200", "150"),
    (ThumbnailSize::Large, "640", "464"),
];

/// Expect exactly one lookup of `url` for the `width`x`height` thumbnail
pub fn expect_lookup(
    server: &Server,
    url: &'static str,
    (width, height): (&'static str, &'static str),
    responder: impl Responder + 'static,
) {
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", OEMBED_PATH),
            request::query(url_decoded(contains(("url", url)))),
            request::query(url_decoded(contains(("width", width)))),
            request::query(url_decoded(contains(("height", height))))
        ])
        .respond_with(responder),
    );
}

/// Expect one lookup per thumbnail size, each titled with its size
pub fn expect_all_sizes(server: &Server, url: &'static str) {
    for &(size, width, height) in &SIZE_QUERIES {
        let (w, h) = size.dimensions();
        let body = oembed_body(
            &format!("{} title", size),
            &format!("{} description", size),
            &thumbnail_url(w, h),
        );
        expect_lookup(
            server,
            url,
            (width, height),
            status_code(200).body(body.to_string()),
        );
    }
}

pub fn client_for(server: &Server) -> OembedClient {
    OembedClient::with_ep(server.url_str(OEMBED_PATH))
}
