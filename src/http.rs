use reqwest::blocking::Client;

pub fn new_client() -> Client {
    Client::new()
}

pub fn get_json<'a, T, Q>(
    client: &Client,
    url: &'a str,
    query: &'a Q,
    headers: &[(&'static str, &str)],
) -> reqwest::Result<T>
where
    for<'de> T: serde::Deserialize<'de>,
    Q: serde::Serialize + ?Sized + 'a,
{
    let mut req = client.get(url).query(query);
    for &(k, v) in headers {
        req = req.header(k, v);
    }

    log::debug!("GET {}", url);

    client
        .execute(req.build()?)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json())
        .map_err(|err| {
            log::warn!("cannot get json for '{}': {}", url, err);
            err
        })
}
