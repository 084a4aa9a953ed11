use reqwest::header;

// Upstream providers reject non-browser clients, so every outbound call
// carries a header set captured from a real browser session.

pub static DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub static ACCEPT_JSON: &str = "application/json";

pub static SHOP2GAME_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 11; Redmi Note 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Mobile Safari/537.36";
pub static SHOP2GAME_ORIGIN: &str = "https://shop2game.com";
pub static SHOP2GAME_REFERER: &str = "https://shop2game.com/app/100067/idlogin";
pub static SHOP2GAME_DATADOME_CLIENT_ID: &str = "6h5F5cx_GpbuNtAkftMpDjsbLcL3op_5W5Z-npxeT_qcEe_7pvil2EuJ6l~JlYDxEALeyvKTz3~LyC1opQgdP~7~UDJ0jYcP5p20IQlT3aBEIKDYLH~cqdfXnnR6FAL0";

pub static GARENA_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
pub static GARENA_AUTHORITY: &str = "ff.garena.com";
pub static GARENA_REFERER: &str = "https://ff.garena.com/en/support/";
pub static GARENA_REQUESTED_WITH: &str = "B6FksShzIgjfrYImLpTsadjS86sddhFH";
pub static GARENA_COOKIE: &str = "_ga_8RFDT0P8N9=GS1.1.1706295767.2.0.1706295767.0.0.0; apple_state_key=8236785ac31b11ee960a621594e13693; datadome=bbC6XTzUAS0pXgvEs7u";

pub fn browser_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, ACCEPT_JSON.parse().unwrap());
    headers.insert(header::USER_AGENT, DESKTOP_USER_AGENT.parse().unwrap());
    headers
}

pub fn shop2game_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9".parse().unwrap());
    headers.insert(header::CONNECTION, "keep-alive".parse().unwrap());
    headers.insert(header::ORIGIN, SHOP2GAME_ORIGIN.parse().unwrap());
    headers.insert(header::REFERER, SHOP2GAME_REFERER.parse().unwrap());
    headers.insert(header::USER_AGENT, SHOP2GAME_USER_AGENT.parse().unwrap());
    headers.insert(header::ACCEPT, ACCEPT_JSON.parse().unwrap());
    headers.insert(header::CONTENT_TYPE, ACCEPT_JSON.parse().unwrap());
    headers.insert("sec-ch-ua", "\"Chromium\";v=\"107\", \"Not=A?Brand\";v=\"24\"".parse().unwrap());
    headers.insert("sec-ch-ua-mobile", "?1".parse().unwrap());
    headers.insert("sec-ch-ua-platform", "\"Android\"".parse().unwrap());
    headers.insert("x-datadome-clientid", SHOP2GAME_DATADOME_CLIENT_ID.parse().unwrap());
    headers
}

pub fn garena_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, GARENA_USER_AGENT.parse().unwrap());
    headers.insert(header::ACCEPT, "application/json, text/plain, */*".parse().unwrap());
    headers.insert("authority", GARENA_AUTHORITY.parse().unwrap());
    headers.insert(header::ACCEPT_LANGUAGE, "en-GB,en-US;q=0.9,en;q=0.8".parse().unwrap());
    headers.insert(header::REFERER, GARENA_REFERER.parse().unwrap());
    headers.insert("sec-ch-ua", "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\"".parse().unwrap());
    headers.insert("sec-ch-ua-mobile", "?1".parse().unwrap());
    headers.insert("sec-ch-ua-platform", "\"Android\"".parse().unwrap());
    headers.insert("sec-fetch-dest", "empty".parse().unwrap());
    headers.insert("sec-fetch-mode", "cors".parse().unwrap());
    headers.insert("sec-fetch-site", "same-origin".parse().unwrap());
    headers.insert("x-requested-with", GARENA_REQUESTED_WITH.parse().unwrap());
    headers.insert(header::COOKIE, GARENA_COOKIE.parse().unwrap());
    headers
}
