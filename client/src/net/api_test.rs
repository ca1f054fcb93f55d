use super::*;

#[test]
fn api_url_prefixes_proxy_path() {
    assert_eq!(api_url("/leads"), "/api/leads");
    assert_eq!(api_url("/leads/abc"), "/api/leads/abc");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}
