use super::*;

fn config() -> ApiConfig {
    ApiConfig::from_raw(Some("https://api.vidhyardhi.test/api"))
}

#[test]
fn endpoint_url_joins_segments_under_base_path() {
    assert_eq!(
        endpoint_url(&config(), &["auth", "login"], &[]).unwrap(),
        "https://api.vidhyardhi.test/api/auth/login"
    );
}

#[test]
fn endpoint_url_encodes_identifier_segments() {
    assert_eq!(
        endpoint_url(&config(), &["colleges", "a/b c"], &[]).unwrap(),
        "https://api.vidhyardhi.test/api/colleges/a%2Fb%20c"
    );
}

#[test]
fn endpoint_url_appends_query_pairs_in_order() {
    let query: Query = vec![("search", "iit delhi".to_owned()), ("page", "2".to_owned())];
    assert_eq!(
        endpoint_url(&config(), &["colleges"], &query).unwrap(),
        "https://api.vidhyardhi.test/api/colleges?search=iit+delhi&page=2"
    );
}

#[test]
fn endpoint_url_rejects_unparseable_base() {
    let bad = ApiConfig { base_url: "not a url".to_owned() };
    assert!(matches!(endpoint_url(&bad, &["exams"], &[]), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn endpoint_url_rejects_cannot_be_a_base_urls() {
    let bad = ApiConfig { base_url: "mailto:admin@example.com".to_owned() };
    assert!(matches!(endpoint_url(&bad, &["exams"], &[]), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpApi::new(config());
    let creds = Credentials { email: "a@b.com".to_owned(), password: "123456".to_owned() };
    let result = futures::executor::block_on(api.login(&creds));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn http_api_surfaces_invalid_base_before_dispatch() {
    let api = HttpApi::new(ApiConfig { base_url: "::".to_owned() });
    let result = futures::executor::block_on(api.college("c1"));
    assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
}
