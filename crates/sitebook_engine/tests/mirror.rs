use sitebook_engine::{mirror, MirrorError};

#[test]
fn malformed_url_is_rejected_before_any_download() {
    let err = mirror("not a url at all").unwrap_err();
    assert!(matches!(err, MirrorError::InvalidUrl(_)));
}

#[test]
fn non_http_schemes_are_rejected() {
    let err = mirror("ftp://example.com/docs").unwrap_err();
    match err {
        MirrorError::UnsupportedScheme(scheme) => assert_eq!(scheme, "ftp"),
        other => panic!("unexpected error: {other}"),
    }
}
