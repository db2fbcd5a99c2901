use super::*;

#[test]
fn find_cookie_picks_named_value() {
    let header = "theme=dark; accessToken=abc.def.ghi; other=1";
    assert_eq!(find_cookie(header, "accessToken").as_deref(), Some("abc.def.ghi"));
    assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
}

#[test]
fn find_cookie_requires_exact_name() {
    assert_eq!(find_cookie("xaccessToken=1", "accessToken"), None);
    assert_eq!(find_cookie("", "accessToken"), None);
}

#[test]
fn find_cookie_treats_empty_value_as_missing() {
    assert_eq!(find_cookie("accessToken=; a=b", "accessToken"), None);
}

#[test]
fn find_cookie_decodes_percent_encoding() {
    assert_eq!(find_cookie("accessToken=a%3Bb%20c", "accessToken").as_deref(), Some("a;b c"));
}

#[test]
fn access_token_cookie_has_fixed_window() {
    let cookie = Cookie::parse(access_token_cookie("tok")).unwrap();
    assert_eq!(cookie.name(), "accessToken");
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(time::Duration::days(1)));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn access_token_cookie_survives_separators_in_token() {
    let header = access_token_cookie("a;b c");
    let pair = header.split("; ").next().unwrap();
    assert_eq!(find_cookie(pair, ACCESS_TOKEN_COOKIE).as_deref(), Some("a;b c"));
}

#[test]
fn expired_cookie_has_zero_max_age() {
    let cookie = Cookie::parse(expired_access_token_cookie()).unwrap();
    assert_eq!(cookie.name(), "accessToken");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn access_token_is_absent_outside_browser() {
    assert_eq!(access_token(), None);
}
