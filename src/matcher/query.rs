use super::params::Params;

use percent_encoding::percent_decode_str;

pub(super) fn parse_query(query: &str, params: &mut Params) {
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        // key is everything before the first '=', value everything after it
        let (key, value) = match pair.find('=') {
            Some(i) => (&pair[..i], &pair[i + 1..]),
            None => (pair, ""),
        };
        params.set(&decode(key), &decode(value));
    }
}

pub(super) fn decode(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(text) => text.into_owned(),
        Err(_) => input.to_owned(),
    }
}

#[test]
fn test_parse_query() {
    let mut params = Params::new();
    parse_query("a=1&b=&c&x=a%26b&&k=v=w", &mut params);
    assert_eq!(params.get("a"), Some("1"));
    assert_eq!(params.get("b"), Some(""));
    assert_eq!(params.get("c"), Some(""));
    assert_eq!(params.get("x"), Some("a&b"));
    assert_eq!(params.get("k"), Some("v=w"));
    assert_eq!(params.len(), 5);
}
