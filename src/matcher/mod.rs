mod error;
mod params;
mod query;

pub use self::error::PatternError;
pub use self::params::Params;

use self::query::{decode, parse_query};

use smallvec::SmallVec;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';

pub fn segmentize(path: &str) -> SmallVec<[&str; 8]> {
    path.split(SLASH).filter(|s| !s.is_empty()).collect()
}

pub fn exec(url: &str, pattern: &str, existing: Params) -> Option<Params> {
    let mut params = existing;
    let (path, query) = split_query(url);
    if let Some(query) = query {
        parse_query(query, &mut params);
    }

    let parts = segmentize(path);
    let route = segmentize(pattern);
    let len = parts.len().max(route.len());

    for i in 0..len {
        let seg = match route.get(i) {
            Some(&seg) => seg,
            // url has leftover segments and the pattern holds no wildcard
            None => return None,
        };
        if let Some(name) = seg.strip_prefix(COLON) {
            if let Some(name) = name.strip_suffix(STAR) {
                let rest = parts.get(i..).unwrap_or(&[]);
                let joined = rest.iter().map(|s| decode(s)).collect::<Vec<_>>().join("/");
                params.set(name, &joined);
                return Some(params);
            }
            match parts.get(i) {
                Some(value) => params.set(name, &decode(value)),
                None => return None,
            }
        } else if parts.get(i) != Some(&seg) {
            return None;
        }
    }

    Some(params)
}

pub(crate) fn query_params(url: &str) -> Params {
    let mut params = Params::new();
    if let Some(query) = split_query(url).1 {
        parse_query(query, &mut params);
    }
    params
}

pub(crate) fn strip_query(url: &str) -> &str {
    split_query(url).0
}

#[inline]
fn split_query(url: &str) -> (&str, Option<&str>) {
    match url.find('?') {
        Some(i) => (&url[..i], Some(&url[i + 1..])),
        None => (url, None),
    }
}

pub(crate) fn check_pattern(pattern: &str) -> Result<(), &'static str> {
    if !pattern.starts_with(SLASH) {
        return Err("pattern must start with '/'");
    }
    let parts = segmentize(pattern);
    for (i, &part) in parts.iter().enumerate() {
        if let Some(name) = part.strip_prefix(COLON) {
            let (name, wildcard) = match name.strip_suffix(STAR) {
                Some(name) => (name, true),
                None => (name, false),
            };
            if name.is_empty() {
                return Err("capture name can not be empty");
            }
            if wildcard && i + 1 != parts.len() {
                return Err("wildcard pattern can only appear at end");
            }
        }
    }
    Ok(())
}

#[test]
fn test_check_pattern() {
    assert!(check_pattern("/").is_ok());
    assert!(check_pattern("/user/:id").is_ok());
    assert!(check_pattern("/file/:rest*").is_ok());
    assert!(check_pattern("user").is_err());
    assert!(check_pattern("/:").is_err());
    assert!(check_pattern("/:*").is_err());
    assert!(check_pattern("/file/:rest*/tail").is_err());
}
