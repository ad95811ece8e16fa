use crate::strmap::StrMap;

use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    map: StrMap<Box<str>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.find(name).map(|v| &**v)
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.map.insert(name, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k, &**v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
