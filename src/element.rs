use crate::strmap::StrMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Box<str>,
    attrs: StrMap<Box<str>>,
    text: Option<Box<str>>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            attrs: StrMap::new(),
            text: None,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.find(name).map(|v| &**v)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name, value.into());
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.into());
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k, &**v))
    }
}
