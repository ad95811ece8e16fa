use crate::element::Element;
use crate::matcher::{self, Params, PatternError};
use crate::router::{Router, Subscriber};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub enum Child<'a> {
    None,
    Render(Box<dyn FnMut(&MatchResult) -> Element + 'a>),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub url: String,
    pub path: String,
    pub matches: bool,
    pub params: Params,
}

#[derive(Debug, Clone, Default)]
pub struct MatchProps {
    pub path: Option<String>,
    pub base: Option<String>,
    pub parent_base: Option<String>,
}

pub struct Match {
    router: Rc<Router>,
    path: Option<Box<str>>,
    parent_base: Box<str>,
    base_url: Box<str>,
    pending: Rc<Pending>,
    subscription: RefCell<Option<Subscriber>>,
}

struct Pending {
    url: RefCell<Option<Box<str>>>,
    dirty: Cell<bool>,
}

impl Match {
    pub fn new(router: Rc<Router>, props: MatchProps) -> Self {
        let pattern = props.path.clone();
        match Self::try_new(router, props) {
            Ok(component) => component,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_new(router: Rc<Router>, props: MatchProps) -> Result<Self, PatternError> {
        if let Some(path) = &props.path {
            matcher::check_pattern(path).map_err(PatternError::new)?;
        }

        let parent_base = props.parent_base.unwrap_or_default();

        // the base grows by the pattern's leading static segments only;
        // accumulation stops at the first parameter segment
        let mut base_url = props.base.clone().unwrap_or_default();
        if let Some(path) = &props.path {
            for segment in matcher::segmentize(path) {
                if segment.starts_with(':') {
                    break;
                }
                base_url.push('/');
                base_url.push_str(segment);
            }
        }
        if props.base.is_none() && !parent_base.is_empty() {
            base_url = format!("{}{}", parent_base, base_url);
        }

        Ok(Self {
            router,
            path: props.path.map(Into::into),
            parent_base: parent_base.into(),
            base_url: base_url.into(),
            pending: Rc::new(Pending {
                url: RefCell::new(None),
                dirty: Cell::new(true),
            }),
            subscription: RefCell::new(None),
        })
    }

    /// The composed base path descendants thread as their `parent_base`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn mount(&self) {
        if self.subscription.borrow().is_some() {
            return;
        }
        let pending = Rc::clone(&self.pending);
        // the callback records the url and requests a re-render; the match
        // itself is recomputed at render time
        let subscriber: Subscriber = Rc::new(move |url: &str| {
            *pending.url.borrow_mut() = Some(url.into());
            pending.dirty.set(true);
        });
        self.router.subscribe(Rc::clone(&subscriber));
        *self.subscription.borrow_mut() = Some(subscriber);
        tracing::trace!(base = %self.base_url, "match mounted");
    }

    pub fn unmount(&self) {
        if let Some(subscriber) = self.subscription.borrow_mut().take() {
            self.router.unsubscribe(&subscriber);
            tracing::trace!(base = %self.base_url, "match unmounted");
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.dirty.get()
    }

    pub fn render(&self, child: &mut Child<'_>) -> Option<Element> {
        let url: String = match self.pending.url.borrow_mut().take() {
            Some(pending) => pending.into(),
            None => self.router.current_url(),
        };
        self.pending.dirty.set(false);

        let path = matcher::strip_query(&url);
        let (matches, params) = self.compute(&url, path);
        let result = MatchResult {
            path: path.to_owned(),
            url,
            matches,
            params,
        };

        match child {
            Child::None => None,
            Child::Render(render) => Some(render(&result)),
            Child::Element(element) => {
                let mut element = element.clone();
                merge_result(&mut element, &result);
                Some(element)
            }
        }
    }

    fn compute(&self, url: &str, path: &str) -> (bool, Params) {
        let pattern = match &self.path {
            // no pattern: the component matches the current path itself
            None => return (true, matcher::query_params(url)),
            Some(pattern) => pattern,
        };
        let full = format!("{}{}", self.parent_base, pattern);
        match matcher::exec(url, &full, Params::new()) {
            Some(params) => (true, params),
            None if path == &**pattern => (true, matcher::query_params(url)),
            None => (false, Params::new()),
        }
    }
}

impl Drop for Match {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn merge_result(element: &mut Element, result: &MatchResult) {
    element.set_attr("url", &result.url);
    element.set_attr("path", &result.path);
    element.set_attr("matches", if result.matches { "true" } else { "false" });
    for (name, value) in result.params.iter() {
        element.set_attr(name, value);
    }
}
