use crate::element::Element;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub type Subscriber = Rc<dyn Fn(&str)>;

pub struct Router {
    url: RefCell<Box<str>>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_url("/")
    }

    pub fn with_url(url: &str) -> Self {
        Self {
            url: RefCell::new(url.into()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn current_url(&self) -> String {
        self.url.borrow().to_string()
    }

    pub fn subscribe(&self, subscriber: Subscriber) {
        self.subscribers.borrow_mut().push(subscriber);
        tracing::trace!(subscribers = self.subscriber_count(), "subscribed");
    }

    /// Removes `subscriber` by identity. Removing one that was never
    /// subscribed (or was already removed) is a no-op.
    pub fn unsubscribe(&self, subscriber: &Subscriber) {
        let mut subscribers = self.subscribers.borrow_mut();
        if let Some(i) = subscribers.iter().position(|s| Rc::ptr_eq(s, subscriber)) {
            subscribers.remove(i);
        }
        tracing::trace!(subscribers = subscribers.len(), "unsubscribed");
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn route(&self, url: &str) {
        *self.url.borrow_mut() = url.into();
        // dispatch iterates a snapshot: subscribers may mutate the list
        // mid-dispatch without entries being skipped or invoked twice
        let snapshot: Vec<Subscriber> = self.subscribers.borrow().clone();
        tracing::trace!(url, subscribers = snapshot.len(), "dispatching navigation");
        for subscriber in &snapshot {
            subscriber(url);
        }
    }

    pub fn link(&self, href: &str) -> Element {
        Element::new("a").with_attr("href", href)
    }

    /// Client-side activation of an anchor: navigates to its `href` instead
    /// of a full page load. Returns whether the activation was handled.
    pub fn follow(&self, link: &Element) -> bool {
        if link.tag() != "a" {
            return false;
        }
        match link.attr("href") {
            Some(href) => {
                let href = href.to_owned();
                self.route(&href);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("url", &self.url.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
