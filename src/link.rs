use crate::component::{Child, Match, MatchProps, MatchResult};
use crate::element::Element;
use crate::matcher::PatternError;
use crate::router::Router;

use smallvec::SmallVec;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct LinkProps {
    pub href: Option<String>,
    pub path: Option<String>,
    pub active_class: Option<String>,
    pub class: Option<String>,
    pub text: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub parent_base: Option<String>,
}

pub struct Link {
    router: Rc<Router>,
    inner: Match,
    props: LinkProps,
}

impl Link {
    pub fn new(router: Rc<Router>, props: LinkProps) -> Self {
        let pattern = props.path.clone().or_else(|| props.href.clone());
        match Self::try_new(router, props) {
            Ok(link) => link,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_new(router: Rc<Router>, props: LinkProps) -> Result<Self, PatternError> {
        let inner = Match::try_new(
            Rc::clone(&router),
            MatchProps {
                path: props.path.clone().or_else(|| props.href.clone()),
                base: None,
                parent_base: props.parent_base.clone(),
            },
        )?;
        Ok(Self {
            router,
            inner,
            props,
        })
    }

    pub fn mount(&self) {
        self.inner.mount();
    }

    pub fn unmount(&self) {
        self.inner.unmount();
    }

    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    pub fn render(&self) -> Element {
        let mut child = Child::Render(Box::new(move |result: &MatchResult| self.anchor(result)));
        match self.inner.render(&mut child) {
            Some(element) => element,
            None => unreachable!(),
        }
    }

    fn anchor(&self, result: &MatchResult) -> Element {
        let mut element = match &self.props.href {
            Some(href) => self.router.link(href),
            None => Element::new("a"),
        };
        for (name, value) in &self.props.attrs {
            element.set_attr(name, value);
        }
        if let Some(text) = &self.props.text {
            element.set_text(text);
        }

        // empty pieces are filtered out: an inactive link never carries the
        // active class as an empty token
        let mut pieces: SmallVec<[&str; 2]> = SmallVec::new();
        if let Some(class) = &self.props.class {
            if !class.is_empty() {
                pieces.push(class);
            }
        }
        if result.matches {
            if let Some(active) = &self.props.active_class {
                if !active.is_empty() {
                    pieces.push(active);
                }
            }
        }
        element.set_attr("class", &pieces.join(" "));
        element
    }
}
