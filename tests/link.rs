use route_match::{Link, LinkProps, Match, MatchProps, Router};

use std::rc::Rc;

fn active_link(path: &str, class: Option<&str>, text: &str) -> LinkProps {
    LinkProps {
        path: Some(path.to_owned()),
        active_class: Some("active".to_owned()),
        class: class.map(str::to_owned),
        text: Some(text.to_owned()),
        ..LinkProps::default()
    }
}

#[test]
fn active_class_follows_navigation() {
    let router = Rc::new(Router::new());
    let foo = Link::new(Rc::clone(&router), active_link("/foo", None, "foo"));
    let bar = Link::new(Rc::clone(&router), active_link("/bar", Some("bar"), "bar"));
    foo.mount();
    bar.mount();

    router.route("/foo");
    assert_eq!(foo.render().attr("class"), Some("active"));
    assert_eq!(bar.render().attr("class"), Some("bar"));

    // a query string does not disturb the match
    router.route("/foo?bar=5");
    assert_eq!(foo.render().attr("class"), Some("active"));
    assert_eq!(bar.render().attr("class"), Some("bar"));

    router.route("/bar");
    assert_eq!(foo.render().attr("class"), Some(""));
    assert_eq!(bar.render().attr("class"), Some("bar active"));
}

#[test]
fn link_falls_back_to_href() {
    let router = Rc::new(Router::new());
    let link = Link::new(
        Rc::clone(&router),
        LinkProps {
            href: Some("/docs".to_owned()),
            active_class: Some("active".to_owned()),
            text: Some("docs".to_owned()),
            ..LinkProps::default()
        },
    );
    link.mount();

    router.route("/docs");
    let element = link.render();
    assert_eq!(element.tag(), "a");
    assert_eq!(element.attr("href"), Some("/docs"));
    assert_eq!(element.attr("class"), Some("active"));
    assert_eq!(element.text(), Some("docs"));

    router.route("/elsewhere");
    assert_eq!(link.render().attr("class"), Some(""));
}

#[test]
fn path_wins_over_href_for_matching() {
    let router = Rc::new(Router::new());
    let link = Link::new(
        Rc::clone(&router),
        LinkProps {
            href: Some("/docs/intro".to_owned()),
            path: Some("/docs/:page".to_owned()),
            active_class: Some("active".to_owned()),
            ..LinkProps::default()
        },
    );
    link.mount();

    router.route("/docs/setup");
    let element = link.render();
    assert_eq!(element.attr("class"), Some("active"));
    assert_eq!(element.attr("href"), Some("/docs/intro"));
}

#[test]
fn extra_attrs_pass_through() {
    let router = Rc::new(Router::new());
    let link = Link::new(
        Rc::clone(&router),
        LinkProps {
            href: Some("/out".to_owned()),
            attrs: vec![("target".to_owned(), "_blank".to_owned())],
            ..LinkProps::default()
        },
    );
    link.mount();

    let element = link.render();
    assert_eq!(element.attr("target"), Some("_blank"));
    assert_eq!(element.attr("href"), Some("/out"));
}

#[test]
fn link_is_dirty_after_navigation() {
    let router = Rc::new(Router::new());
    let link = Link::new(Rc::clone(&router), active_link("/foo", None, "foo"));
    link.mount();
    link.render();
    assert!(!link.is_dirty());

    router.route("/foo");
    assert!(link.is_dirty());
    link.render();
    assert!(!link.is_dirty());

    link.unmount();
    assert_eq!(router.subscriber_count(), 0);
    router.route("/bar");
    assert!(!link.is_dirty());
}

#[test]
fn follow_navigates() {
    let router = Rc::new(Router::new());
    let component = Match::new(
        Rc::clone(&router),
        MatchProps {
            path: Some("/foo".to_owned()),
            ..MatchProps::default()
        },
    );
    component.mount();
    component.render(&mut route_match::Child::None);

    let anchor = router.link("/foo");
    assert!(router.follow(&anchor));
    assert_eq!(router.current_url(), "/foo");
    assert!(component.is_dirty());

    // only anchors with an href are intercepted
    assert!(!router.follow(&route_match::Element::new("a")));
    assert!(!router.follow(
        &route_match::Element::new("div").with_attr("href", "/bar")
    ));
    assert_eq!(router.current_url(), "/foo");
}

#[test]
fn invalid_link_pattern_is_rejected() {
    let router = Rc::new(Router::new());
    let result = Link::try_new(
        Rc::clone(&router),
        LinkProps {
            href: Some("docs".to_owned()),
            ..LinkProps::default()
        },
    );
    assert!(result.is_err());
}
