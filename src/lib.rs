#![forbid(unsafe_code)]

mod component;
mod element;
mod link;
mod matcher;
mod router;
mod strmap;

pub use crate::component::{Child, Match, MatchProps, MatchResult};
pub use crate::element::Element;
pub use crate::link::{Link, LinkProps};
pub use crate::matcher::{exec, segmentize, Params, PatternError};
pub use crate::router::{Router, Subscriber};
