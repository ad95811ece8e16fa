#[derive(Debug, thiserror::Error)]
#[error("{msg}")]
pub struct PatternError {
    msg: &'static str,
}

impl PatternError {
    pub(crate) fn new(msg: &'static str) -> Self {
        Self { msg }
    }
}
