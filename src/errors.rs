use crate::scene::NodeId;
use failure::Backtrace;
use failure::Context;
use failure::Fail;
use std::fmt;
use std::fmt::Display;

#[derive(Debug)]
pub struct SceneError {
    inner: Context<SceneErrorKind>,
}

impl SceneError {
    pub fn kind(&self) -> SceneErrorKind {
        self.inner.get_context().clone()
    }
}

impl From<SceneErrorKind> for SceneError {
    fn from(kind: SceneErrorKind) -> SceneError {
        SceneError {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<SceneErrorKind>> for SceneError {
    fn from(inner: Context<SceneErrorKind>) -> SceneError {
        SceneError { inner }
    }
}

impl Fail for SceneError {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum SceneErrorKind {
    #[fail(display = "No texture is registered under the key \"{}\"", _0)]
    UnknownTexture(String),

    #[fail(display = "Scene node {} has been destroyed", _0)]
    NodeDestroyed(NodeId),
}
