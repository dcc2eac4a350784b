//! CLI command implementations.

pub(crate) mod platforms;
pub(crate) mod resolve;
pub(crate) mod source;
pub(crate) mod tree;

pub(crate) use platforms::{PlatformArgs, PlatformsArgs};
pub(crate) use resolve::ResolveArgs;
pub(crate) use tree::TreeArgs;
