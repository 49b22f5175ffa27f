mod arena;
mod handle;
mod node;
mod raw_alpha_tree;

pub(crate) use raw_alpha_tree::RawAlphaTree;
