mod arena;
mod node;
mod tree;

pub(crate) use arena::NodeId;
pub(crate) use tree::RawTree;
