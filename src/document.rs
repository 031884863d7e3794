pub(crate) mod namespace;
pub(crate) mod parse;
pub(crate) mod style;
pub(crate) mod tree;
pub(crate) mod write;
