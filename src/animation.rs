pub(crate) mod animator;
pub(crate) mod basic;
pub(crate) mod config;
pub(crate) mod structural;
pub(crate) mod timing;
pub(crate) mod track;
