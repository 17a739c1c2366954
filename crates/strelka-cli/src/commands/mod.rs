pub mod check;
pub mod run_common;
pub mod trace;
pub mod tree;
