pub mod ops_lock;
pub mod ops_resolve;
pub mod ops_show;
pub mod ops_tree;
pub mod project;
pub mod service;
