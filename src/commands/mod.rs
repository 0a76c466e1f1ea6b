pub mod compute;
pub mod explain;
pub mod project_root;
pub mod tables;
