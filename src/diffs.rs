pub mod edit_op;
pub mod lcs;
pub mod merge;
