pub mod article;
pub mod topic;
