pub mod config;
pub mod decision;
pub mod lambda_structure;
pub mod result;
