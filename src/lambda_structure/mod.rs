pub mod lambda_trait;

#[cfg(test)]
pub(crate) mod captured_logs;
