pub mod schema;

pub use schema::{
    RewriteConfig, ValidationError, ValidationIssue, WriteMode, DEFAULT_REPLACEMENT,
    DEFAULT_TARGET, DEFAULT_TOKEN,
};
