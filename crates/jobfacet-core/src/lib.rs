//! Shared data model and configuration for the jobfacet pipeline.
//!
//! The text parser (`jobfacet-text`) and the filter normalizer
//! (`jobfacet-filters`) both depend on this crate and never on each other.

pub mod app_config;
pub mod blocks;
pub mod config;
pub mod dimension;
pub mod tags;
pub mod vocab;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use blocks::{
    BlockContent, BlockKind, BlockMetadata, JobSections, ListStyle, ParsedContent, TextBlock,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use dimension::FilterDimension;
pub use tags::{Tag, TagCategory};
pub use vocab::{load_vocab, lookup_key, VocabFile};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown filter dimension: {0}")]
    UnknownDimension(String),

    #[error("unknown tag category: {0}")]
    UnknownTagCategory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabFileParse(#[from] serde_yaml::Error),

    #[error("vocabulary validation error: {0}")]
    Validation(String),
}
