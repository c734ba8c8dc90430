use std::env;
use std::path::PathBuf;

pub const TREEBANK_ENV: &str = "MCQ_TREEBANK";

/// Settings for building the linguistic resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceConfig {
    /// CoNLL-U treebank used to extend the tagger's lexicon.
    pub treebank: Option<PathBuf>,
}

impl ResourceConfig {
    /// Reads `MCQ_TREEBANK`; an empty value counts as unset.
    pub fn from_env() -> Self {
        Self {
            treebank: env::var_os(TREEBANK_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        }
    }
}
