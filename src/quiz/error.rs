use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to open treebank {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("treebank {} contains no parsable sentences", .0.display())]
    Empty(PathBuf),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("question has {0} options, a record needs exactly 4")]
    OptionCount(usize),

    #[error("correct answer '{0}' is not among the options")]
    MissingAnswer(String),
}
