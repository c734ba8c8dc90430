use std::sync::OnceLock;

use log::{info, warn};

use crate::config::ResourceConfig;
use crate::quiz::lexicon::{self, Lexicon};
use crate::quiz::segment::Segmenter;
use crate::quiz::stopwords::StopWords;
use crate::quiz::tagger::Tagger;

/// Everything the generator needs besides the text itself. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct LanguageResources {
    pub segmenter: Segmenter,
    pub tagger: Tagger,
    pub stop_words: StopWords,
}

impl LanguageResources {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Builds the resources, extending the lexicon from the configured
    /// treebank. A treebank that cannot be read is reported and skipped.
    pub fn load(config: &ResourceConfig) -> Self {
        let mut lexicon = Lexicon::builtin();
        if let Some(path) = &config.treebank {
            match lexicon::load_treebank(path) {
                Ok(entries) => {
                    info!(
                        "loaded {} word forms from treebank {}",
                        entries.len(),
                        path.display()
                    );
                    lexicon = lexicon.with_treebank(entries);
                }
                Err(err) => warn!("{err}; tagging with the built-in lexicon only"),
            }
        }

        Self {
            segmenter: Segmenter::english(),
            tagger: Tagger::new(lexicon),
            stop_words: StopWords::english(),
        }
    }
}

static RESOURCES: OnceLock<LanguageResources> = OnceLock::new();

/// Process-wide resources, built from the environment on first use.
pub fn global() -> &'static LanguageResources {
    RESOURCES.get_or_init(|| LanguageResources::load(&ResourceConfig::from_env()))
}

/// Explicit startup initialisation. Only the first initialisation takes
/// effect; later calls get the existing resources back.
pub fn init(config: &ResourceConfig) -> &'static LanguageResources {
    let mut initialised_here = false;
    let resources = RESOURCES.get_or_init(|| {
        initialised_here = true;
        LanguageResources::load(config)
    });
    if !initialised_here {
        warn!("linguistic resources were already initialised, ignoring {config:?}");
    }
    resources
}
