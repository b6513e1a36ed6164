use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::sentiment::SentimentScorer;
use crate::stopwords::StopwordFilter;
use crate::tagger::PosTagger;

/// English language resources. Load once at startup; every document borrows them.
#[derive(Debug)]
pub struct Resources {
    pub stopwords: StopwordFilter,
    pub tagger: PosTagger,
    pub sentiment: SentimentScorer,
}

impl Resources {
    /// Parse the embedded stop-word list and lexicons, then add any user stop words.
    /// Any failure here is a setup error and no document should be processed.
    pub fn load(extra_stopwords: Option<&Path>) -> Result<Self> {
        let mut stopwords = StopwordFilter::english()?;
        if let Some(path) = extra_stopwords {
            let added = stopwords.extend_from_file(path)?;
            debug!("added {added} stop words from {}", path.display());
        }
        let resources = Self {
            stopwords,
            tagger: PosTagger::english()?,
            sentiment: SentimentScorer::english()?,
        };
        debug!("loaded {} stop words", resources.stopwords.len());
        Ok(resources)
    }
}
