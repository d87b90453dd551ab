use std::fmt;

use tracing::warn;

/// The entity categories a status payload may omit when the response was
/// requested without entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Hashtags,
    Urls,
    UserMentions,
    Media,
}

impl Feature {
    fn label(self) -> &'static str {
        match self {
            Feature::Hashtags => "hashtags",
            Feature::Urls => "urls",
            Feature::UserMentions => "user mentions",
            Feature::Media => "media",
        }
    }
}

/// Advisory is a non-fatal diagnostic: an entity accessor was called on a
/// status whose payload carries no `entities` mapping at all, which usually
/// means the response was requested without the entities option.
///
/// Entity accessors return the advisory alongside their value instead of
/// writing to a stream; call [`emit`](Advisory::emit) to route it to the log
/// sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    feature: Feature,
}

impl Advisory {
    pub(crate) fn missing_entities(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// Writes the advisory to the diagnostic sink.
    pub fn emit(&self) {
        warn!("{}", self);
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "To get {}, you must pass the include_entities option when requesting the status.",
            self.feature.label()
        )
    }
}
