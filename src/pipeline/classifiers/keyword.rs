//! Footer detection confirmed by textual cues.

use crate::layout::{Band, TextSpan};
use crate::pipeline::config::{ClassifierConfig, FooterCueScope};

use super::{ClassifierContext, PercentageBoundary, RegionClassifier};

/// Substrings that mark text as footer material (matched on lowercase text).
pub const FOOTER_CUES: &[&str] = &[
    "page",
    "copyright",
    "©",
    "®",
    "www.",
    ".com",
    ".org",
    "all rights reserved",
    "confidential",
];

/// Check whether `text` looks like footer material.
///
/// True when the lowercase text contains a built-in or extra cue, or when the
/// trimmed text is shorter than `short_max_chars` and contains a digit (a
/// bare page number).
///
/// # Examples
///
/// ```
/// use column_oxide::pipeline::classifiers::looks_like_footer;
///
/// assert!(looks_like_footer("© 2024 Example Corp", &[], 50));
/// assert!(looks_like_footer("17", &[], 50));
/// assert!(!looks_like_footer("Body text that wandered low", &[], 50));
/// ```
pub fn looks_like_footer(text: &str, extra_cues: &[String], short_max_chars: usize) -> bool {
    let lower = text.to_lowercase();
    if FOOTER_CUES.iter().any(|cue| lower.contains(cue))
        || extra_cues.iter().any(|cue| lower.contains(&cue.to_lowercase()))
    {
        return true;
    }

    let trimmed = lower.trim();
    trimmed.chars().count() < short_max_chars && trimmed.chars().any(|c| c.is_ascii_digit())
}

/// Stricter band rule: footer candidates must look like footers.
///
/// Low-lying body text on sparse pages stays in the columns unless it carries
/// a copyright mark, URL, page label, or is a short numeric string.
#[derive(Debug, Clone)]
pub struct KeywordHeuristic {
    bands: PercentageBoundary,
    extra_cues: Vec<String>,
    scope: FooterCueScope,
    short_max_chars: usize,
}

impl KeywordHeuristic {
    /// Create from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            bands: PercentageBoundary::from_config(config),
            extra_cues: config.extra_footer_cues.clone(),
            scope: config.cue_scope,
            short_max_chars: config.short_footer_max_chars,
        }
    }

    fn is_footer(&self, text: &str) -> bool {
        looks_like_footer(text, &self.extra_cues, self.short_max_chars)
    }
}

impl RegionClassifier for KeywordHeuristic {
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>> {
        let mut bands: Vec<Option<Band>> = spans
            .iter()
            .map(|s| self.bands.band(s, context.page_height))
            .collect();

        match self.scope {
            FooterCueScope::PerSpan => {
                for (band, span) in bands.iter_mut().zip(spans) {
                    if *band == Some(Band::Footer) && !self.is_footer(&span.text) {
                        *band = None;
                    }
                }
            },
            FooterCueScope::PerPage => {
                let footer_text = spans
                    .iter()
                    .zip(&bands)
                    .filter(|(_, band)| **band == Some(Band::Footer))
                    .map(|(s, _)| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");

                if !footer_text.is_empty() && !self.is_footer(&footer_text) {
                    log::debug!("Footer candidates carry no footer cues, keeping them in columns");
                    for band in bands.iter_mut().filter(|b| **b == Some(Band::Footer)) {
                        *band = None;
                    }
                }
            },
        }

        bands
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
