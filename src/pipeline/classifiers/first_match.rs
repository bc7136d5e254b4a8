//! Composition of classifiers.

use crate::layout::{Band, TextSpan};

use super::{ClassifierContext, RegionClassifier};

/// Each span takes the first band any member proposes.
pub struct FirstMatch {
    members: Vec<Box<dyn RegionClassifier>>,
}

impl FirstMatch {
    /// Chain classifiers in priority order.
    pub fn new(members: Vec<Box<dyn RegionClassifier>>) -> Self {
        Self { members }
    }
}

impl RegionClassifier for FirstMatch {
    fn band_of(&self, spans: &[TextSpan], context: &ClassifierContext) -> Vec<Option<Band>> {
        let mut bands = vec![None; spans.len()];

        for member in &self.members {
            let proposed = member.band_of(spans, context);
            for (band, candidate) in bands.iter_mut().zip(proposed) {
                if band.is_none() {
                    *band = candidate;
                }
            }
        }

        bands
    }

    fn name(&self) -> &'static str {
        "first-match"
    }

    fn describe(&self) -> String {
        self.members
            .iter()
            .map(|m| m.describe())
            .collect::<Vec<_>>()
            .join("+")
    }
}
