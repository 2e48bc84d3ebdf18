use crate::domain::{Classification, Tier};
use crate::locale::DisplayLocale;

/// Marker substrings that place a result in one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRule {
    pub tier: Tier,
    pub markers: Vec<String>,
}

/// Ordered rule table for classifying free-text placements.
///
/// Rules are checked gold, silver, bronze; the first rule with a marker
/// contained in the result text wins. Anything else is a finisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRules {
    rules: Vec<TierRule>,
}

impl TierRules {
    /// An empty table: everything classifies as `Finisher`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn for_locale(locale: DisplayLocale) -> Self {
        let mut rules = Self::empty();
        for (tier, markers) in locale.default_markers() {
            rules.add_markers(*tier, markers.iter().map(|m| m.to_string()));
        }
        rules
    }

    /// Add markers for a tier, keeping rules in priority order.
    /// Empty markers are dropped since they would match every result.
    pub fn add_markers<I>(&mut self, tier: Tier, markers: I)
    where
        I: IntoIterator<Item = String>,
    {
        let markers: Vec<String> = markers.into_iter().filter(|m| !m.is_empty()).collect();
        if markers.is_empty() || tier == Tier::Finisher {
            return;
        }

        match self.rules.iter_mut().find(|r| r.tier == tier) {
            Some(rule) => {
                for marker in markers {
                    if !rule.markers.contains(&marker) {
                        rule.markers.push(marker);
                    }
                }
            }
            None => {
                self.rules.push(TierRule { tier, markers });
                self.rules.sort_by_key(|r| priority(r.tier));
            }
        }
    }

    /// Replace all markers of a tier.
    pub fn set_markers<I>(&mut self, tier: Tier, markers: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.rules.retain(|r| r.tier != tier);
        self.add_markers(tier, markers);
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    pub fn classify(&self, result: &str) -> Tier {
        self.rules
            .iter()
            .find(|rule| rule.markers.iter().any(|m| result.contains(m.as_str())))
            .map(|rule| rule.tier)
            .unwrap_or(Tier::Finisher)
    }

    pub fn classification(&self, result: &str) -> Classification {
        Classification::from(self.classify(result))
    }
}

impl Default for TierRules {
    fn default() -> Self {
        Self::for_locale(DisplayLocale::default())
    }
}

fn priority(tier: Tier) -> usize {
    Tier::ALL.iter().position(|t| *t == tier).unwrap_or(Tier::ALL.len())
}
