//! Rule set holding the registered rules per extension point.

use std::sync::Arc;

use tracing::debug;

use super::{
    AddRule, AkaliVariantAddRule, AkaliVariantRule, EmblemAssignmentRule, EmblemRule,
    NinjaExactCountRule, RosterRule, TraitRule,
};
use crate::model::Champion;
use crate::team::Team;

/// Registered rules for the four extension points.
///
/// Rules run in registration order and their results combine by logical OR:
/// every rule is evaluated independently, and any one firing marks the pass
/// as applied for the caller.
pub struct RuleSet {
    add_rules: Vec<Arc<dyn AddRule>>,
    roster_rules: Vec<Arc<dyn RosterRule>>,
    trait_rules: Vec<Arc<dyn TraitRule>>,
    emblem_rules: Vec<Arc<dyn EmblemRule>>,
}

impl RuleSet {
    /// A rule set with no rules registered.
    pub fn empty() -> Self {
        Self {
            add_rules: Vec::new(),
            roster_rules: Vec::new(),
            trait_rules: Vec::new(),
            emblem_rules: Vec::new(),
        }
    }

    /// The shipped rules for all supported set versions.
    pub fn default_rules() -> Self {
        let mut rules = Self::empty();
        rules.register_add_rule(Arc::new(AkaliVariantAddRule));
        rules.register_roster_rule(Arc::new(AkaliVariantRule));
        rules.register_trait_rule(Arc::new(NinjaExactCountRule));
        rules.register_emblem_rule(Arc::new(EmblemAssignmentRule));
        rules
    }

    pub fn register_add_rule(&mut self, rule: Arc<dyn AddRule>) {
        self.add_rules.push(rule);
    }

    pub fn register_roster_rule(&mut self, rule: Arc<dyn RosterRule>) {
        self.roster_rules.push(rule);
    }

    pub fn register_trait_rule(&mut self, rule: Arc<dyn TraitRule>) {
        self.trait_rules.push(rule);
    }

    pub fn register_emblem_rule(&mut self, rule: Arc<dyn EmblemRule>) {
        self.emblem_rules.push(rule);
    }

    /// Runs every add rule; true when any vetoes `candidate`.
    pub fn run_add_rules(&self, team: &Team, candidate: &Champion) -> bool {
        let mut vetoed = false;
        for rule in &self.add_rules {
            if rule.veto(team, candidate) {
                debug!(
                    target: "tft_core::rules",
                    rule = rule.name(),
                    champion = %candidate.name,
                    "add vetoed"
                );
                vetoed = true;
            }
        }
        vetoed
    }

    /// Runs every roster rule; true when any changed the roster.
    pub fn run_roster_rules(&self, team: &mut Team) -> bool {
        let mut applied = false;
        for rule in &self.roster_rules {
            if rule.apply(team) {
                debug!(target: "tft_core::rules", rule = rule.name(), "roster rule applied");
                applied = true;
            }
        }
        applied
    }

    /// Runs every trait rule; true when any adjusted the snapshot.
    pub fn run_trait_rules(&self, team: &mut Team) -> bool {
        let mut applied = false;
        for rule in &self.trait_rules {
            if rule.apply(team) {
                debug!(target: "tft_core::rules", rule = rule.name(), "trait rule applied");
                applied = true;
            }
        }
        applied
    }

    /// Runs every emblem rule; true when any changed emblem eligibility.
    pub fn run_emblem_rules(&self, team: &mut Team) -> bool {
        let mut applied = false;
        for rule in &self.emblem_rules {
            if rule.apply(team) {
                debug!(target: "tft_core::rules", rule = rule.name(), "emblem rule applied");
                applied = true;
            }
        }
        applied
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules()
    }
}
