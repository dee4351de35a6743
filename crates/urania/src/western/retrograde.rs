//! Retrograde classification.
//!
//! Sun and Moon are never retrograde. Planets and Chiron are retrograde while
//! their longitude decreases. The lunar nodes follow a [`NodeRetrogradePolicy`].

use serde::{Deserialize, Serialize};

use crate::ephemeris::BodyId;

/// How the lunar nodes are flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRetrogradePolicy {
    /// Retrograde while the node's daily motion is negative. The mean node
    /// always is; the true node is most of the time.
    #[default]
    FromMotion,
    /// Always retrograde, whatever the provider reports.
    Always,
    /// Never retrograde.
    Never,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetrogradeClassifier {
    pub node_policy: NodeRetrogradePolicy,
}

impl RetrogradeClassifier {
    pub fn new(node_policy: NodeRetrogradePolicy) -> Self {
        Self { node_policy }
    }

    /// Retrograde flag for `body` moving `daily_motion` degrees per day.
    pub fn classify(&self, body: BodyId, daily_motion: f64) -> bool {
        if body.is_luminary() {
            return false;
        }
        if body.is_node() {
            return match self.node_policy {
                NodeRetrogradePolicy::FromMotion => daily_motion < 0.0,
                NodeRetrogradePolicy::Always => true,
                NodeRetrogradePolicy::Never => false,
            };
        }
        daily_motion < 0.0
    }

    /// Like [`classify`](Self::classify), for readings whose motion may be
    /// unknown. Unknown motion is direct except under a fixed node policy.
    pub fn classify_reading(&self, body: BodyId, daily_motion: Option<f64>) -> bool {
        match daily_motion {
            Some(motion) if motion.is_finite() => self.classify(body, motion),
            _ => body.is_node() && self.node_policy == NodeRetrogradePolicy::Always,
        }
    }
}
