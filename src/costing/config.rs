use serde::{Deserialize, Serialize};

use crate::costing::ingredient_cost::CostModel;
use crate::costing::rounding::RoundingPolicy;

/// Knobs of the costing engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rounding: RoundingPolicy,
    /// Cost model for ingredients attached directly to a technical sheet.
    pub direct_ingredient_model: CostModel,
}
