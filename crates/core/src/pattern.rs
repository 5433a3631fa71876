//! Suspicious pattern categories detected by monitoring

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Category of a detected suspicious pattern
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatternCategory {
    /// Multiple transactions just under a reporting threshold
    Structuring,
    /// Abnormal burst of activity relative to the party's baseline
    VelocitySpike,
    /// Exposure to high-risk jurisdictions or unusual country spread
    GeographicAnomaly,
    /// Dominance of round amounts across the window
    RoundAmount,
    /// Single transaction above the large-amount threshold
    LargeAmount,
    /// Daily aggregate above the reporting threshold
    ThresholdBreach,
    /// Reactivation of a dormant relationship
    Dormancy,
    /// Funds moving through intermediate accounts rapidly
    Layering,
    /// Suspicious counterparty relationship
    Counterparty,
}
