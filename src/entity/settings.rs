use crate::entity::CurrencyCode;
use serde::{Deserialize, Serialize};

/// User-facing display preferences, passed explicitly to the presenter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub currency: CurrencyCode,
    /// Only affects feedback on change, never the numbers shown
    pub haptics_enabled: bool,
}
