use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderRule {
    Asc,
    Desc,
}

impl OrderRule {
    pub fn flipped(self) -> Self {
        match self {
            OrderRule::Asc => OrderRule::Desc,
            OrderRule::Desc => OrderRule::Asc,
        }
    }
}
