use crate::repository::{Plan as PlanEntity, PlanInterval};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub interval: PlanInterval,
    pub price: f64,
    pub currency: String,
    pub active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<PlanEntity> for Plan {
    fn from(value: PlanEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            interval: value.interval,
            price: value.price,
            currency: value.currency,
            active: value.active,
            created_at: value.created_at,
        }
    }
}
