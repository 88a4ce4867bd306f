use crate::repository::AcademyModule as AcademyModuleEntity;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademyModule {
    pub id: Uuid,
    pub title: String,
    pub teacher: String,
    pub category: String,
    pub lessons: u32,
    pub published: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<AcademyModuleEntity> for AcademyModule {
    fn from(value: AcademyModuleEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            teacher: value.teacher,
            category: value.category,
            lessons: value.lessons,
            published: value.published,
            created_at: value.created_at,
        }
    }
}
