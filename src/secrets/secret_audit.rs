use serde::Serialize;
use time::OffsetDateTime;

/// Bookkeeping the server attaches to persisted secrets.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretAudit {
    pub id: i64,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    pub created_by: String,
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
    pub updated_by: String,
}
