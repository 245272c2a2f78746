use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// One intake row. Written exactly once by this service; status transitions
/// after `NEW` belong to the external worker.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "adhoc_llm_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub request_id: Uuid,
    pub created_ts: OffsetDateTime,
    pub created_by: String,
    pub status: String,
    pub priority: i32,
    pub start_ts: OffsetDateTime,
    /// Exclusive upper bound of the interaction window.
    pub end_ts: OffsetDateTime,
    /// JSON array of jobnames.
    pub jobnames: String,
    pub max_rows: i32,
    pub model_type: String,
    pub prompt_name: String,
    pub user_prompt: String,
    pub notes: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
