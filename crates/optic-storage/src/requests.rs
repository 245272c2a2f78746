use sea_orm::{
    ActiveValue, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    Schema,
};
use time::OffsetDateTime;
use uuid::Uuid;

use optic_common::{NewRequest, RequestStatus};

use crate::entities;

/// Handle to the intake table. Cloning is cheap; all clones share the same
/// underlying connection pool. The service connects to one DSN at startup
/// and keeps that pool for its lifetime; each insert checks a connection
/// out right before use and the pool takes it back on every exit path.
#[derive(Clone)]
pub struct RequestStorage {
    db: DatabaseConnection,
}

impl RequestStorage {
    pub async fn connect(dsn: &str) -> Result<Self, DbErr> {
        let db = Database::connect(dsn).await?;
        Ok(Self { db })
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Registers the intake entity and synchronizes the table schema.
    /// Idempotent; run once at startup.
    pub async fn sync(&self) -> Result<(), DbErr> {
        Schema::new(self.db.get_database_backend())
            .builder()
            .register(entities::Requests)
            .sync(&self.db)
            .await
    }

    pub async fn health(&self) -> Result<(), DbErr> {
        entities::Requests::find()
            .order_by_desc(entities::requests::Column::CreatedTs)
            .one(&self.db)
            .await?;
        Ok(())
    }

    /// Persists one validated request with a single parameterized insert.
    ///
    /// Generates the request id, stamps the current UTC time and fixes the
    /// status to `NEW`. Either the row commits or nothing does; failures
    /// surface as one `DbErr` with no retry.
    pub async fn insert_request(&self, request: NewRequest) -> Result<Uuid, DbErr> {
        let request_id = Uuid::new_v4();
        let active = entities::requests::ActiveModel {
            request_id: ActiveValue::Set(request_id),
            created_ts: ActiveValue::Set(OffsetDateTime::now_utc()),
            created_by: ActiveValue::Set(request.created_by),
            status: ActiveValue::Set(RequestStatus::New.as_str().to_string()),
            priority: ActiveValue::Set(request.priority),
            start_ts: ActiveValue::Set(request.start_ts),
            end_ts: ActiveValue::Set(request.end_ts),
            jobnames: ActiveValue::Set(
                serde_json::to_string(&request.jobnames)
                    .expect("jobname list always serializes"),
            ),
            max_rows: ActiveValue::Set(request.max_rows),
            model_type: ActiveValue::Set(request.model_type.as_str().to_string()),
            prompt_name: ActiveValue::Set(request.prompt_name),
            user_prompt: ActiveValue::Set(request.user_prompt),
            notes: ActiveValue::Set(request.notes),
        };
        entities::Requests::insert(active).exec(&self.db).await?;
        Ok(request_id)
    }

    pub async fn find_request(
        &self,
        request_id: Uuid,
    ) -> Result<Option<entities::requests::Model>, DbErr> {
        entities::Requests::find_by_id(request_id).one(&self.db).await
    }

    pub async fn count_requests(&self) -> Result<u64, DbErr> {
        entities::Requests::find().count(&self.db).await
    }
}
