use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder, Set};

use crate::models::student;

/// One attendance mark for a (student, event) pair.
///
/// The composite primary key doubles as the uniqueness constraint: the
/// store, not the scanner, is what guarantees at most one record per pair.
/// Records are never mutated; deletion is an administrative action.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: i64,

    pub recorded_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Conditional insert of an attendance mark.
    ///
    /// No pre-check here: a pair that already exists comes back as a
    /// unique-constraint `DbErr`, which callers map to a duplicate. That
    /// keeps the guarantee at the store even when two hosts scan the same
    /// code concurrently.
    pub async fn mark<C>(
        db: &C,
        student_id: &str,
        event_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = ActiveModel {
            student_id: Set(student_id.to_owned()),
            event_id: Set(event_id),
            recorded_at: Set(now),
        };
        model.insert(db).await
    }

    pub async fn exists<C>(db: &C, student_id: &str, event_id: i64) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let found = Entity::find_by_id((student_id.to_owned(), event_id))
            .one(db)
            .await?;
        Ok(found.is_some())
    }

    /// All records for an event joined with their students, sorted
    /// lastname → course → year_section for the attendance report.
    pub async fn for_event<C>(
        db: &C,
        event_id: i64,
    ) -> Result<Vec<(Self, Option<student::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .find_also_related(student::Entity)
            .order_by_asc(student::Column::Lastname)
            .order_by_asc(student::Column::Course)
            .order_by_asc(student::Column::YearSection)
            .all(db)
            .await
    }
}
