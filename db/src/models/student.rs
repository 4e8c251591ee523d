use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ConnectionTrait, QuerySelect, QueryTrait, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::models::attendance_record;

/// Represents a registered student in the `students` table.
///
/// Students are created on first registration and immutable afterwards in
/// the scanning flow. The `id` is a server-assigned UUID carried verbatim
/// inside the student's QR payload.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub lastname: String,
    pub firstname: String,
    pub course: Course,
    pub year_section: YearSection,
    pub created_at: DateTime<Utc>,
}

/// Closed set of known course codes.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Course {
    #[sea_orm(string_value = "BSCE")]
    Bsce,
    #[sea_orm(string_value = "BSSE")]
    Bsse,
    #[sea_orm(string_value = "BSCS")]
    Bscs,
    #[sea_orm(string_value = "BSIT")]
    Bsit,
    #[sea_orm(string_value = "BAT")]
    Bat,
    #[sea_orm(string_value = "RAC")]
    Rac,
    #[sea_orm(string_value = "EET")]
    Eet,
    #[sea_orm(string_value = "BET-MET-AUTO")]
    #[strum(serialize = "BET-MET-AUTO")]
    #[serde(rename = "BET-MET-AUTO")]
    BetMetAuto,
    #[sea_orm(string_value = "BSMATH")]
    Bsmath,
}

/// Closed set of year/section labels, "1A" through "4E".
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(ascii_case_insensitive)]
pub enum YearSection {
    #[sea_orm(string_value = "1A")]
    #[strum(serialize = "1A")]
    #[serde(rename = "1A")]
    Y1A,
    #[sea_orm(string_value = "1B")]
    #[strum(serialize = "1B")]
    #[serde(rename = "1B")]
    Y1B,
    #[sea_orm(string_value = "1C")]
    #[strum(serialize = "1C")]
    #[serde(rename = "1C")]
    Y1C,
    #[sea_orm(string_value = "1D")]
    #[strum(serialize = "1D")]
    #[serde(rename = "1D")]
    Y1D,
    #[sea_orm(string_value = "1E")]
    #[strum(serialize = "1E")]
    #[serde(rename = "1E")]
    Y1E,
    #[sea_orm(string_value = "2A")]
    #[strum(serialize = "2A")]
    #[serde(rename = "2A")]
    Y2A,
    #[sea_orm(string_value = "2B")]
    #[strum(serialize = "2B")]
    #[serde(rename = "2B")]
    Y2B,
    #[sea_orm(string_value = "2C")]
    #[strum(serialize = "2C")]
    #[serde(rename = "2C")]
    Y2C,
    #[sea_orm(string_value = "2D")]
    #[strum(serialize = "2D")]
    #[serde(rename = "2D")]
    Y2D,
    #[sea_orm(string_value = "2E")]
    #[strum(serialize = "2E")]
    #[serde(rename = "2E")]
    Y2E,
    #[sea_orm(string_value = "3A")]
    #[strum(serialize = "3A")]
    #[serde(rename = "3A")]
    Y3A,
    #[sea_orm(string_value = "3B")]
    #[strum(serialize = "3B")]
    #[serde(rename = "3B")]
    Y3B,
    #[sea_orm(string_value = "3C")]
    #[strum(serialize = "3C")]
    #[serde(rename = "3C")]
    Y3C,
    #[sea_orm(string_value = "3D")]
    #[strum(serialize = "3D")]
    #[serde(rename = "3D")]
    Y3D,
    #[sea_orm(string_value = "3E")]
    #[strum(serialize = "3E")]
    #[serde(rename = "3E")]
    Y3E,
    #[sea_orm(string_value = "4A")]
    #[strum(serialize = "4A")]
    #[serde(rename = "4A")]
    Y4A,
    #[sea_orm(string_value = "4B")]
    #[strum(serialize = "4B")]
    #[serde(rename = "4B")]
    Y4B,
    #[sea_orm(string_value = "4C")]
    #[strum(serialize = "4C")]
    #[serde(rename = "4C")]
    Y4C,
    #[sea_orm(string_value = "4D")]
    #[strum(serialize = "4D")]
    #[serde(rename = "4D")]
    Y4D,
    #[sea_orm(string_value = "4E")]
    #[strum(serialize = "4E")]
    #[serde(rename = "4E")]
    Y4E,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_record::Entity")]
    AttendanceRecords,
}

impl Related<super::attendance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The identity fields encoded into this student's QR payload.
    pub fn to_identity(&self) -> scan::StudentIdentity {
        scan::StudentIdentity {
            id: self.id.clone(),
            lastname: self.lastname.clone(),
            firstname: self.firstname.clone(),
            course: self.course.to_string(),
            year_section: self.year_section.to_string(),
        }
    }

    pub async fn create<C>(
        db: &C,
        lastname: &str,
        firstname: &str,
        course: Course,
        year_section: YearSection,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            lastname: Set(lastname.trim().to_owned()),
            firstname: Set(firstname.trim().to_owned()),
            course: Set(course),
            year_section: Set(year_section),
            created_at: Set(Utc::now()),
        };
        model.insert(db).await
    }

    pub async fn find_by_id<C>(db: &C, id: &str) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// Register-or-login: returns the existing student matching this identity,
    /// or creates a new one.
    ///
    /// Matching is case-insensitive on lastname+firstname (after trimming)
    /// and exact on course+year_section. "DELA CRUZ"/"ana" in BSIT 2B is the
    /// same student as "Dela Cruz"/"Ana" in BSIT 2B, but 2C is somebody else.
    pub async fn upsert_by_identity<C>(
        db: &C,
        lastname: &str,
        firstname: &str,
        course: Course,
        year_section: YearSection,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let lastname = lastname.trim();
        let firstname = firstname.trim();

        let existing = Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::Lastname)))
                    .eq(lastname.to_lowercase()),
            )
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::Firstname)))
                    .eq(firstname.to_lowercase()),
            )
            .filter(Column::Course.eq(course.clone()))
            .filter(Column::YearSection.eq(year_section.clone()))
            .one(db)
            .await?;

        if let Some(found) = existing {
            return Ok(found);
        }

        Self::create(db, lastname, firstname, course, year_section).await
    }

    /// Administrative cleanup: deletes every student with zero attendance
    /// records across all events. Students with any historical attendance
    /// are retained. Returns the number of rows removed.
    pub async fn purge_never_attended<C>(db: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let attended_ids = attendance_record::Entity::find()
            .select_only()
            .column(attendance_record::Column::StudentId)
            .into_query();

        let res = Entity::delete_many()
            .filter(Expr::col((Entity, Column::Id)).not_in_subquery(attended_ids))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
