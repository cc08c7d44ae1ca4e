use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Identity issued by the OAuth provider.
    #[sea_orm(unique)]
    pub open_id: String,

    pub name: Option<String>,

    pub email: Option<String>,

    pub login_method: Option<String>,

    /// `user` or `admin`
    pub role: String,

    pub created_at: String,

    pub updated_at: String,

    pub last_signed_in: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scl_assessments::Entity")]
    Assessments,
}

impl Related<super::scl_assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
