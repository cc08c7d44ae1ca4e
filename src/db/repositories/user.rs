use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::domain::{Role, UserId};
use crate::entities::{prelude::*, users};
use crate::models::now_timestamp;
use crate::models::user::{LoginIdentity, User};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId::new(model.id),
            open_id: model.open_id,
            name: model.name,
            email: model.email,
            login_method: model.login_method,
            role: model.role.parse().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
            last_signed_in: model.last_signed_in,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        let user = Users::find_by_id(id.value())
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    /// Records a login. New identities are inserted; known ones get their
    /// sign-in time bumped and any profile fields the provider sent refreshed.
    /// `owner_open_id` is always promoted to admin; nobody is ever demoted here.
    pub async fn upsert_login(
        &self,
        identity: &LoginIdentity,
        owner_open_id: Option<&str>,
    ) -> Result<User> {
        let now = now_timestamp();
        let is_owner = owner_open_id.is_some_and(|owner| owner == identity.open_id);

        let existing = Users::find()
            .filter(users::Column::OpenId.eq(identity.open_id.as_str()))
            .one(&self.conn)
            .await
            .context("Failed to query user by open id")?;

        let model = if let Some(existing) = existing {
            let mut active: users::ActiveModel = existing.into();
            if let Some(name) = &identity.name {
                active.name = Set(Some(name.clone()));
            }
            if let Some(email) = &identity.email {
                active.email = Set(Some(email.clone()));
            }
            if let Some(method) = &identity.login_method {
                active.login_method = Set(Some(method.clone()));
            }
            if is_owner {
                active.role = Set(Role::Admin.as_str().to_string());
            }
            active.last_signed_in = Set(now.clone());
            active.updated_at = Set(now);
            active
                .update(&self.conn)
                .await
                .context("Failed to update user")?
        } else {
            let role = if is_owner { Role::Admin } else { Role::User };
            let active = users::ActiveModel {
                open_id: Set(identity.open_id.clone()),
                name: Set(identity.name.clone()),
                email: Set(identity.email.clone()),
                login_method: Set(identity.login_method.clone()),
                role: Set(role.as_str().to_string()),
                created_at: Set(now.clone()),
                updated_at: Set(now.clone()),
                last_signed_in: Set(now),
                ..Default::default()
            };
            active.insert(&self.conn).await.context("Failed to insert user")?
        };

        Ok(User::from(model))
    }
}
