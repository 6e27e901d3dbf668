//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainError, NewUser, User, UserRepository, UserUpdate};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity, Model};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            password: m.password,
        }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(user.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let model = ActiveModel {
            name: Set(user.name),
            email: Set(user.email),
            phone: Set(user.phone),
            password: Set(user.password),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(User::from(result))
    }

    async fn update(&self, id: i64, changes: UserUpdate) -> Result<User, DomainError> {
        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found(id))?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(changes.name);
        active.email = Set(changes.email);
        active.phone = Set(changes.phone);

        let result = active.update(&self.db).await?;
        Ok(User::from(result))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(id));
        }

        Ok(())
    }
}
