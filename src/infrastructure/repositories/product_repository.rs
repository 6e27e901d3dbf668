//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait, QueryOrder};

use crate::domain::{Category, DomainError, Product, ProductRepository};
use crate::models::category::{self, Entity as CategoryEntity};
use crate::models::product::{Column, Entity as ProductEntity, Model};

/// SeaORM-based implementation of ProductRepository
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Build the domain product, loading its categories through the join table
    async fn load_product(&self, model: Model) -> Result<Product, DomainError> {
        let categories = model
            .find_related(CategoryEntity)
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Product {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            img_url: model.img_url,
            categories: categories.into_iter().map(Category::from).collect(),
        })
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let models = ProductEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        let mut products = Vec::with_capacity(models.len());
        for model in models {
            products.push(self.load_product(model).await?);
        }
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        match ProductEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(self.load_product(model).await?)),
            None => Ok(None),
        }
    }
}
