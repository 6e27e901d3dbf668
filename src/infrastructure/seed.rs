//! Fixture data for the `test` profile

use std::sync::Arc;

use sea_orm::*;

use crate::domain::{DomainError, NewUser, OrderItem, OrderItemRepository, OrderStatus};
use crate::infrastructure::{SeaOrmOrderItemRepository, SeaOrmUserRepository};
use crate::models::{category, order, payment, product, product_category, user};
use crate::services::UserService;

const PRODUCTS: [(&str, &str, f64); 5] = [
    (
        "The Lord of the Rings",
        "Lorem ipsum dolor sit amet, consectetur.",
        90.5,
    ),
    ("Smart TV", "Nulla eu imperdiet purus. Maecenas ante.", 2190.0),
    ("Macbook Pro", "Nam eleifend maximus tortor, at mollis.", 1250.0),
    ("PC Gamer", "Donec aliquet odio ac rhoncus cursus.", 1200.0),
    (
        "Rails for Dummies",
        "Cras fringilla convallis sem vel faucibus.",
        100.99,
    ),
];

/// Insert the fixture users, catalogue and orders.
/// Does nothing when the users table already holds rows.
pub async fn seed_test_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    if user::Entity::find().count(db).await? > 0 {
        tracing::info!("Users already present, skipping seed data");
        return Ok(());
    }

    // 1. Users
    let users = UserService::new(Arc::new(SeaOrmUserRepository::new(db.clone())));
    let u1 = users
        .insert(NewUser::new("Jose", "jose@gmail.com", "988888888", "123456"))
        .await?;
    let u2 = users
        .insert(NewUser::new(
            "Cristovao",
            "cristovao@gmail.com",
            "977777777",
            "123456",
        ))
        .await?;

    // 2. Categories
    let mut category_ids = Vec::new();
    for name in ["Electronics", "Books", "Computers"] {
        let model = category::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        category_ids.push(model.id);
    }
    let [electronics, books, computers] = category_ids[..] else {
        return Err(DomainError::Internal("category seed incomplete".to_string()));
    };

    // 3. Products
    let mut products = Vec::new();
    for (name, description, price) in PRODUCTS {
        let model = product::ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            price: Set(price),
            img_url: Set(String::new()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        products.push(model);
    }
    let [p1, p2, p3, p4, p5] = &products[..] else {
        return Err(DomainError::Internal("product seed incomplete".to_string()));
    };

    let links = [
        (p1.id, books),
        (p2.id, electronics),
        (p2.id, computers),
        (p3.id, computers),
        (p4.id, computers),
        (p5.id, books),
    ];
    for (product_id, category_id) in links {
        product_category::Entity::insert(product_category::ActiveModel {
            product_id: Set(product_id),
            category_id: Set(category_id),
        })
        .exec(db)
        .await?;
    }

    // 4. Orders
    let orders = [
        ("2019-06-20T19:53:07Z", OrderStatus::Paid, u1.id),
        ("2019-07-21T03:42:10Z", OrderStatus::WaitingPayment, u2.id),
        ("2019-07-22T15:21:22Z", OrderStatus::WaitingPayment, u1.id),
    ];
    let mut order_ids = Vec::new();
    for (moment, status, client_id) in orders {
        let model = order::ActiveModel {
            moment: Set(moment.to_owned()),
            order_status: Set(status.code()),
            client_id: Set(client_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
        order_ids.push(model.id);
    }
    let [o1, o2, o3] = order_ids[..] else {
        return Err(DomainError::Internal("order seed incomplete".to_string()));
    };

    // 5. Order items, priced at the product's current price
    let items = SeaOrmOrderItemRepository::new(db.clone());
    for (order_id, product, quantity) in [(o1, p1, 2), (o1, p3, 1), (o2, p3, 2), (o3, p5, 2)] {
        items
            .save(OrderItem::new(order_id, product.id, quantity, product.price))
            .await?;
    }

    // 6. Payment of the paid order
    payment::Entity::insert(payment::ActiveModel {
        id: Set(o1),
        moment: Set("2019-06-20T21:53:07Z".to_owned()),
    })
    .exec(db)
    .await?;

    tracing::info!(
        users = 2,
        products = products.len(),
        orders = order_ids.len(),
        "Seed data inserted"
    );
    Ok(())
}
