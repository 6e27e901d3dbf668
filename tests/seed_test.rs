use workshop::config::Config;
use workshop::domain::OrderStatus;
use workshop::infrastructure::AppState;
use workshop::{db, seed};

async fn seeded_state() -> AppState {
    let config = Config::from_lookup(Some("test".to_string()), |_| None);
    assert!(config.is_test_profile());

    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to init DB");
    seed::seed_test_data(&db).await.expect("Failed to seed");
    AppState::new(db)
}

#[tokio::test]
async fn test_seed_inserts_exactly_two_users() {
    let state = seeded_state().await;
    let users = state.users.find_all().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Jose");
    assert_eq!(users[0].email, "jose@gmail.com");
    assert_eq!(users[0].phone, "988888888");
    assert_eq!(users[1].name, "Cristovao");
    assert_eq!(users[1].email, "cristovao@gmail.com");
    assert_eq!(users[1].phone, "977777777");

    // Seed passwords are stored hashed
    assert!(users.iter().all(|u| u.password != "123456"));
}

#[tokio::test]
async fn test_seed_is_skipped_when_users_exist() {
    let state = seeded_state().await;
    seed::seed_test_data(state.db()).await.unwrap();

    assert_eq!(state.users.find_all().await.unwrap().len(), 2);
    assert_eq!(state.orders.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_seed_catalogue() {
    let state = seeded_state().await;

    let categories = state.categories.find_all().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Electronics", "Books", "Computers"]);

    let products = state.products.find_all().await.unwrap();
    assert_eq!(products.len(), 5);
    let tv = products.iter().find(|p| p.name == "Smart TV").unwrap();
    let tv_categories: Vec<&str> = tv.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(tv_categories, vec!["Electronics", "Computers"]);
}

#[tokio::test]
async fn test_seed_orders() {
    let state = seeded_state().await;
    let orders = state.orders.find_all().await.unwrap();

    assert_eq!(orders.len(), 3);
    assert_eq!(orders[0].order_status, OrderStatus::Paid);
    assert_eq!(orders[0].total, 2.0 * 90.5 + 1250.0);
    assert!(orders[0].payment.is_some());
    assert_eq!(orders[1].order_status, OrderStatus::WaitingPayment);
    assert_eq!(orders[1].total, 2500.0);
    assert!(orders[1].payment.is_none());
    assert_eq!(orders[2].items.len(), 1);
}
