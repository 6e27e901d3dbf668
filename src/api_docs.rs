use crate::api;
use crate::domain;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::user::list_users,
        api::user::get_user,
        api::user::create_user,
        api::user::update_user,
        api::user::delete_user,
        api::product::list_products,
        api::product::get_product,
        api::category::list_categories,
        api::category::get_category,
        api::order::list_orders,
        api::order::get_order,
    ),
    components(
        schemas(
            domain::User,
            domain::NewUser,
            domain::UserUpdate,
            domain::Product,
            domain::Category,
            domain::Order,
            domain::OrderItem,
            domain::OrderStatus,
            domain::Payment,
            api::StandardError,
        )
    ),
    tags(
        (name = "workshop", description = "Workshop store API")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/users", "/api/users/{id}", "/api/products", "/api/orders/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_error_responses_reference_standard_error() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let not_found = &json["paths"]["/api/users/{id}"]["get"]["responses"]["404"];
        assert_eq!(
            not_found["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/StandardError"
        );
        assert!(json["components"]["schemas"]["StandardError"].is_object());
    }
}
