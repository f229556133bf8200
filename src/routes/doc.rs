use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        design::{CatalogByType, DesignRequest},
        orders::{CheckoutRequest, CurrentOrder, OrderList},
        tacos::{IngredientSummary, Link, RecentTacos, TacoSummary},
    },
    error::FieldError,
    models::{DraftOrder, Ingredient, IngredientType, Order, Taco, User},
    response::{ApiResponse, Meta},
    routes::{auth, design, health, orders, tacos},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        auth::register,
        design::show_design,
        design::process_design,
        orders::list_orders,
        orders::current_order,
        orders::process_order,
        tacos::recent_tacos
    ),
    components(
        schemas(
            Ingredient,
            IngredientType,
            Taco,
            Order,
            DraftOrder,
            User,
            FieldError,
            CatalogByType,
            DesignRequest,
            CheckoutRequest,
            CurrentOrder,
            OrderList,
            TacoSummary,
            IngredientSummary,
            RecentTacos,
            Link,
            Meta,
            ApiResponse<Taco>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<CatalogByType>,
            ApiResponse<RecentTacos>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Design", description = "Taco design endpoints"),
        (name = "Orders", description = "Order workflow endpoints"),
        (name = "Tacos", description = "Public recent-tacos feed"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
