use utoipa::OpenApi;
use utoipa::ToSchema;

// Documentation mirrors of the wire shapes; the real types live in `models` and `service`.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct CreateCustomerDoc { pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct UpdateCustomerDoc { pub first_name: Option<String>, pub last_name: Option<String> }

#[derive(ToSchema)]
pub struct CustomerPageDoc {
    pub content: Vec<CustomerDoc>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(ToSchema)]
pub struct ProductDoc { pub id: i32, pub name: String, pub price: f64, pub quantity: i32 }

#[derive(ToSchema)]
pub struct CreateProductDoc { pub name: String, pub price: f64, pub quantity: i32 }

#[derive(ToSchema)]
pub struct UpdateProductDoc { pub name: Option<String>, pub price: Option<f64>, pub quantity: Option<i32> }

#[derive(ToSchema)]
pub struct ProductPageDoc {
    pub content: Vec<ProductDoc>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::create,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CreateCustomerDoc,
            UpdateCustomerDoc,
            CustomerPageDoc,
            ProductDoc,
            CreateProductDoc,
            UpdateProductDoc,
            ProductPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "products")
    )
)]
pub struct ApiDoc;
