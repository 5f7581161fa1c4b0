//! OpenAPI Documentation
//!
//! Generated API documentation, served by Swagger UI at `/api/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Liturgy Reader API",
        description = "API đọc bài đọc theo ngày dựa vào lịch phụng vụ & Kinh Thánh",
        version = "1.0"
    ),
    paths(
        crate::infrastructure::driving_adapters::api_rest::handlers::bible::create_bible,
        crate::infrastructure::driving_adapters::api_rest::handlers::bible::find_all_bible,
        crate::infrastructure::driving_adapters::api_rest::handlers::bible::find_one_bible,
        crate::infrastructure::driving_adapters::api_rest::handlers::bible::update_bible,
        crate::infrastructure::driving_adapters::api_rest::handlers::bible::remove_bible,
        crate::infrastructure::driving_adapters::api_rest::handlers::liturgical::create_liturgical,
        crate::infrastructure::driving_adapters::api_rest::handlers::liturgical::find_all_liturgical,
        crate::infrastructure::driving_adapters::api_rest::handlers::liturgical::find_one_liturgical,
        crate::infrastructure::driving_adapters::api_rest::handlers::liturgical::update_liturgical,
        crate::infrastructure::driving_adapters::api_rest::handlers::liturgical::remove_liturgical,
    ),
    components(schemas(
        crate::infrastructure::driving_adapters::api_rest::dto::bible::CreateBibleDto,
        crate::infrastructure::driving_adapters::api_rest::dto::bible::UpdateBibleDto,
        crate::infrastructure::driving_adapters::api_rest::dto::liturgical::CreateLiturgicalDto,
        crate::infrastructure::driving_adapters::api_rest::dto::liturgical::UpdateLiturgicalDto,
    )),
    tags(
        (name = "bible", description = "Bible passage endpoints"),
        (name = "liturgical", description = "Liturgical calendar endpoints"),
    )
)]
pub struct ApiDoc;
