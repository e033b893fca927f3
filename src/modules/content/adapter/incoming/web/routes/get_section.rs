use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    content::application::ports::incoming::use_cases::GetSectionError,
    content::domain::entities::SectionContent,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/content/sections/{label}",
    tag = "content",
    params(
        ("label" = String, Path, description = "Section label: home, about, blog, work or gallery")
    ),
    responses(
        (
            status = 200,
            description = "The section content, tagged with its kind",
            body = inline(SuccessResponse<SectionContent>)
        ),
        (
            status = 404,
            description = "Unknown section label",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "SECTION_NOT_FOUND",
                    "message": "Unknown section: projects"
                }
            })
        )
    )
)]
#[get("/api/content/sections/{label}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let label = path.into_inner();

    match data.content.get_section.execute(&label).await {
        Ok(section) => ApiResponse::success(section),
        Err(err) => map_get_section_error(err),
    }
}

fn map_get_section_error(err: GetSectionError) -> actix_web::HttpResponse {
    match &err {
        GetSectionError::NotFound(_) => {
            ApiResponse::not_found("SECTION_NOT_FOUND", &err.to_string())
        }
    }
}
