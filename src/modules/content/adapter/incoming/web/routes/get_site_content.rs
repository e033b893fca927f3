use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, content::domain::entities::SiteContent,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (
            status = 200,
            description = "The full set of content records",
            body = inline(SuccessResponse<SiteContent>)
        )
    )
)]
#[get("/api/content")]
pub async fn get_site_content_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.get_site.execute().await)
}
