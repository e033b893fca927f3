use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, content::domain::entities::Newsletter,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/content/newsletter",
    tag = "content",
    responses(
        (
            status = 200,
            description = "The newsletter record, including its display flag",
            body = inline(SuccessResponse<Newsletter>),
            example = json!({
                "success": true,
                "data": {
                    "display": false,
                    "title": [
                        { "kind": "text", "text": "Subscribe to fairul's Learning Updates" }
                    ],
                    "description": [
                        { "kind": "text", "text": "Follow my journey as I learn new technologies." }
                    ]
                }
            })
        )
    )
)]
#[get("/api/content/newsletter")]
pub async fn get_newsletter_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.get_newsletter.execute().await)
}
