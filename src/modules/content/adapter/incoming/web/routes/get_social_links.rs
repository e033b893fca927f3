use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, content::domain::entities::SocialLink,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/content/social",
    tag = "content",
    responses(
        (
            status = 200,
            description = "Social links in display order",
            body = inline(SuccessResponse<Vec<SocialLink>>),
            example = json!({
                "success": true,
                "data": [
                    {
                        "name": "GitHub",
                        "icon": "github",
                        "link": "https://github.com/fairulmuhammad"
                    },
                    {
                        "name": "Email",
                        "icon": "email",
                        "link": "mailto:muhammadfairul13@gmail.com"
                    }
                ]
            })
        )
    )
)]
#[get("/api/content/social")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.get_social_links.execute().await)
}
