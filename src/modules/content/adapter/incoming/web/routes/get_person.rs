use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, content::domain::entities::Person, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/content/person",
    tag = "content",
    responses(
        (
            status = 200,
            description = "The profile record",
            body = inline(SuccessResponse<Person>),
            example = json!({
                "success": true,
                "data": {
                    "firstName": "fairul",
                    "lastName": "muhammad",
                    "name": "fairul muhammad",
                    "role": "Computer Science Student",
                    "avatar": "/images/avatar.jpg",
                    "email": "muhammadfairul13@gmail.com",
                    "location": "Asia/Jakarta",
                    "languages": ["Indonesian", "English"]
                }
            })
        )
    )
)]
#[get("/api/content/person")]
pub async fn get_person_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.get_person.execute().await)
}
