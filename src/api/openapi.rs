use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::list_users, super::handlers::create_user),
    components(schemas(CreateUserRequest, ErrorResponse, User)),
    info(
        title = "My ToDo App API",
        description = "User collection endpoint",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
