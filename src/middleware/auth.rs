use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use sqlx::{Pool, Sqlite};
use tracing::error;

use crate::db::user::find_token_owner;

/// Request guard for the admin surface: resolves the bearer token against
/// the token table and requires the admin flag. Failure maps to the 401/403
/// catchers. The caller's ip and user agent ride along for audit logging.
pub struct AdminUser {
    pub user_id: i64,
    pub ip: String,
    pub user_agent: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(pool) = request.rocket().state::<Pool<Sqlite>>() else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix("Bearer "));
        let Some(token) = token else {
            return Outcome::Error((Status::Unauthorized, ()));
        };

        match find_token_owner(pool, token).await {
            Ok(Some(owner)) if owner.is_admin => {
                let ip = request
                    .headers()
                    .get_one("x-forwarded-for")
                    .map(str::to_string)
                    .or_else(|| request.client_ip().map(|addr| addr.to_string()))
                    .unwrap_or_else(|| "unknown".to_string());
                let user_agent = request
                    .headers()
                    .get_one("user-agent")
                    .unwrap_or("unknown")
                    .to_string();
                Outcome::Success(AdminUser {
                    user_id: owner.id,
                    ip,
                    user_agent,
                })
            }
            Ok(Some(_)) => Outcome::Error((Status::Forbidden, ())),
            Ok(None) => Outcome::Error((Status::Unauthorized, ())),
            Err(e) => {
                error!("token lookup failed: {:?}", e.0);
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
