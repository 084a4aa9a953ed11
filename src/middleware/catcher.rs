use rocket::{http::Status, serde::json::{Json, Value, json}, response::status};
use crate::model::response::{ApiStatus, Response, ResponseWithStatus};
use crate::util::message;

fn enveloped(status: ApiStatus, message: &str) -> status::Custom<Json<Response>> {
    let r = ResponseWithStatus::new(status, message.to_string(), None);
    status::Custom(Status::from_code(r.status_code).unwrap(), Json(r.response))
}

#[catch(400)]
pub fn bad_request() -> status::Custom<Json<Response>> {
    enveloped(ApiStatus::BadRequest, message::MESSAGE_MALFORMED_PAYLOAD)
}

// Rocket reports JSON that parses but does not deserialize as 422.
#[catch(422)]
pub fn unprocessable_entity() -> status::Custom<Json<Response>> {
    enveloped(ApiStatus::UnprocessableEntity, message::MESSAGE_MALFORMED_PAYLOAD)
}

#[catch(404)]
pub fn not_found() -> status::Custom<Json<Response>> {
    enveloped(ApiStatus::NotFound, message::MESSAGE_NOT_FOUND)
}

#[catch(429)]
pub fn exceed_rate_limit() -> status::Custom<Json<Response>> {
    enveloped(ApiStatus::TooManyRequests, message::MESSAGE_TOO_MANY_REQUESTS)
}

#[catch(500)]
pub fn internal_server_error() -> status::Custom<Json<Response>> {
    enveloped(ApiStatus::InternalServerError, message::MESSAGE_INTERNAL_SERVER_ERROR)
}

// The admin surface answers with flat error objects, not the envelope.

#[catch(401)]
pub fn unauthorized() -> status::Custom<Json<Value>> {
    status::Custom(
        Status::from_code(ApiStatus::Unauthorized.code()).unwrap(),
        Json(json!({"error": message::MESSAGE_UNAUTHORIZED})),
    )
}

#[catch(403)]
pub fn forbidden() -> status::Custom<Json<Value>> {
    status::Custom(
        Status::from_code(ApiStatus::Forbidden.code()).unwrap(),
        Json(json!({"error": message::MESSAGE_ACCESS_DENIED})),
    )
}
