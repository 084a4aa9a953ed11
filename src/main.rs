#[macro_use]
extern crate rocket;

mod api;
mod db;
mod error;
mod middleware;
mod model;
mod normalize;
mod util;

use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::{Json, Value};
use rocket::{Build, Rocket, State};
use rocket_governor::RocketGovernor;

use api::guest::GuestUpload;
use api::player::ProviderEndpoints;
use api::wrapper;
use middleware::auth::AdminUser;
use middleware::{catcher, governor::RateLimitGuard};
use model::provider::ProviderPayload;
use model::response::{ApiStatus, Response, ResponseWithStatus};

use sqlx::{Pool, Sqlite, SqlitePool};

// Upstream providers publish no SLA; outbound calls get an explicit
// deadline instead of the transport default.
pub static REQUEST_TIMEOUT_SECS: u64 = 10;

fn respond(r: ResponseWithStatus) -> status::Custom<Json<Response>> {
    status::Custom(Status::from_code(r.status_code).unwrap(), Json(r.response))
}

fn respond_value((api_status, body): (ApiStatus, Value)) -> status::Custom<Json<Value>> {
    status::Custom(Status::from_code(api_status.code()).unwrap(), Json(body))
}

#[get("/")]
async fn index() -> &'static str {
    "GET /player-info?id=<uid>&region=<region>\n\
     POST /player-info\n\
     GET /check?check=checkbanned&id=<uid>\n\
     GET /like-sender?uid=<uid>&server_name=<region>\n\
     GET /visit-sender?uid=<uid>&server_name=bd\n\
     POST /combine-guests\n\
     GET /tools/sensitivity?oldSens=<s>&oldDpi=<dpi>&newDpi=<dpi>\n\
     GET /admin/users\n\
     GET /admin/logs?limit=<n>&skip=<n>"
}

#[get("/player-info?<id>&<region>")]
async fn player_info(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    client: &State<reqwest::Client>,
    endpoints: &State<ProviderEndpoints>,
    id: Option<&str>,
    region: Option<&str>,
) -> status::Custom<Json<Response>> {
    respond(wrapper::get_player_info(client, endpoints, id, region).await)
}

#[post("/player-info", data = "<payload>")]
async fn player_info_callback(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    payload: Json<ProviderPayload>,
) -> status::Custom<Json<Response>> {
    respond(wrapper::ingest_player_callback(&payload))
}

#[get("/check?<check>&<id>")]
async fn check_get(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    client: &State<reqwest::Client>,
    endpoints: &State<ProviderEndpoints>,
    check: Option<&str>,
    id: Option<&str>,
) -> status::Custom<Json<Value>> {
    respond_value(wrapper::check_ban(client, endpoints, check, id).await)
}

#[post("/check?<check>&<id>")]
async fn check_post(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    client: &State<reqwest::Client>,
    endpoints: &State<ProviderEndpoints>,
    check: Option<&str>,
    id: Option<&str>,
) -> status::Custom<Json<Value>> {
    respond_value(wrapper::check_ban(client, endpoints, check, id).await)
}

#[get("/like-sender?<uid>&<server_name>")]
async fn like_sender(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    client: &State<reqwest::Client>,
    endpoints: &State<ProviderEndpoints>,
    uid: Option<&str>,
    server_name: Option<&str>,
) -> status::Custom<Json<Response>> {
    respond(wrapper::send_likes(client, endpoints, uid, server_name).await)
}

#[get("/visit-sender?<uid>&<server_name>")]
async fn visit_sender(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    client: &State<reqwest::Client>,
    endpoints: &State<ProviderEndpoints>,
    uid: Option<&str>,
    server_name: Option<&str>,
) -> status::Custom<Json<Response>> {
    respond(wrapper::send_visits(client, endpoints, uid, server_name).await)
}

#[post("/combine-guests", data = "<upload>")]
async fn combine_guests(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    upload: Form<GuestUpload<'_>>,
) -> status::Custom<Json<Value>> {
    respond_value(wrapper::combine_guests(&upload.files))
}

#[allow(non_snake_case)]
#[get("/tools/sensitivity?<oldSens>&<oldDpi>&<newDpi>")]
async fn tools_sensitivity(
    _limitguard: RocketGovernor<'_, RateLimitGuard>,
    oldSens: Option<&str>,
    oldDpi: Option<&str>,
    newDpi: Option<&str>,
) -> status::Custom<Json<Response>> {
    respond(wrapper::sensitivity(oldSens, oldDpi, newDpi))
}

#[get("/admin/users")]
async fn admin_users(
    admin: AdminUser,
    pool: &State<Pool<Sqlite>>,
) -> status::Custom<Json<Value>> {
    respond_value(wrapper::admin_users(pool, &admin).await)
}

#[get("/admin/logs?<limit>&<skip>")]
async fn admin_logs(
    admin: AdminUser,
    pool: &State<Pool<Sqlite>>,
    limit: Option<i64>,
    skip: Option<i64>,
) -> status::Custom<Json<Value>> {
    respond_value(wrapper::admin_logs(pool, &admin, limit, skip).await)
}

fn build_rocket(
    pool: Pool<Sqlite>,
    client: reqwest::Client,
    endpoints: ProviderEndpoints,
) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![
            index,
            player_info,
            player_info_callback,
            check_get,
            check_post,
            like_sender,
            visit_sender,
            combine_guests,
            tools_sensitivity,
            admin_users,
            admin_logs,
        ])
        .register("/", catchers![
            catcher::bad_request,
            catcher::unauthorized,
            catcher::forbidden,
            catcher::not_found,
            catcher::unprocessable_entity,
            catcher::exceed_rate_limit,
            catcher::internal_server_error,
        ])
        .manage(pool)
        .manage(client)
        .manage(endpoints)
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let pool = SqlitePool::connect(
        std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set")
            .as_str(),
    )
    .await
    .expect("Couldn't connect to sqlite database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Couldn't migrate the database tables");

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Couldn't build the outbound HTTP client");

    let _rocket = build_rocket(pool, client, ProviderEndpoints::default())
        .launch()
        .await?;
    Ok(())
}
