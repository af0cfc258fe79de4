//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use wishlist_domain::{Wish, WishId};

use crate::app::App;
use crate::use_cases::{distinct_categories, AdminIdentity, ServiceError, WishUpdate};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route(
            "/wishes",
            get(list_wishes)
                .post(create_wish)
                .put(update_wishes)
                .delete(delete_wish),
        )
        .route("/wishes/{id}/claim", post(claim_wish))
        .route("/wishes/{id}/unclaim", post(unclaim_wish))
}

async fn health() -> &'static str {
    "OK"
}

/// Admin identity carried in request headers. Absent or non-ASCII headers
/// become an empty identity, which the gate denies.
fn admin_identity(headers: &HeaderMap) -> AdminIdentity {
    let email = headers
        .get("x-admin-email")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let secret = headers
        .get("x-admin-secret")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    AdminIdentity::new(email, secret)
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WishBody {
    id: Uuid,
    title: String,
    description: Option<String>,
    category: String,
    quantity: u32,
    taken_quantity: u32,
    remaining_quantity: u32,
    taken: bool,
    taken_by: String,
    image: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Wish> for WishBody {
    fn from(wish: Wish) -> Self {
        let remaining_quantity = wish.remaining_quantity();
        Self {
            id: wish.id.to_uuid(),
            title: wish.title,
            description: wish.description,
            category: wish.category,
            quantity: wish.quantity,
            taken_quantity: wish.taken_quantity,
            remaining_quantity,
            taken: wish.taken,
            taken_by: wish.taken_by,
            image: wish.image,
            created_at: wish.created_at,
            updated_at: wish.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct WishListBody {
    wishes: Vec<WishBody>,
    categories: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct CategoryUpdateBody {
    message: String,
    updated: u64,
}

/// Absent `title`/`category` keys deserialize as empty strings and are
/// rejected by validation with the same 400 as blank values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateWishRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: String,
}

/// The PUT body is either a category action (tagged by `mode`) or a sparse
/// wish patch carrying the target `id`. Category actions are tried first;
/// patch bodies never carry a `mode` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpdateRequest {
    CategoryAction(CategoryActionRequest),
    Patch(PatchWishRequest),
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "kebab-case", rename_all_fields = "camelCase")]
enum CategoryActionRequest {
    RenameCategory {
        old_category: String,
        new_category: String,
    },
    DeleteCategory {
        old_category: String,
    },
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct PatchWishRequest {
    id: Uuid,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    taken: Option<bool>,
    #[serde(default)]
    taken_by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteWishRequest {
    id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimWishRequest {
    taken_by: String,
    #[serde(default = "default_claim_quantity")]
    quantity: u32,
}

fn default_claim_quantity() -> u32 {
    1
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_wishes(State(app): State<Arc<App>>) -> Result<Json<WishListBody>, ApiError> {
    let wishes = app.use_cases.wishes.list().await?;
    // One read serves both lists, so they cannot disagree.
    let categories = distinct_categories(&wishes);
    Ok(Json(WishListBody {
        wishes: wishes.into_iter().map(WishBody::from).collect(),
        categories,
    }))
}

async fn create_wish(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    Json(body): Json<CreateWishRequest>,
) -> Result<Json<WishBody>, ApiError> {
    let identity = admin_identity(&headers);
    let wish = app
        .use_cases
        .wishes
        .create(&identity, body.title, body.description, body.category)
        .await?;
    Ok(Json(wish.into()))
}

async fn update_wishes(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    Json(body): Json<UpdateRequest>,
) -> Result<axum::response::Response, ApiError> {
    let identity = admin_identity(&headers);
    match body {
        UpdateRequest::CategoryAction(CategoryActionRequest::RenameCategory {
            old_category,
            new_category,
        }) => {
            let updated = app
                .use_cases
                .categories
                .rename(&identity, &old_category, &new_category)
                .await?;
            Ok(Json(CategoryUpdateBody {
                message: format!("Renamed category '{}' to '{}'", old_category, new_category),
                updated,
            })
            .into_response())
        }
        UpdateRequest::CategoryAction(CategoryActionRequest::DeleteCategory { old_category }) => {
            let updated = app
                .use_cases
                .categories
                .delete(&identity, &old_category)
                .await?;
            Ok(Json(CategoryUpdateBody {
                message: format!("Deleted category '{}'", old_category),
                updated,
            })
            .into_response())
        }
        UpdateRequest::Patch(patch) => {
            let id = WishId::from_uuid(patch.id);
            let update = WishUpdate {
                title: patch.title,
                description: patch.description,
                category: patch.category,
                quantity: patch.quantity,
                taken: patch.taken,
                taken_by: patch.taken_by,
            };
            let wish = app.use_cases.wishes.update(&identity, id, update).await?;
            Ok(Json(WishBody::from(wish)).into_response())
        }
    }
}

async fn delete_wish(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    Json(body): Json<DeleteWishRequest>,
) -> Result<Json<MessageBody>, ApiError> {
    let identity = admin_identity(&headers);
    app.use_cases
        .wishes
        .delete(&identity, WishId::from_uuid(body.id))
        .await?;
    Ok(Json(MessageBody {
        message: "Wish deleted".to_string(),
    }))
}

async fn claim_wish(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClaimWishRequest>,
) -> Result<Json<WishBody>, ApiError> {
    let wish = app
        .use_cases
        .wishes
        .mark_taken(WishId::from_uuid(id), &body.taken_by, body.quantity)
        .await?;
    Ok(Json(wish.into()))
}

async fn unclaim_wish(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WishBody>, ApiError> {
    let wish = app
        .use_cases
        .wishes
        .mark_untaken(WishId::from_uuid(id))
        .await?;
    Ok(Json(wish.into()))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Forbidden,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Forbidden => (
                axum::http::StatusCode::FORBIDDEN,
                "Administrator access required",
            )
                .into_response(),
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Validation(message) => ApiError::BadRequest(message),
            ServiceError::Authorization => ApiError::Forbidden,
            ServiceError::Configuration(message) => {
                tracing::error!(%message, "admin operation rejected");
                ApiError::Internal(message)
            }
            ServiceError::Repository(repo_err) => {
                tracing::error!(error = %repo_err, "repository failure");
                ApiError::Internal(repo_err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::infrastructure::clock::SteppingClock;
    use crate::infrastructure::ports::ClockPort;
    use crate::infrastructure::wishes::SqliteWishRepo;
    use crate::use_cases::AdminGate;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const ADMIN_EMAIL: &str = "admin@example.com";
    const ADMIN_SECRET: &str = "sesame";

    async fn router_with_gate(gate: AdminGate) -> (TempDir, Router) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir.path().join("wishes.db");
        let clock: Arc<dyn ClockPort> = Arc::new(SteppingClock::new(
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        ));
        let repo = SqliteWishRepo::new(db_path.to_str().expect("utf-8 path"), clock)
            .await
            .expect("open repo");
        let app = App::new(Arc::new(repo), Arc::new(gate));
        let router = routes().with_state(Arc::new(app));
        (dir, router)
    }

    async fn test_router() -> (TempDir, Router) {
        router_with_gate(AdminGate::configured(ADMIN_EMAIL, ADMIN_SECRET)).await
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    fn admin_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-admin-email", ADMIN_EMAIL)
            .header("x-admin-secret", ADMIN_SECRET)
            .body(Body::from(body.to_string()))
            .expect("build request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    async fn create_wish(router: &Router, title: &str, category: &str) -> Value {
        let response = router
            .clone()
            .oneshot(admin_request(
                Method::POST,
                "/wishes",
                json!({"title": title, "category": category}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }

    #[test]
    fn put_body_parses_category_rename() {
        let parsed: UpdateRequest = serde_json::from_value(json!({
            "mode": "rename-category",
            "oldCategory": "Books",
            "newCategory": "Reading",
        }))
        .expect("parse");

        match parsed {
            UpdateRequest::CategoryAction(action) => assert_eq!(
                action,
                CategoryActionRequest::RenameCategory {
                    old_category: "Books".to_string(),
                    new_category: "Reading".to_string(),
                }
            ),
            UpdateRequest::Patch(_) => panic!("parsed as patch"),
        }
    }

    #[test]
    fn put_body_parses_category_delete() {
        let parsed: UpdateRequest = serde_json::from_value(json!({
            "mode": "delete-category",
            "oldCategory": "Books",
        }))
        .expect("parse");

        assert!(matches!(
            parsed,
            UpdateRequest::CategoryAction(CategoryActionRequest::DeleteCategory { .. })
        ));
    }

    #[test]
    fn put_body_without_mode_parses_as_patch() {
        let id = Uuid::new_v4();
        let parsed: UpdateRequest = serde_json::from_value(json!({
            "id": id,
            "takenBy": "Anna",
            "taken": true,
        }))
        .expect("parse");

        match parsed {
            UpdateRequest::Patch(patch) => {
                assert_eq!(patch.id, id);
                assert_eq!(patch.taken_by.as_deref(), Some("Anna"));
                assert_eq!(patch.taken, Some(true));
                assert_eq!(patch.title, None);
            }
            UpdateRequest::CategoryAction(_) => panic!("parsed as category action"),
        }
    }

    #[test]
    fn put_body_without_mode_or_id_is_rejected() {
        let result: Result<UpdateRequest, _> =
            serde_json::from_value(json!({"title": "No target"}));
        assert!(result.is_err());
    }

    #[test]
    fn wish_body_serializes_camel_case_with_remaining() {
        let wish = Wish {
            id: WishId::new(),
            title: "Skates".to_string(),
            description: None,
            category: "Sport".to_string(),
            quantity: 3,
            taken_quantity: 1,
            taken: true,
            taken_by: "Maren".to_string(),
            image: None,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            updated_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };

        let value = serde_json::to_value(WishBody::from(wish)).expect("serialize");

        assert_eq!(value["takenBy"], "Maren");
        assert_eq!(value["takenQuantity"], 1);
        assert_eq!(value["remainingQuantity"], 2);
        assert!(value["createdAt"].is_string());
        assert!(value.get("taken_by").is_none());
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let (_dir, router) = test_router().await;

        let created = create_wish(&router, "Skates", "Sport").await;
        assert_eq!(created["title"], "Skates");
        assert_eq!(created["quantity"], 1);
        assert_eq!(created["remainingQuantity"], 1);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/wishes")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["wishes"].as_array().expect("wishes array").len(), 1);
        assert_eq!(body["wishes"][0]["title"], "Skates");
        assert_eq!(body["categories"], json!(["Sport"]));
    }

    #[tokio::test]
    async fn create_without_admin_headers_is_forbidden() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(json_request(
                Method::POST,
                "/wishes",
                json!({"title": "Skates", "category": "Sport"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_with_wrong_secret_is_forbidden() {
        let (_dir, router) = test_router().await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/wishes")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-admin-email", ADMIN_EMAIL)
            .header("x-admin-secret", "guess")
            .body(Body::from(
                json!({"title": "Skates", "category": "Sport"}).to_string(),
            ))
            .expect("build request");

        let response = router.oneshot(request).await.expect("send request");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_with_blank_title_is_bad_request() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(admin_request(
                Method::POST,
                "/wishes",
                json!({"title": "   ", "category": "Sport"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_title_is_bad_request() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(admin_request(
                Method::POST,
                "/wishes",
                json!({"category": "Sport"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_category_is_bad_request() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(admin_request(
                Method::POST,
                "/wishes",
                json!({"title": "Skates"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_unconfigured_gate_is_internal_error() {
        let (_dir, router) = router_with_gate(AdminGate::unconfigured()).await;

        let response = router
            .oneshot(admin_request(
                Method::POST,
                "/wishes",
                json!({"title": "Skates", "category": "Sport"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The body stays generic; the configuration detail goes to the log.
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        assert_eq!(&bytes[..], b"Internal error");
    }

    #[tokio::test]
    async fn put_patches_a_wish() {
        let (_dir, router) = test_router().await;
        let created = create_wish(&router, "Skates", "Sport").await;

        let response = router
            .clone()
            .oneshot(admin_request(
                Method::PUT,
                "/wishes",
                json!({"id": created["id"], "quantity": 4}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["quantity"], 4);
        assert_eq!(body["remainingQuantity"], 4);
        assert_eq!(body["title"], "Skates");
    }

    #[tokio::test]
    async fn put_patch_with_unknown_id_is_not_found() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(admin_request(
                Method::PUT,
                "/wishes",
                json!({"id": Uuid::new_v4(), "quantity": 4}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_renames_a_category_across_wishes() {
        let (_dir, router) = test_router().await;
        create_wish(&router, "Skates", "Old").await;
        create_wish(&router, "Helmet", "Old").await;
        create_wish(&router, "Atlas", "Books").await;

        let response = router
            .clone()
            .oneshot(admin_request(
                Method::PUT,
                "/wishes",
                json!({"mode": "rename-category", "oldCategory": "Old", "newCategory": "New"}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["updated"], 2);

        let list = body_json(
            router
                .oneshot(
                    Request::builder()
                        .uri("/wishes")
                        .body(Body::empty())
                        .expect("build request"),
                )
                .await
                .expect("send request"),
        )
        .await;
        let categories = list["categories"].as_array().expect("categories array");
        assert!(categories.contains(&json!("New")));
        assert!(!categories.contains(&json!("Old")));
        assert!(categories.contains(&json!("Books")));
    }

    #[tokio::test]
    async fn put_deletes_a_category_without_deleting_wishes() {
        let (_dir, router) = test_router().await;
        create_wish(&router, "Skates", "Gone").await;
        create_wish(&router, "Helmet", "Gone").await;

        let response = router
            .clone()
            .oneshot(admin_request(
                Method::PUT,
                "/wishes",
                json!({"mode": "delete-category", "oldCategory": "Gone"}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["updated"], 2);

        let list = body_json(
            router
                .oneshot(
                    Request::builder()
                        .uri("/wishes")
                        .body(Body::empty())
                        .expect("build request"),
                )
                .await
                .expect("send request"),
        )
        .await;
        assert_eq!(list["wishes"].as_array().expect("wishes array").len(), 2);
        assert_eq!(list["categories"], json!([""]));
        assert_eq!(list["wishes"][0]["category"], "");
    }

    #[tokio::test]
    async fn put_with_unrecognized_body_is_rejected() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(admin_request(
                Method::PUT,
                "/wishes",
                json!({"title": "No id here"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn delete_succeeds_twice_for_the_same_id() {
        let (_dir, router) = test_router().await;
        let created = create_wish(&router, "Skates", "Sport").await;

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(admin_request(
                    Method::DELETE,
                    "/wishes",
                    json!({"id": created["id"]}),
                ))
                .await
                .expect("send request");
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn delete_without_admin_headers_is_forbidden() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(json_request(
                Method::DELETE,
                "/wishes",
                json!({"id": Uuid::new_v4()}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn claim_and_release_need_no_admin_headers() {
        let (_dir, router) = test_router().await;
        let created = create_wish(&router, "Board game", "Games").await;
        let claim_uri = format!("/wishes/{}/claim", created["id"].as_str().expect("id"));

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                &claim_uri,
                json!({"takenBy": "Anna"}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let claimed = body_json(response).await;
        assert_eq!(claimed["taken"], true);
        assert_eq!(claimed["takenBy"], "Anna");
        assert_eq!(claimed["remainingQuantity"], 0);

        // A second claim on a fully taken wish is rejected.
        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                &claim_uri,
                json!({"takenBy": "Ben"}),
            ))
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let unclaim_uri = format!("/wishes/{}/unclaim", created["id"].as_str().expect("id"));
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(&unclaim_uri)
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("send request");
        assert_eq!(response.status(), StatusCode::OK);

        let released = body_json(response).await;
        assert_eq!(released["taken"], false);
        assert_eq!(released["takenBy"], "");
        assert_eq!(released["remainingQuantity"], 1);
    }

    #[tokio::test]
    async fn claim_on_unknown_wish_is_not_found() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(json_request(
                Method::POST,
                &format!("/wishes/{}/claim", Uuid::new_v4()),
                json!({"takenBy": "Anna"}),
            ))
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unmapped_method_on_wishes_is_method_not_allowed() {
        let (_dir, router) = test_router().await;

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::PATCH)
                    .uri("/wishes")
                    .body(Body::empty())
                    .expect("build request"),
            )
            .await
            .expect("send request");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
