use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::{Body, Bytes},
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use cookie::Cookie;
use portal_client::{ClientConfig, PortalClient};
use serde::Serialize;
use serde_json::{json, Value};
use shared_types::{Identity, LoginForm, Portal, Role};

pub const COMPANY: &str = "ACME-001";
pub const OTHER_COMPANY: &str = "FARM-002";
pub const ADMIN_USER: &str = "owner";
pub const ADMIN_PASSWORD: &str = "secret";
pub const OFFICER_USER: &str = "ravi";
pub const OFFICER_PASSWORD: &str = "temp123";

const SESSION_COOKIE: &str = "farmdesk_session";

/// One request as the fake backend saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Raw (still percent-encoded) path.
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Employee {
    id: String,
    username: String,
    password: String,
    /// Stored as the backend would, not yet normalized.
    role: String,
}

#[derive(Debug, Clone, Serialize)]
struct StoredCrop {
    crop_name: String,
    rate_per_unit: f64,
    created_at: String,
    created_by: String,
    updated_at: String,
    updated_by: String,
}

#[derive(Debug, Default)]
struct Company {
    employees: Vec<Employee>,
    crops: Vec<StoredCrop>,
}

#[derive(Debug, Clone)]
struct SessionUser {
    company_id: String,
    employee_id: String,
}

#[derive(Default)]
struct BackendState {
    companies: Mutex<HashMap<String, Company>>,
    sessions: Mutex<HashMap<String, SessionUser>>,
    log: Mutex<Vec<RecordedRequest>>,
    me_override: Mutex<Option<(StatusCode, String)>>,
    empty_deletes: AtomicBool,
}

type Shared = Arc<BackendState>;

/// In-process stand-in for the FarmDesk backend, listening on a random
/// local port. Mirrors the backend's status codes and error texts.
pub struct FakeBackend {
    pub base_url: String,
    state: Shared,
}

impl FakeBackend {
    /// Start a backend seeded with two companies: `ACME-001` with an admin
    /// (`owner`, role `company_admin`) and an officer (`ravi`), and
    /// `FARM-002` with its own admin.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(BackendState::default());
        {
            let mut companies = state.companies.lock().unwrap();
            companies.insert(
                COMPANY.to_string(),
                Company {
                    employees: vec![
                        Employee {
                            id: "emp-admin-1".to_string(),
                            username: ADMIN_USER.to_string(),
                            password: ADMIN_PASSWORD.to_string(),
                            role: "company_admin".to_string(),
                        },
                        Employee {
                            id: "emp-officer-1".to_string(),
                            username: OFFICER_USER.to_string(),
                            password: OFFICER_PASSWORD.to_string(),
                            role: "Officer".to_string(),
                        },
                    ],
                    crops: Vec::new(),
                },
            );
            companies.insert(
                OTHER_COMPANY.to_string(),
                Company {
                    employees: vec![Employee {
                        id: "emp-admin-2".to_string(),
                        username: "other".to_string(),
                        password: "pw".to_string(),
                        role: "SuperAdmin".to_string(),
                    }],
                    crops: Vec::new(),
                },
            );
        }

        let app = Router::new()
            .route("/api/auth/me", get(auth_me))
            .route("/api/auth/logout", post(auth_logout))
            .route("/admin/login", post(admin_login))
            .route("/officer/login", post(officer_login))
            .route("/admin/officers", get(list_officers).post(create_officer))
            .route("/admin/officers/{officer_id}", delete(delete_officer))
            .route("/admin/crops", get(list_crops).post(create_crop))
            .route("/admin/crops/{crop_name}", put(update_crop).delete(delete_crop))
            .layer(middleware::from_fn_with_state(state.clone(), record))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Fake backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// A fresh client with its own cookie jar.
    pub fn client(&self) -> PortalClient {
        PortalClient::new(ClientConfig::new(&self.base_url)).expect("Failed to build client")
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.log.lock().unwrap().clone()
    }

    /// Requests with the given method whose path starts with `prefix`.
    pub fn requests_matching(&self, method: &str, prefix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(prefix))
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.log.lock().unwrap().clear();
    }

    /// Make `GET /api/auth/me` answer with this status and raw body.
    pub fn override_me(&self, status: StatusCode, body: &str) {
        *self.state.me_override.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Make successful deletes answer `204 No Content` instead of a
    /// `{message}` body.
    pub fn answer_deletes_with_no_content(&self) {
        self.state.empty_deletes.store(true, Ordering::SeqCst);
    }
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

pub fn login_form(company_id: &str, username: &str, password: &str, portal: Portal) -> LoginForm {
    LoginForm {
        company_id: company_id.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        portal,
    }
}

/// Start a backend and log its `ACME-001` admin in.
pub async fn admin_session() -> (FakeBackend, PortalClient, Identity) {
    let backend = FakeBackend::start().await;
    let client = backend.client();
    let outcome = client
        .login(&login_form(COMPANY, ADMIN_USER, ADMIN_PASSWORD, Portal::Admin))
        .await
        .expect("Admin login failed");
    let identity = outcome.identity.expect("Admin session did not resolve");
    backend.clear_requests();
    (backend, client, identity)
}

/// Start a backend and log its `ACME-001` officer in.
pub async fn officer_session() -> (FakeBackend, PortalClient, Identity) {
    let backend = FakeBackend::start().await;
    let client = backend.client();
    let outcome = client
        .login(&login_form(COMPANY, OFFICER_USER, OFFICER_PASSWORD, Portal::Officer))
        .await
        .expect("Officer login failed");
    let identity = outcome.identity.expect("Officer session did not resolve");
    backend.clear_requests();
    (backend, client, identity)
}

async fn record(State(state): State<Shared>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    state.log.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        body: serde_json::from_slice(&bytes).ok(),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn deleted(state: &BackendState, message: &str) -> Response {
    if state.empty_deletes.load(Ordering::SeqCst) {
        return StatusCode::NO_CONTENT.into_response();
    }
    Json(json!({ "message": message })).into_response()
}

fn timestamp() -> String {
    chrono::Utc::now()
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
}

fn current_user(state: &BackendState, headers: &HeaderMap) -> Option<(String, Employee)> {
    let token = session_token(headers)?;
    let session = state.sessions.lock().unwrap().get(&token).cloned()?;
    let companies = state.companies.lock().unwrap();
    let employee = companies
        .get(&session.company_id)?
        .employees
        .iter()
        .find(|e| e.id == session.employee_id)?
        .clone();
    Some((session.company_id, employee))
}

fn require_admin(state: &BackendState, headers: &HeaderMap) -> Result<(String, Employee), Response> {
    let Some((company_id, employee)) = current_user(state, headers) else {
        return Err(error(StatusCode::UNAUTHORIZED, "Unauthorized"));
    };
    if Role::normalize(Some(employee.role.as_str())) != Role::Admin {
        return Err(error(StatusCode::FORBIDDEN, "Forbidden"));
    }
    Ok((company_id, employee))
}

fn text_field(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse a rate the way the backend does: numbers or numeric strings.
fn rate_field(body: &Value) -> Option<Result<f64, &'static str>> {
    let raw = body.get("rate_per_unit").filter(|v| !v.is_null())?;
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Some(match parsed {
        None => Err("Invalid rate per unit"),
        Some(r) if r < 0.0 => Err("Rate per unit must be positive"),
        Some(r) => Ok(r),
    })
}

async fn auth_me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some((status, body)) = state.me_override.lock().unwrap().clone() {
        return (status, body).into_response();
    }
    match current_user(&state, &headers) {
        Some((company_id, employee)) => Json(json!({
            "_id": employee.id,
            "username": employee.username,
            "company_id": company_id,
            "role": employee.role,
        }))
        .into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Invalid or expired token"),
    }
}

async fn auth_logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.lock().unwrap().remove(&token);
    }
    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();
    (
        StatusCode::OK,
        [(header::SET_COOKIE, removal.to_string())],
        Json(json!({ "message": "Logged out" })),
    )
        .into_response()
}

async fn admin_login(State(state): State<Shared>, body: Bytes) -> Response {
    login(&state, &body, Role::Admin)
}

async fn officer_login(State(state): State<Shared>, body: Bytes) -> Response {
    login(&state, &body, Role::Officer)
}

fn login(state: &BackendState, body: &[u8], want: Role) -> Response {
    let body: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let company_id = text_field(&body, "company_id").trim().to_string();
    let username = text_field(&body, "username").trim().to_string();
    let password = text_field(&body, "password");
    if company_id.is_empty() || username.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Missing required fields");
    }

    let employee = {
        let companies = state.companies.lock().unwrap();
        let Some(company) = companies.get(&company_id) else {
            return error(StatusCode::UNAUTHORIZED, "User Not Found");
        };
        company
            .employees
            .iter()
            .find(|e| e.username == username && Role::normalize(Some(e.role.as_str())) == want)
            .cloned()
    };
    let Some(employee) = employee else {
        return match want {
            Role::Admin => error(StatusCode::FORBIDDEN, "Unauthorized role"),
            Role::Officer => error(StatusCode::UNAUTHORIZED, "User Not Found"),
        };
    };
    if employee.password != password {
        return error(StatusCode::UNAUTHORIZED, "Please Enter Correct Password");
    }

    let token = uuid::Uuid::new_v4().to_string();
    state.sessions.lock().unwrap().insert(
        token.clone(),
        SessionUser {
            company_id,
            employee_id: employee.id,
        },
    );
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(json!({ "message": "Login successful" })),
    )
        .into_response()
}

async fn list_officers(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let (company_id, _) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let companies = state.companies.lock().unwrap();
    let items: Vec<Value> = companies
        .get(&company_id)
        .map(|c| c.employees.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|e| Role::normalize(Some(e.role.as_str())) == Role::Officer)
        .map(|e| {
            json!({
                "_id": e.id,
                "username": e.username,
                "role": "Officer",
                "company_id": company_id,
            })
        })
        .collect();
    Json(json!({ "items": items })).into_response()
}

async fn create_officer(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Response {
    let (company_id, _) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let username = text_field(&body, "username").trim().to_string();
    let password = text_field(&body, "password").trim().to_string();
    if username.is_empty() || password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Username and password are required");
    }

    let mut companies = state.companies.lock().unwrap();
    let Some(company) = companies.get_mut(&company_id) else {
        return error(StatusCode::NOT_FOUND, "Company not found");
    };
    if company.employees.iter().any(|e| e.username == username) {
        return error(StatusCode::CONFLICT, "Username already exists");
    }
    let id = uuid::Uuid::new_v4().simple().to_string();
    company.employees.push(Employee {
        id: id.clone(),
        username,
        password,
        role: "Officer".to_string(),
    });
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Officer created", "id": id })),
    )
        .into_response()
}

async fn delete_officer(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(officer_id): Path<String>,
) -> Response {
    let (company_id, _) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let mut companies = state.companies.lock().unwrap();
    let Some(company) = companies.get_mut(&company_id) else {
        return error(StatusCode::NOT_FOUND, "Company not found");
    };
    let before = company.employees.len();
    company
        .employees
        .retain(|e| !(e.id == officer_id && Role::normalize(Some(e.role.as_str())) == Role::Officer));
    if company.employees.len() == before {
        return error(StatusCode::NOT_FOUND, "Officer not found");
    }
    deleted(&state, "Officer deleted")
}

async fn list_crops(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let (company_id, _) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let companies = state.companies.lock().unwrap();
    let crops = companies
        .get(&company_id)
        .map(|c| c.crops.clone())
        .unwrap_or_default();
    Json(json!({ "crop_details": crops })).into_response()
}

async fn create_crop(State(state): State<Shared>, headers: HeaderMap, body: Bytes) -> Response {
    let (company_id, user) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let crop_name = text_field(&body, "crop_name").trim().to_string();
    let rate = rate_field(&body);
    let (false, Some(rate)) = (crop_name.is_empty(), rate) else {
        return error(StatusCode::BAD_REQUEST, "Crop name and rate per unit are required");
    };
    let rate_per_unit = match rate {
        Ok(r) => r,
        Err(msg) => return error(StatusCode::BAD_REQUEST, msg),
    };

    let mut companies = state.companies.lock().unwrap();
    let company = companies.entry(company_id).or_default();
    if company
        .crops
        .iter()
        .any(|c| c.crop_name.to_lowercase() == crop_name.to_lowercase())
    {
        return error(StatusCode::CONFLICT, "Crop already exists");
    }
    let now = timestamp();
    let crop = StoredCrop {
        crop_name,
        rate_per_unit,
        created_at: now.clone(),
        created_by: user.username.clone(),
        updated_at: now,
        updated_by: user.username,
    };
    company.crops.push(crop.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Crop added successfully", "crop": crop })),
    )
        .into_response()
}

async fn update_crop(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(crop_name): Path<String>,
    body: Bytes,
) -> Response {
    let (company_id, user) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let new_name = text_field(&body, "crop_name").trim().to_string();
    let rate = rate_field(&body);
    let (false, Some(rate)) = (new_name.is_empty(), rate) else {
        return error(StatusCode::BAD_REQUEST, "Crop name and rate per unit are required");
    };
    let rate_per_unit = match rate {
        Ok(r) => r,
        Err(msg) => return error(StatusCode::BAD_REQUEST, msg),
    };

    let mut companies = state.companies.lock().unwrap();
    let Some(company) = companies.get_mut(&company_id).filter(|c| !c.crops.is_empty()) else {
        return error(StatusCode::NOT_FOUND, "No crops found for this company");
    };
    let Some(index) = company.crops.iter().position(|c| c.crop_name == crop_name) else {
        return error(StatusCode::NOT_FOUND, "Crop not found");
    };
    if company
        .crops
        .iter()
        .enumerate()
        .any(|(i, c)| i != index && c.crop_name.to_lowercase() == new_name.to_lowercase())
    {
        return error(StatusCode::CONFLICT, "Crop name already exists");
    }
    let crop = &mut company.crops[index];
    crop.crop_name = new_name;
    crop.rate_per_unit = rate_per_unit;
    crop.updated_at = timestamp();
    crop.updated_by = user.username;
    let crop = crop.clone();
    Json(json!({ "message": "Crop updated successfully", "crop": crop })).into_response()
}

async fn delete_crop(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(crop_name): Path<String>,
) -> Response {
    let (company_id, _) = match require_admin(&state, &headers) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let mut companies = state.companies.lock().unwrap();
    let Some(company) = companies.get_mut(&company_id).filter(|c| !c.crops.is_empty()) else {
        return error(StatusCode::NOT_FOUND, "No crops found for this company");
    };
    let before = company.crops.len();
    company.crops.retain(|c| c.crop_name != crop_name);
    if company.crops.len() == before {
        return error(StatusCode::NOT_FOUND, "Crop not found");
    }
    deleted(&state, "Crop deleted successfully")
}
