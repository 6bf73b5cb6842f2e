//! Shared world for the end-to-end cookbook scenarios.
//!
//! Each request builds a fresh test service over the same shared state and
//! session key, so cookies issued by one step stay valid in the next. The
//! world owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::web;
use cookbook::domain::TRACE_ID_HEADER;
use cookbook::inbound::http::health::HealthState;
use cookbook::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use cookbook::inbound::http::state::HttpState;
use cookbook::server::{CookbookAdapters, build_app, build_http_state};
use mockable::DefaultClock;
use pagination::PaginationConfig;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) const PASSWORD: &str = "Analytical1";

/// Status, trace id and JSON body of the latest response.
pub(crate) struct RecordedResponse {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

pub(crate) struct CookbookWorld {
    runtime: Runtime,
    local: LocalSet,
    pub(crate) adapters: CookbookAdapters,
    health: web::Data<HealthState>,
    http_state: RefCell<web::Data<HttpState>>,
    session: SessionSettings,
    cookie: RefCell<Option<Cookie<'static>>>,
    last: RefCell<Option<RecordedResponse>>,
    /// Ids of recipes created during the scenario, oldest first.
    pub(crate) recipe_ids: RefCell<Vec<String>>,
    /// Session cookies per signed-in username.
    sessions: RefCell<HashMap<String, Cookie<'static>>>,
}

impl CookbookWorld {
    /// World paging `page_size` recipes at a time.
    pub(crate) fn new(page_size: usize) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let adapters = CookbookAdapters::with_hash_cost(4);
        let http_state = http_state_for(&adapters, page_size);
        let health = HealthState::new();
        health.mark_ready();
        Self {
            runtime,
            local: LocalSet::new(),
            adapters,
            health: web::Data::new(health),
            http_state: RefCell::new(http_state),
            session: SessionSettings {
                key: Key::generate(),
                cookie_secure: false,
                same_site: SameSite::Lax,
            },
            cookie: RefCell::new(None),
            last: RefCell::new(None),
            recipe_ids: RefCell::new(Vec::new()),
            sessions: RefCell::new(HashMap::new()),
        }
    }

    /// Rebuild the services so catalogue pages hold `page_size` recipes.
    /// Stored accounts and recipes are kept.
    pub(crate) fn set_page_size(&self, page_size: usize) {
        *self.http_state.borrow_mut() = http_state_for(&self.adapters, page_size);
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.local.block_on(&self.runtime, future)
    }

    /// Send `request` through the full application, attaching the current
    /// session cookie when one is held.
    pub(crate) fn send(&self, request: TestRequest) {
        let request = match self.cookie.borrow().clone() {
            Some(cookie) => request.cookie(cookie),
            None => request,
        };
        let health = self.health.clone();
        let http_state = self.http_state.borrow().clone();
        let session = self.session.clone();
        let (recorded, cookie) = self.block_on(async move {
            let app = actix_test::init_service(build_app(health, http_state, session)).await;
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let cookie = response
                .response()
                .cookies()
                .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
                .map(Cookie::into_owned);
            let bytes = actix_test::read_body(response).await;
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).expect("JSON response body")
            };
            (
                RecordedResponse {
                    status,
                    trace_id,
                    body,
                },
                cookie,
            )
        });
        if let Some(cookie) = cookie {
            *self.cookie.borrow_mut() = Some(cookie);
        }
        *self.last.borrow_mut() = Some(recorded);
    }

    pub(crate) fn last(&self) -> Ref<'_, RecordedResponse> {
        Ref::map(self.last.borrow(), |last| {
            last.as_ref().expect("a request was sent")
        })
    }

    pub(crate) fn has_session_cookie(&self) -> bool {
        self.cookie
            .borrow()
            .as_ref()
            .is_some_and(|cookie| !cookie.value().is_empty())
    }

    /// Register `username` with the shared fixture password.
    pub(crate) fn register(&self, username: &str) {
        self.send(TestRequest::post().uri("/api/v1/authors/register").set_json(json!({
            "firstName": "Test",
            "lastName": "Author",
            "username": username,
            "email": format!("{username}@example.com"),
            "password": PASSWORD,
            "password2": PASSWORD,
        })));
    }

    pub(crate) fn login(&self, username: &str, password: &str) {
        self.send(TestRequest::post().uri("/api/v1/authors/login").set_json(json!({
            "username": username,
            "password": password,
        })));
    }

    /// Sign `username` in and remember their cookie for [`Self::switch_to`].
    pub(crate) fn sign_in(&self, username: &str) {
        *self.cookie.borrow_mut() = None;
        self.login(username, PASSWORD);
        assert_eq!(self.last().status, 200, "login for {username} should succeed");
        let cookie = self.cookie.borrow().clone().expect("session cookie");
        self.sessions
            .borrow_mut()
            .insert(username.to_owned(), cookie);
    }

    /// Act as a previously signed-in author.
    pub(crate) fn switch_to(&self, username: &str) {
        let cookie = self
            .sessions
            .borrow()
            .get(username)
            .cloned()
            .expect("author signed in earlier");
        *self.cookie.borrow_mut() = Some(cookie);
    }

    /// Create a valid draft as the current author, remembering its id.
    pub(crate) fn create_draft(&self, title: &str) {
        self.send(
            TestRequest::post()
                .uri("/api/v1/authors/dashboard/recipes")
                .set_json(valid_recipe(title)),
        );
        let id = self
            .last()
            .body
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_owned);
        if let Some(id) = id {
            self.recipe_ids.borrow_mut().push(id);
        }
    }

    pub(crate) fn latest_recipe_id(&self) -> String {
        self.recipe_ids
            .borrow()
            .last()
            .cloned()
            .expect("a recipe was created")
    }

    pub(crate) fn forget_session(&self) {
        *self.cookie.borrow_mut() = None;
    }
}

fn http_state_for(adapters: &CookbookAdapters, page_size: usize) -> web::Data<HttpState> {
    let pagination = PaginationConfig::new(page_size, 4).expect("pagination config");
    web::Data::new(build_http_state(adapters, pagination, Arc::new(DefaultClock)))
}

/// A recipe body that passes every rule.
pub(crate) fn valid_recipe(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A dependable weeknight favourite.",
        "preparationTime": 25,
        "preparationTimeUnit": "Minutes",
        "servings": 4,
        "servingsUnit": "People",
        "preparationSteps": "Chop, simmer and season to taste. ".repeat(4),
    })
}
