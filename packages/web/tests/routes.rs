use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use quire_api::forms::{DatabaseForm, WelcomeForm};
use quire_api::{QuireConfig, SetupStage, Site};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    dir: TempDir,
    site: Arc<Site>,
    router: Router,
}

impl TestApp {
    async fn fresh() -> Self {
        Self::with_config(|_, _| {}).await
    }

    /// Start from defaults adjusted by `adjust`, which also gets the scratch dir.
    async fn with_config(adjust: impl FnOnce(&TempDir, &mut QuireConfig)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(static_dir.join("images")).unwrap();
        std::fs::write(static_dir.join("styles.css"), "body { margin: 0; }").unwrap();
        std::fs::write(static_dir.join("admin.css"), "table { width: 100%; }").unwrap();
        std::fs::write(static_dir.join("images").join("road_big.jpg"), [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();

        let mut config = QuireConfig::default();
        config.blog.static_dir = static_dir;
        adjust(&dir, &mut config);

        let site = Arc::new(Site::open(dir.path().join("quire.toml"), config.clone()).await);
        let router = quire_web::router(Arc::clone(&site), &config);
        Self { dir, site, router }
    }

    async fn installed() -> Self {
        let app = Self::fresh().await;
        app.site
            .configure_database(&DatabaseForm {
                kind: "sql".into(),
                name: app.db_path(),
                ..Default::default()
            })
            .await
            .unwrap();
        app.site
            .install(&WelcomeForm {
                title: "Field Notes".into(),
                username: "admin".into(),
                password: "hunter22".into(),
                confirm: "hunter22".into(),
                email: "admin@example.com".into(),
                seo: None,
            })
            .await
            .unwrap();
        app
    }

    fn db_path(&self) -> String {
        self.dir.path().join("blog.db").to_string_lossy().into_owned()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::from(body.to_owned())).unwrap())
            .await
            .unwrap()
    }

    async fn login(&self) -> String {
        let response = self
            .post_form("/login", "username=admin&password=hunter22", None)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response).expect("login sets a session cookie")
    }
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` of the session cookie, ready to send back.
fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

#[tokio::test]
async fn test_content_routes_redirect_to_setup_before_install() {
    let app = TestApp::fresh().await;

    for uri in ["/", "/login", "/admin", "/coffee-pic"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/setup", "{uri}");
    }
}

#[tokio::test]
async fn test_setup_wizard_over_http() {
    let app = TestApp::fresh().await;

    let response = app.get("/setup", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Setup Database"));
    assert!(html.contains("Below you should enter your database connection details."));
    assert!(html.contains("<title>Blog First Start</title>"));

    let body = format!("type=sql&name={}", app.db_path());
    let response = app.post_form("/setup", &body, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/setup");
    assert_eq!(app.site.stage().await, SetupStage::NeedsBlogDetails);

    let response = app.get("/setup", None).await;
    assert!(body_text(response).await.contains("Welcome"));

    let body = "title=Field+Notes&username=admin&password=hunter22&confirm=hunter22&email=admin%40example.com&seo=y";
    let response = app.post_form("/setup", body, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = session_cookie(&response).expect("setup logs the owner in");
    assert_eq!(app.site.stage().await, SetupStage::Ready);

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Field Notes"));
    assert!(html.contains("Coffee Pic"));
    assert!(html.contains("noindex, nofollow"));

    let response = app.get("/admin", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Dashboard"));

    let response = app.get("/setup", None).await;
    let html = body_text(response).await;
    assert!(html.contains("Already Completed"));
    assert!(html.contains("Redirecting in 3 seconds..."));
}

#[tokio::test]
async fn test_invalid_setup_submission_is_rejected() {
    let app = TestApp::fresh().await;

    let response = app.post_form("/setup", "type=post&host=localhost", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("not supported"));
    assert_eq!(app.site.stage().await, SetupStage::NeedsDatabase);

    let response = app.post_form("/setup", "type=oracle", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Please correct the errors below."));
}

#[tokio::test]
async fn test_mismatched_passwords_keep_blog_step_open() {
    let app = TestApp::fresh().await;
    let body = format!("type=sql&name={}", app.db_path());
    app.post_form("/setup", &body, None).await;

    let body = "title=Field+Notes&username=admin&password=hunter22&confirm=hunter23&email=admin%40example.com";
    let response = app.post_form("/setup", body, None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Passwords must match"));
    assert!(html.contains("Field Notes"));
    assert_eq!(app.site.stage().await, SetupStage::NeedsBlogDetails);
}

#[tokio::test]
async fn test_post_pages() {
    let app = TestApp::installed().await;

    let response = app.get("/coffee-pic", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Coffee Pic"));

    let response = app.get("/no-such-post", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("404 Error - Page Not Found"));
    assert!(html.contains("/no-such-post"));
}

#[tokio::test]
async fn test_index_html_redirects_home() {
    let app = TestApp::installed().await;
    let response = app.get("/index.html", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_unknown_nested_path_is_404() {
    let app = TestApp::installed().await;
    let response = app.get("/a/b/c", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_requires_login() {
    let app = TestApp::installed().await;
    let response = app.get("/admin", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = TestApp::installed().await;

    let response = app.get("/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Restricted Area - Login Required"));

    let response = app
        .post_form("/login", "username=admin&password=wrong-password", None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Login Failed. Please Try Again."));

    let response = app.post_form("/login", "username=admin", None).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let cookie = app.login().await;

    let response = app.get("/admin", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Dashboard"));
    assert!(html.contains("On the road again"));

    let response = app.get("/login", Some(&cookie)).await;
    assert!(body_text(response).await.contains("/admin"));

    let response = app.get("/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("You have been successfully logged out"));

    let response = app.get("/admin", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_stylesheets_are_served() {
    let app = TestApp::fresh().await;

    let response = app.get("/styles.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "body { margin: 0; }");

    let response = app.get("/admin.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_images_are_served() {
    let app = TestApp::installed().await;

    let response = app.get("/images/road_big.jpg", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], &[0xFF, 0xD8, 0xFF, 0xD9]);

    let response = app.get("/images/missing.jpg", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_maintenance_mode_turns_visitors_away() {
    let app = TestApp::installed().await;
    let pool = app.site.ready_pool().await.unwrap();
    sqlx::query("UPDATE blog_settings SET maintenance_mode = 1")
        .execute(&pool)
        .await
        .unwrap();

    for uri in ["/", "/coffee-pic"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        assert!(body_text(response).await.contains("Down For Maintenance"), "{uri}");
    }

    let cookie = app.login().await;
    let response = app.get("/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Coffee Pic"));

    let response = app.get("/coffee-pic", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_lost_database_reopens_wizard_at_the_database_step() {
    let app = TestApp::with_config(|dir, config| {
        config.setup.needs_database = false;
        config.setup.needs_blog = false;
        config.database.name = dir
            .path()
            .join("gone")
            .join("blog.db")
            .to_string_lossy()
            .into_owned();
    })
    .await;

    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/setup");
    let response = app.get("/setup", None).await;
    assert!(body_text(response).await.contains("Setup Database"));

    let body = format!("type=sql&name={}", app.db_path());
    let response = app.post_form("/setup", &body, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.site.stage().await, SetupStage::NeedsBlogDetails);

    let body = "title=Field+Notes&username=admin&password=hunter22&confirm=hunter22&email=admin%40example.com";
    let response = app.post_form("/setup", body, None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let cookie = app.login().await;
    let response = app.get("/admin", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
