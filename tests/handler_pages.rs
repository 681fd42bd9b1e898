mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use consulting_site::infrastructure::content::CATALOG;

fn server() -> TestServer {
    let (state, _rx) = common::create_test_state();
    TestServer::new(common::site_router(state)).unwrap()
}

#[tokio::test]
async fn test_home_renders_menu_and_backdrop() {
    let response = server().get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"data-page="home""#));
    for category in CATALOG {
        assert!(html.contains(&category.href()), "menu misses {}", category.slug);
    }
    assert!(html.contains("/services/tprm/vendor-risk-assessment"));
}

#[tokio::test]
async fn test_static_pages_render() {
    let server = server();

    for (path, page) in [("/about", "about"), ("/news", "news"), ("/contact", "contact")] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(
            response.text().contains(&format!(r#"data-page="{page}""#)),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_service_category_page() {
    let response = server().get("/services/cloud-security").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Cloud Security"));
    assert!(html.contains(r#"data-page="cloud-security""#));
    assert!(html.contains("/services/cloud-security/container-security"));
}

#[tokio::test]
async fn test_service_detail_page_fixes_service() {
    let response = server().get("/services/tprm/vendor-risk-assessment").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Vendor Risk Assessment"));
    assert!(html.contains(r#"value="Vendor Risk Assessment" readonly"#));
    assert!(html.contains(r#"action="/services/tprm/vendor-risk-assessment""#));
}

#[tokio::test]
async fn test_unknown_pages_are_404() {
    let server = server();

    for path in [
        "/services/quantum",
        "/services/tprm/does-not-exist",
        "/pricing",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Page Not Found"), "{path}");
    }
}

#[tokio::test]
async fn test_news_page_no_articles_found() {
    let response = server()
        .get("/news?category=cloud&search=ransomware")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("No Articles Found"));
}

#[tokio::test]
async fn test_news_page_filters_posts() {
    let response = server().get("/news?category=compliance").await;

    let html = response.text();
    assert!(html.contains("Preparing for Your First ISO 27001 Audit"));
    assert!(!html.contains("Shifting Left Without Slowing Down"));
    assert!(!html.contains("No Articles Found"));
}

#[tokio::test]
async fn test_contact_form_post_queues_general_inquiry() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::site_router(state)).unwrap();

    let response = server
        .post("/contact")
        .form(&[
            ("name", "Grace Hopper"),
            ("email", "grace@example.com"),
            ("phone", ""),
            ("service", "Something Else"),
            ("message", "Please review our incident response plan."),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("your inquiry has been received"));

    let inquiry = rx.try_recv().unwrap();
    assert_eq!(inquiry.service, "General Inquiry");
    assert_eq!(inquiry.phone, None);
}

#[tokio::test]
async fn test_contact_form_errors_rerender_values() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::site_router(state)).unwrap();

    let response = server
        .post("/contact")
        .form(&[
            ("name", "Grace Hopper"),
            ("email", "grace-at-example"),
            ("message", "Please review our incident response plan."),
        ])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let html = response.text();
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains(r#"value="Grace Hopper""#));
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_service_form_uses_page_service() {
    let (state, mut rx) = common::create_test_state();
    let server = TestServer::new(common::site_router(state)).unwrap();

    let form = common::valid_form("ignored");
    let response = server
        .post("/services/bcms/disaster-recovery")
        .form(&[
            ("name", form.name.as_str()),
            ("email", form.email.as_str()),
            ("service", "Free Pentest"),
            ("message", form.message.as_str()),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(rx.try_recv().unwrap().service, "Disaster Recovery Planning");
}
