use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use delayed_notifier::client::Dispatcher;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

async fn spawn_stub(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    addr
}

fn rendered(buf: &[u8]) -> &str {
    std::str::from_utf8(buf).expect("utf8 output")
}

#[tokio::test]
async fn create_posts_exact_json_body() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::default();
    let cap = captured.clone();

    let router = Router::new().route(
        "/notify",
        post(move |Json(body): Json<Value>| {
            let cap = cap.clone();
            async move {
                *cap.lock().unwrap() = Some(body);
                Json(json!({"status": "OK", "notification_id": 1}))
            }
        }),
    );

    let addr = spawn_stub(router).await;

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.create(5, "2024-01-01", "hi").await.unwrap();
    drop(dispatcher);

    let body = captured.lock().unwrap().take().expect("body captured");
    assert_eq!(
        body,
        json!({"recipient_id": 5, "date": "2024-01-01", "text": "hi"})
    );

    let expected =
        serde_json::to_string_pretty(&json!({"status": "OK", "notification_id": 1})).unwrap();
    assert_eq!(rendered(&buf), format!("{expected}\n"));
}

#[tokio::test]
async fn status_issues_get_with_id_in_path() {
    let seen_id: Arc<Mutex<Option<String>>> = Arc::default();
    let seen = seen_id.clone();

    let router = Router::new().route(
        "/notify/:id",
        get(move |Path(id): Path<String>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = Some(id);
                Json(json!({"status": "pending"}))
            }
        }),
    );

    let addr = spawn_stub(router).await;

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.status("42").await.unwrap();
    drop(dispatcher);

    assert_eq!(seen_id.lock().unwrap().take().as_deref(), Some("42"));

    let expected = serde_json::to_string_pretty(&json!({"status": "pending"})).unwrap();
    assert_eq!(rendered(&buf), format!("{expected}\n"));
}

#[tokio::test]
async fn delete_issues_delete_with_id_in_path() {
    let seen_id: Arc<Mutex<Option<String>>> = Arc::default();
    let seen = seen_id.clone();

    let router = Router::new().route(
        "/notify/:id",
        delete(move |Path(id): Path<String>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = Some(id);
                Json(json!({"status": "OK"}))
            }
        }),
    );

    let addr = spawn_stub(router).await;

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.delete("42").await.unwrap();
    drop(dispatcher);

    assert_eq!(seen_id.lock().unwrap().take().as_deref(), Some("42"));
}

#[tokio::test]
async fn network_failure_renders_error_line() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.status("42").await.unwrap();
    drop(dispatcher);

    assert!(rendered(&buf).starts_with("Ошибка:"));
}

#[tokio::test]
async fn non_json_body_renders_error_line() {
    let router = Router::new().route("/notify/:id", get(|| async { "not json" }));
    let addr = spawn_stub(router).await;

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.status("42").await.unwrap();
    drop(dispatcher);

    assert!(rendered(&buf).starts_with("Ошибка:"));
}

#[tokio::test]
async fn non_2xx_json_body_is_rendered_not_treated_as_error() {
    let router = Router::new().route(
        "/notify/:id",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"status": "Error", "error": "notify not found"})),
            )
        }),
    );
    let addr = spawn_stub(router).await;

    let mut buf = Vec::new();
    let mut dispatcher = Dispatcher::new(format!("http://{addr}/notify"), &mut buf);
    dispatcher.status("999").await.unwrap();
    drop(dispatcher);

    let expected =
        serde_json::to_string_pretty(&json!({"status": "Error", "error": "notify not found"}))
            .unwrap();
    assert_eq!(rendered(&buf), format!("{expected}\n"));
}
