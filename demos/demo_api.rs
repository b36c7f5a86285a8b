use actix_web::{App, HttpServer};
use reqwest::Client;
use serde_json::json;
use std::net::TcpListener;
use tokio::time::{sleep, Duration};

/// Find a free port by binding to port 0
fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[actix_web::main]
async fn main() {
    let port = free_port();
    println!("Starting server on 127.0.0.1:{}...\n", port);

    let server = HttpServer::new(|| App::new().configure(vecmat::server::config))
        .bind(format!("127.0.0.1:{}", port))
        .unwrap()
        .run();
    let handle = server.handle();
    tokio::spawn(server);
    sleep(Duration::from_millis(200)).await;

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let requests = vec![
        ("/unit_vector", json!({ "vector": [3.0, 4.0] })),
        ("/angle_between", json!({ "v1": [1.0, 0.0], "v2": [0.0, 1.0] })),
        ("/orthogonality", json!({ "v1": [1.0, 0.0], "v2": [0.0, 5.0] })),
        ("/parallelism", json!({ "v1": [2.0, 4.0], "v2": [1.0, 2.0] })),
        (
            "/linear_combination",
            json!({ "vectors": [[1.0, 0.0], [0.0, 1.0]], "coefficients": [2.0, 3.0] }),
        ),
        (
            "/solve_system",
            json!({ "A": [[2.0, 1.0], [1.0, 3.0]], "b": [3.0, 5.0] }),
        ),
        (
            "/matrix_transpose",
            json!({ "matrix": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]] }),
        ),
        (
            "/matrix_multiply",
            json!({
                "m1": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
                "m2": [[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]
            }),
        ),
        // A failing request still comes back as JSON with an "error" field
        ("/unit_vector", json!({ "vector": [0.0, 0.0] })),
    ];

    for (path, payload) in requests {
        let resp = client
            .post(format!("{}{}", base, path))
            .json(&payload)
            .send()
            .await
            .unwrap();
        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap();
        println!("POST {} {}", path, payload);
        println!("  -> {} {}\n", status, body);
    }

    handle.stop(true).await;
}
