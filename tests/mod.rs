//! End-to-end tests of the submission path over real HTTP.
//!
//! A wiremock server stands in for the review service, so these run the
//! `reqwest` transport, the retry middleware, the health monitor and the
//! poll loop together on the real clock with short delays.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

use pr_review_client::enums::health_status::HealthStatus;
use pr_review_client::enums::job_status::JobStatus;
use pr_review_client::enums::transport_error::TransportError;
use pr_review_client::errors::ReviewError;
use pr_review_client::services::health_monitor::{HealthGate, HealthMonitor};
use pr_review_client::services::http_transport::HttpTransport;
use pr_review_client::services::job_poller::JobPoller;
use pr_review_client::services::retry_middleware::RetryMiddleware;
use pr_review_client::services::review_client::ReviewClient;
use pr_review_client::structs::analysis_request::AnalysisRequest;
use pr_review_client::structs::config::server_config::ServerConfig;
use pr_review_client::structs::enabled_checks::EnabledChecks;
use pr_review_client::structs::job::JobId;
use pr_review_client::structs::poll_options::PollOptions;
use pr_review_client::structs::retry_policy::RetryPolicy;

const PR_URL: &str = "https://github.com/acme/api/pull/42";

fn transport(server: &MockServer, request_timeout_ms: u64) -> Arc<HttpTransport> {
    let config = ServerConfig {
        base_url: server.uri(),
        request_timeout_ms,
    };
    Arc::new(HttpTransport::new(&config).expect("transport"))
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(20))
}

fn fast_polling() -> PollOptions {
    PollOptions::new(Duration::from_millis(20), Duration::from_secs(5))
}

fn request() -> AnalysisRequest {
    AnalysisRequest::from_pr_url(PR_URL, EnabledChecks::default()).expect("valid PR URL")
}

fn online_client(server: &MockServer) -> ReviewClient {
    ReviewClient::new(
        transport(server, 2_000),
        fast_retry(),
        fast_polling(),
        HealthGate::fixed(HealthStatus::Online),
    )
}

async fn mount_health(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn analysis_submits_polls_and_returns_the_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_partial_json(json!({
            "pr_url": PR_URL,
            "repo": "acme/api",
            "pr_number": 42,
            "server": "github",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "job-1", "status": "pending"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "completed",
            "result": {"score": 87, "feedback": []},
        })))
        .mount(&server)
        .await;

    let result = assert_ok!(online_client(&server).analyze(&request()).await);
    assert_eq!(result, json!({"score": 87, "feedback": []}));

    let received = server.received_requests().await.expect("recording enabled");
    let status_queries = received.iter().filter(|r| r.url.path() == "/analyze/job-1").count();
    assert_eq!(status_queries, 3);
}

#[tokio::test]
async fn server_errors_are_retried_until_one_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "worker pool busy"})))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "job-2"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "completed", "result": {"ok": true}})))
        .mount(&server)
        .await;

    let result = assert_ok!(online_client(&server).analyze(&request()).await);
    assert_eq!(result, json!({"ok": true}));

    let received = server.received_requests().await.expect("recording enabled");
    let submissions: Vec<_> = received.iter().filter(|r| r.url.path() == "/analyze").collect();
    assert_eq!(submissions.len(), 3);
    assert!(submissions.windows(2).all(|pair| pair[0].body == pair[1].body));
}

#[tokio::test]
async fn persistent_server_errors_surface_after_the_attempt_ceiling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"message": "maintenance"})))
        .expect(3)
        .mount(&server)
        .await;

    let error = assert_err!(online_client(&server).analyze(&request()).await);
    assert_eq!(
        error,
        ReviewError::Server {
            status: 503,
            message: "maintenance".to_string(),
            attempts: 3,
        }
    );
}

#[tokio::test]
async fn client_errors_are_sent_exactly_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Repository not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let error = assert_err!(online_client(&server).analyze(&request()).await);
    assert_eq!(error.to_string(), "404: Repository not found");
    assert!(!error.is_recoverable());
}

#[tokio::test]
async fn failed_jobs_end_the_loop_with_the_server_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "job-3"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "failed", "error": "clone failed"})))
        .expect(1)
        .mount(&server)
        .await;

    let error = assert_err!(online_client(&server).analyze(&request()).await);
    assert!(matches!(error, ReviewError::JobFailed { ref reason, .. } if reason == "clone failed"));
}

#[tokio::test]
async fn jobs_that_never_finish_time_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "job-4"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .mount(&server)
        .await;

    let client = online_client(&server)
        .with_poll_options(PollOptions::new(Duration::from_millis(50), Duration::from_millis(300)));

    let error = assert_err!(client.analyze(&request()).await);
    match error {
        ReviewError::Timeout { job_id, elapsed, last_status } => {
            assert_eq!(job_id, "job-4");
            assert_eq!(last_status, JobStatus::Running);
            assert!(elapsed >= Duration::from_millis(300));
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_responses_count_as_transport_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "completed", "result": {}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let poller = JobPoller::new(RetryMiddleware::new(
        transport(&server, 100),
        RetryPolicy::new(2, Duration::from_millis(10)),
    ));
    let job_id = JobId::new("job-5").expect("non-empty id");

    let error = assert_err!(poller.fetch(&job_id).await);
    assert!(matches!(
        error,
        ReviewError::Transport { source: TransportError::TimedOut(_), attempts: 2 }
    ));
}

#[tokio::test]
async fn status_query_returns_the_job_view() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending", "result": null})))
        .expect(1)
        .mount(&server)
        .await;

    let poller = JobPoller::new(RetryMiddleware::new(transport(&server, 2_000), fast_retry()));
    let job = assert_ok!(poller.fetch(&JobId::new("job-6").expect("non-empty id")).await);

    assert_eq!(job.status, JobStatus::Pending);
    assert!(job.result.is_none());
}

#[tokio::test]
async fn health_probe_reads_the_status_body() {
    let server = MockServer::start().await;
    mount_health(&server, json!({"status": "ok"})).await;
    assert_eq!(HealthMonitor::check_health(transport(&server, 2_000).as_ref()).await, HealthStatus::Online);

    let degraded = MockServer::start().await;
    mount_health(&degraded, json!({"status": "degraded"})).await;
    assert_eq!(HealthMonitor::check_health(transport(&degraded, 2_000).as_ref()).await, HealthStatus::Offline);
}

#[tokio::test]
async fn unhealthy_server_receives_no_submission() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let transport = transport(&server, 2_000);
    let monitor = HealthMonitor::start(transport.clone(), Duration::from_secs(30));
    let client = ReviewClient::new(transport, fast_retry(), fast_polling(), monitor.gate());

    let error = assert_err!(client.analyze(&request()).await);
    assert_eq!(error, ReviewError::Precondition { health: HealthStatus::Offline });
    monitor.stop().await;

    let received = server.received_requests().await.expect("recording enabled");
    assert!(received.iter().all(|r| r.url.path() == "/health"));
    assert_eq!(received.len(), 1, "the health probe is not retried");
}

#[tokio::test]
async fn healthy_monitor_lets_the_analysis_through() {
    let server = MockServer::start().await;
    mount_health(&server, json!({"status": "ok"})).await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "job-7"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analyze/job-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "completed", "result": "done"})))
        .mount(&server)
        .await;

    let transport = transport(&server, 2_000);
    let monitor = HealthMonitor::start(transport.clone(), Duration::from_secs(30));
    let client = ReviewClient::new(transport, fast_retry(), fast_polling(), monitor.gate());

    let result = assert_ok!(client.analyze(&request()).await);
    assert_eq!(result, json!("done"));
    assert_eq!(monitor.current().status, HealthStatus::Online);

    monitor.stop().await;
}

/// Serves every connection a 404 head whose body is cut short, counting connections.
async fn truncated_body_server() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = connections.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buffer = [0u8; 4096];
            let _ = socket.read(&mut buffer).await;
            let _ = socket
                .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: 200\r\nConnection: close\r\n\r\n{\"detail\":")
                .await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", address), connections)
}

#[tokio::test]
async fn lost_body_keeps_the_status_classification() {
    let (base_url, connections) = truncated_body_server().await;
    let config = ServerConfig {
        base_url,
        request_timeout_ms: 2_000,
    };
    let poller = JobPoller::new(RetryMiddleware::new(
        Arc::new(HttpTransport::new(&config).expect("transport")),
        fast_retry(),
    ));

    let error = assert_err!(poller.fetch(&JobId::new("job-8").expect("non-empty id")).await);

    assert!(matches!(error, ReviewError::Client { status: 404, .. }), "got {error:?}");
    assert_eq!(connections.load(Ordering::SeqCst), 1);
}
