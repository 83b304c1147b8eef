//! Mock Pet Fitness API server for testing
//!
//! Simulates the backend over real HTTP so the reqwest client can be
//! exercised end to end. Every request is recorded for later inspection.
//!
//! Routes:
//! - POST /users/ echoes { id, created_at, pet } for the posted user_id
//! - GET/PATCH /users/{id}/pet, POST /users/{id}/exercise, /daily-check
//! - GET /users/{id}/quests, POST /users/{id}/quests/{n}/complete
//! - GET /travel/attractions, GET/POST /users/{id}/travel/checkins,
//!   POST /users/{id}/travel/start, /travel/breakthrough
//! - GET /leaderboard/level?limit=N

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value as JsonValue};

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Raw request target, including any query string
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Parse the body as JSON
    pub fn json(&self) -> serde_json::Result<JsonValue> {
        serde_json::from_str(&self.body)
    }
}

/// Configuration for mock behaviour
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Answer every request with this status and an error body
    pub fail_status: Option<u16>,
    /// Identifier returned by POST /users/ instead of the posted user_id
    pub created_id: Option<String>,
    /// Answer with a body that is not valid JSON
    pub malformed_body: bool,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

/// Mock Pet Fitness server for testing
pub struct MockPetServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

impl MockPetServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(Mutex::new(Vec::new()));

        // Non-blocking accept so stop() can end the loop
        listener.set_nonblocking(true)?;

        let running_clone = running.clone();
        let requests_clone = requests.clone();
        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        let log = requests_clone.clone();
                        thread::spawn(move || handle_connection(stream, &cfg, &log));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the base URL for this mock server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockPetServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Read one HTTP/1.1 request (headers plus Content-Length body)
fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data = Vec::new();
    let mut buffer = [0; 4096];

    let header_end = loop {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            return None;
        }
        data.extend_from_slice(&buffer[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "content-type" => content_type = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    while data.len() < header_end + content_length {
        let n = stream.read(&mut buffer).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buffer[..n]);
    }

    let body_end = data.len().min(header_end + content_length);
    Some(RecordedRequest {
        method,
        path,
        content_type,
        body: String::from_utf8_lossy(&data[header_end..body_end]).to_string(),
    })
}

fn handle_connection(
    mut stream: TcpStream,
    config: &MockConfig,
    log: &Mutex<Vec<RecordedRequest>>,
) {
    // Accepted sockets may inherit non-blocking mode from the listener
    let _ = stream.set_nonblocking(false);

    let Some(request) = read_request(&mut stream) else {
        send_response(&mut stream, 400, "Bad Request", r#"{"detail": "Invalid request"}"#);
        return;
    };

    if let Ok(mut requests) = log.lock() {
        requests.push(request.clone());
    }

    if config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(config.delay_ms));
    }

    if let Some(status) = config.fail_status {
        send_response(&mut stream, status, "Error", r#"{"detail": "Simulated failure"}"#);
        return;
    }

    if config.malformed_body {
        send_response(&mut stream, 200, "OK", "<html>not json</html>");
        return;
    }

    match route(&request, config) {
        Some(body) => send_response(&mut stream, 200, "OK", &body.to_string()),
        None => send_response(&mut stream, 404, "Not Found", r#"{"detail": "Not Found"}"#),
    }
}

/// Build the reply body for a request, or None for unknown routes
fn route(request: &RecordedRequest, config: &MockConfig) -> Option<JsonValue> {
    let (path, query) = match request.path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (request.path.as_str(), None),
    };
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let body = request.json().unwrap_or(JsonValue::Null);

    match (request.method.as_str(), segments.as_slice()) {
        ("POST", ["users", ""]) => {
            let user_id = body["user_id"].as_str().unwrap_or_default();
            let id = config.created_id.as_deref().unwrap_or(user_id);
            let mut pet = mock_pet(id);
            pet["name"] = body["pet_name"].clone();
            Some(json!({"id": id, "created_at": "2024-05-01T08:00:00", "pet": pet}))
        }
        ("GET", ["users", user_id]) => Some(json!({"id": user_id, "pet": mock_pet(user_id)})),
        ("GET", ["users", user_id, "pet"]) => Some(mock_pet(user_id)),
        ("PATCH", ["users", user_id, "pet"]) => {
            let mut pet = mock_pet(user_id);
            if let Some(fields) = body.as_object() {
                for (key, value) in fields {
                    pet[key.as_str()] = value.clone();
                }
            }
            Some(pet)
        }
        ("POST", ["users", user_id, "exercise"]) => {
            let mut pet = mock_pet(user_id);
            let seconds = body["duration_seconds"].as_i64().unwrap_or(0);
            pet["strength"] = json!(seconds / 10);
            pet["daily_exercise_seconds"] = json!(seconds);
            pet["daily_steps"] = json!(body["steps"].as_i64().unwrap_or(0));
            Some(json!({"pet": pet, "breakthrough_required": false}))
        }
        ("POST", ["users", user_id, "daily-check"]) => {
            Some(json!({"pet": mock_pet(user_id), "already_checked": false}))
        }
        ("GET", ["users", user_id, "quests"]) => Some(json!([{
            "id": 11,
            "quest_id": 1,
            "user_id": user_id,
            "date": "2024-05-01T00:00:00",
            "is_completed": false,
            "quest": {"id": 1, "title": "Daily Check-in", "description": "Log in to the app", "reward_mood": 5}
        }])),
        ("POST", ["users", user_id, "quests", _, "complete"]) => {
            Some(json!({"success": true, "pet": mock_pet(user_id)}))
        }
        ("GET", ["travel", "attractions"]) => Some(json!([mock_attraction()])),
        ("GET", ["users", user_id, "travel", "checkins"]) => Some(json!([{
            "id": 1, "user_id": user_id, "quest_id": "taipei-101",
            "lat": 25.034, "lng": 121.5645, "completed_at": "2024-05-01T10:00:00"
        }])),
        ("POST", ["users", user_id, "travel", "checkins"]) => Some(json!({
            "pet": mock_pet(user_id),
            "checkin": {
                "id": 2, "user_id": user_id, "quest_id": body["quest_id"],
                "lat": body["lat"], "lng": body["lng"], "completed_at": "2024-05-01T10:00:00"
            }
        })),
        ("POST", ["users", _, "travel", "start"]) => Some(mock_attraction()),
        ("POST", ["users", user_id, "travel", "breakthrough"]) => {
            let mut pet = mock_pet(user_id);
            pet["stage"] = json!(1);
            pet["breakthrough_completed"] = json!(true);
            Some(json!({"success": true, "pet": pet}))
        }
        ("GET", ["leaderboard", "level"]) => {
            let limit = query
                .and_then(|q| q.strip_prefix("limit="))
                .and_then(|l| l.parse::<usize>().ok())
                .unwrap_or(10);
            let entries: Vec<JsonValue> = (0..limit)
                .map(|i| json!({"username": format!("Chicken {}", i + 1), "value": 20 - i as i64}))
                .collect();
            Some(JsonValue::Array(entries))
        }
        _ => None,
    }
}

fn mock_pet(owner_id: &str) -> JsonValue {
    json!({
        "id": 1,
        "owner_id": owner_id,
        "name": "我的手雞",
        "strength": 0,
        "stamina": 100,
        "mood": 0,
        "level": 1,
        "stage": 0,
        "breakthrough_completed": false,
        "daily_exercise_seconds": 0,
        "daily_steps": 0,
        "updated_at": null
    })
}

fn mock_attraction() -> JsonValue {
    json!({
        "id": 1,
        "name": "Taipei 101",
        "description": "Once the world's tallest building",
        "latitude": 25.0340,
        "longitude": 121.5645
    })
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::PetApiClient;
    use crate::domain::result::Error;
    use crate::domain::{ExerciseLog, PetStage, PetUpdate, TravelCheckinRequest};
    use crate::ports::PetApi;

    fn client_for(server: &MockPetServer) -> PetApiClient {
        PetApiClient::new(&server.base_url()).unwrap()
    }

    #[test]
    fn test_mock_server_starts() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        assert!(server.port() > 0);
        assert!(server.requests().is_empty());
    }

    #[test]
    fn test_create_user_posts_json_body() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let user = client.create_user("Nugget", "tp-42").unwrap();
        assert_eq!(user.id, "tp-42");
        assert_eq!(user.pet.unwrap().name.as_deref(), Some("Nugget"));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/users/");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));

        let body = requests[0].json().unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["user_id"], "tp-42");
        assert_eq!(object["pet_name"], "Nugget");
    }

    #[test]
    fn test_create_user_body_is_valid_json_for_awkward_values() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        client.create_user("雞 \"quoted\"\n", "").unwrap();

        let body = server.requests()[0].json().unwrap();
        assert_eq!(body.as_object().unwrap().len(), 2);
        assert_eq!(body["user_id"], "");
        assert_eq!(body["pet_name"], "雞 \"quoted\"\n");
    }

    #[test]
    fn test_create_user_returns_server_id() {
        let server = MockPetServer::start(MockConfig {
            created_id: Some("abc".to_string()),
            ..Default::default()
        })
        .unwrap();

        let user = client_for(&server).create_user("Nugget", "tp-42").unwrap();
        assert_eq!(user.id, "abc");
    }

    #[test]
    fn test_create_user_failure_status() {
        for status in [400, 404, 422, 500, 503] {
            let server = MockPetServer::start(MockConfig {
                fail_status: Some(status),
                ..Default::default()
            })
            .unwrap();

            let err = client_for(&server).create_user("Nugget", "tp-42").unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert!(err.to_string().contains("Failed to create user"));
            assert_eq!(server.requests().len(), 1, "no retry expected");
        }
    }

    #[test]
    fn test_slow_server_is_transport_timeout_without_retry() {
        let server = MockPetServer::start(MockConfig {
            delay_ms: 1000,
            ..Default::default()
        })
        .unwrap();
        let client =
            PetApiClient::with_timeout(&server.base_url(), std::time::Duration::from_millis(200))
                .unwrap();

        let err = client.create_user("Nugget", "tp-42").unwrap_err();

        match &err {
            Error::Transport(msg) => assert!(msg.contains("timed out"), "{}", msg),
            other => panic!("expected transport error, got {:?}", other),
        }
        assert_eq!(err.status(), None);
        assert_eq!(server.requests().len(), 1);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let server = MockPetServer::start(MockConfig {
            malformed_body: true,
            ..Default::default()
        })
        .unwrap();

        let err = client_for(&server).create_user("Nugget", "tp-42").unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {:?}", err);
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let mut server = MockPetServer::start(MockConfig::default()).unwrap();
        let base_url = server.base_url();
        server.stop();
        drop(server);

        let client = PetApiClient::new(&base_url).unwrap();
        let err = client.get_pet("tp-1").unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "got {:?}", err);
    }

    #[test]
    fn test_pet_endpoints() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let pet = client.get_pet("tp-1").unwrap();
        assert_eq!(pet.owner_id, "tp-1");
        assert_eq!(pet.stage, PetStage::Egg);

        let pet = client.update_pet("tp-1", &PetUpdate::rename("Colonel")).unwrap();
        assert_eq!(pet.name.as_deref(), Some("Colonel"));

        let requests = server.requests();
        assert_eq!(requests[0].path, "/users/tp-1/pet");
        assert_eq!(requests[1].method, "PATCH");
        assert_eq!(requests[1].json().unwrap(), json!({"name": "Colonel"}));
    }

    #[test]
    fn test_exercise_and_daily_check() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let log = ExerciseLog::new("Running", 300, 5.0).with_steps(420);
        let outcome = client.log_exercise("tp-1", &log).unwrap();
        assert_eq!(outcome.pet.strength, 30);
        assert_eq!(outcome.pet.daily_steps, 420);
        assert!(!outcome.breakthrough_required);

        let check = client.daily_check("tp-1").unwrap();
        assert!(!check.already_checked);

        let requests = server.requests();
        assert_eq!(requests[0].path, "/users/tp-1/exercise");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].path, "/users/tp-1/daily-check");
    }

    #[test]
    fn test_quest_endpoints() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        let quests = client.daily_quests("tp-1").unwrap();
        assert_eq!(quests.len(), 1);
        assert_eq!(quests[0].quest.reward_mood, 5);

        let done = client.complete_quest("tp-1", quests[0].id).unwrap();
        assert!(done.success);
        assert_eq!(server.requests()[1].path, "/users/tp-1/quests/11/complete");
    }

    #[test]
    fn test_travel_endpoints() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let client = client_for(&server);

        assert_eq!(client.attractions().unwrap()[0].name, "Taipei 101");
        assert_eq!(client.travel_checkins("tp-1").unwrap().len(), 1);

        let request = TravelCheckinRequest::new("taipei-101", 25.034, 121.5645);
        let outcome = client.create_travel_checkin("tp-1", &request).unwrap();
        assert_eq!(outcome.checkin.unwrap().quest_id, "taipei-101");

        assert_eq!(client.start_travel("tp-1").unwrap().id, 1);

        let breakthrough = client.complete_breakthrough("tp-1").unwrap();
        assert_eq!(breakthrough.pet.unwrap().stage, PetStage::Chick);

        let paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/travel/attractions",
                "/users/tp-1/travel/checkins",
                "/users/tp-1/travel/checkins",
                "/users/tp-1/travel/start",
                "/users/tp-1/travel/breakthrough",
            ]
        );
    }

    #[test]
    fn test_leaderboard_limit_is_sent() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let entries = client_for(&server).level_leaderboard(3).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].value, 20);
        assert_eq!(server.requests()[0].path, "/leaderboard/level?limit=3");
    }

    #[test]
    fn test_user_id_is_encoded_on_the_wire() {
        let server = MockPetServer::start(MockConfig::default()).unwrap();
        let _ = client_for(&server).get_user("tp 1");

        assert_eq!(server.requests()[0].path, "/users/tp%201");
    }
}
