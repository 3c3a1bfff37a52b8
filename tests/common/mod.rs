//! Common test utilities
//!
//! Provides a stateful in-process mock of the profile service so integration
//! tests can exercise the public client API without a real installation. The
//! mock also answers `GET /json/version`, letting it stand in for a launched
//! browser's CDP endpoint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

struct ServiceState {
    base_url: String,
    profiles: HashMap<String, Value>,
    cookies: HashMap<String, Value>,
    next_id: u32,
}

/// Mock profile service
pub struct MockProfileService {
    /// Base URL the client should be pointed at
    pub base_url: String,
    state: Arc<Mutex<ServiceState>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockProfileService {
    /// Start a new mock service on an ephemeral port
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        let state = Arc::new(Mutex::new(ServiceState {
            base_url: base_url.clone(),
            profiles: HashMap::new(),
            cookies: HashMap::new(),
            next_id: 1,
        }));

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let loop_state = state.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        match result {
                            Ok((stream, peer_addr)) => {
                                tracing::debug!("Mock service: connection from {}", peer_addr);
                                tokio::spawn(Self::handle_connection(stream, loop_state.clone()));
                            }
                            Err(e) => {
                                tracing::error!("Mock service: accept error: {}", e);
                                break;
                            }
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Mock service: shutdown signal received");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            base_url,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Number of profiles currently stored
    pub fn profile_count(&self) -> usize {
        self.state.lock().unwrap().profiles.len()
    }

    /// Stop the mock service
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }

    async fn handle_connection(mut stream: TcpStream, state: Arc<Mutex<ServiceState>>) {
        let Some((method, path, body)) = read_request(&mut stream).await else {
            return;
        };

        let (code, payload) = route(&method, &path, &body, &state);
        let reason = match code {
            200 => "OK",
            404 => "Not Found",
            _ => "Error",
        };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            code,
            reason,
            payload.len(),
            payload
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }
}

impl Drop for MockProfileService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Read one HTTP request, returning method, path and raw body
async fn read_request(stream: &mut TcpStream) -> Option<(String, String, String)> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut request_line = headers.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let mut body = buffer[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some((method, path, String::from_utf8_lossy(&body).to_string()))
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|w| w == b"\r\n\r\n")
}

fn route(
    method: &str,
    path: &str,
    body: &str,
    state: &Arc<Mutex<ServiceState>>,
) -> (u16, String) {
    let mut state = state.lock().unwrap();

    match (method, path) {
        ("GET", "/json/version") => (200, json!({"Browser": "Chrome/120.0.0.0"}).to_string()),

        ("GET", "/profile/all") => {
            let profiles: Vec<Value> = state
                .profiles
                .iter()
                .map(|(id, data)| stored_to_profile(id, data))
                .collect();
            (200, json!({"profiles": profiles, "status": "ok"}).to_string())
        }

        ("POST", "/profile/add") => {
            // The create route uses the profileData form envelope
            let Some(encoded) = body.strip_prefix("profileData=") else {
                return (400, error_body("Missing profileData envelope"));
            };
            let decoded = match urlencoding::decode(encoded) {
                Ok(d) => d.into_owned(),
                Err(_) => return (400, error_body("Malformed profileData envelope")),
            };
            let Ok(data) = serde_json::from_str::<Value>(&decoded) else {
                return (400, error_body("profileData is not valid JSON"));
            };

            let id = format!("mock-profile-{}", state.next_id);
            state.next_id += 1;
            state.profiles.insert(id.clone(), data);
            (
                200,
                json!({"profile_browser_id": id, "status": "ok"}).to_string(),
            )
        }

        ("POST", "/profile/update") => {
            let Ok(request) = serde_json::from_str::<Value>(body) else {
                return (400, error_body("Malformed update request"));
            };
            let Some(id) = request["profile_browser_id"].as_str().map(str::to_string) else {
                return (400, error_body("Missing profile_browser_id"));
            };
            let Some(stored) = state.profiles.get_mut(&id) else {
                return (404, error_body("Profile not found"));
            };

            if let Some(changes) = request["profileData"].as_object() {
                for (key, value) in changes {
                    stored[key] = value.clone();
                }
            }
            (200, ok_body("profile updated"))
        }

        ("POST", "/profile/addCookie") => {
            let Ok(request) = serde_json::from_str::<Value>(body) else {
                return (400, error_body("Malformed cookie request"));
            };
            let Some(id) = request["profile_browser_id"].as_str().map(str::to_string) else {
                return (400, error_body("Missing profile_browser_id"));
            };
            state.cookies.insert(id, request.clone());
            // The import payload is echoed back as confirmation
            (200, request.to_string())
        }

        ("POST", "/automation/launch/puppeteer") => {
            let Ok(request) = serde_json::from_str::<Value>(body) else {
                return (400, error_body("Malformed launch request"));
            };
            if request["profileID"].as_str().is_none() {
                return (400, error_body("Missing profileID"));
            }
            // The mock doubles as the launched browser's CDP endpoint
            (
                200,
                json!({"puppeteerUrl": state.base_url, "status": "ok"}).to_string(),
            )
        }

        _ => route_with_id(method, path, &mut state),
    }
}

/// Routes with a trailing profile id segment
fn route_with_id(method: &str, path: &str, state: &mut ServiceState) -> (u16, String) {
    if method != "GET" {
        return (404, error_body("Unknown route"));
    }

    if let Some(id) = path.strip_prefix("/profile/get/") {
        return match state.profiles.get(id) {
            Some(data) => (
                200,
                json!({"profileData": stored_to_profile(id, data), "status": "ok"}).to_string(),
            ),
            None => (404, error_body("Profile not found")),
        };
    }
    if let Some(rest) = path.strip_prefix("/profile/launch/") {
        let id = rest.split('/').next().unwrap_or(rest);
        return match state.profiles.contains_key(id) {
            true => (200, ok_body("profile launched")),
            false => (404, error_body("Profile not found")),
        };
    }
    if let Some(id) = path.strip_prefix("/profile/status/") {
        return match state.profiles.contains_key(id) {
            true => (200, json!({"status": "Ready"}).to_string()),
            false => (404, error_body("Profile not found")),
        };
    }
    if path.strip_prefix("/profile/stop/").is_some() {
        return (200, ok_body("profile stopped"));
    }
    if let Some(id) = path.strip_prefix("/profile/delete/") {
        return match state.profiles.remove(id) {
            Some(_) => (200, ok_body("profile deleted")),
            None => (404, error_body("Profile not found")),
        };
    }
    if let Some(id) = path.strip_prefix("/profile/cookie/") {
        let cookies = state
            .cookies
            .get(id)
            .and_then(|request| decode_cookie_payload(request))
            .unwrap_or_else(|| json!([]));
        return (
            200,
            json!({"CookieData": cookies, "status": "ok"}).to_string(),
        );
    }
    if let Some(id) = path.strip_prefix("/profile/deleteCookie/") {
        state.cookies.remove(id);
        return (200, ok_body("cookies deleted"));
    }

    (404, error_body("Unknown route"))
}

/// Expand a stored create payload into the full profile wire shape
fn stored_to_profile(id: &str, data: &Value) -> Value {
    let mut general = data
        .get("general_profile_information")
        .cloned()
        .unwrap_or_else(|| json!({"profile_name": ""}));
    general["browser_id"] = json!(id);

    let mut profile = json!({"general_profile_information": general});
    for section in ["Proxy", "Timezone", "WebRTC", "Navigator", "Other"] {
        if let Some(value) = data.get(section) {
            profile[section] = value.clone();
        }
    }
    profile
}

fn decode_cookie_payload(request: &Value) -> Option<Value> {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    let raw = BASE64.decode(request["cookie"].as_str()?).ok()?;
    serde_json::from_slice(&raw).ok()
}

fn ok_body(message: &str) -> String {
    json!({"message": message, "status": "ok"}).to_string()
}

fn error_body(message: &str) -> String {
    json!({"message": message, "status": "error"}).to_string()
}
