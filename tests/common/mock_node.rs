use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Scripted reply for one expected call of a method.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Result(Value),
    Error { code: i64, message: String },
}

#[derive(Clone)]
struct MockNodeState {
    scripts: Arc<Mutex<HashMap<String, VecDeque<ScriptedResponse>>>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// In-process stand-in for a node. Replies to each method with its scripted
/// responses in FIFO order and records every request body it receives. The
/// serving task lives until the test runtime shuts down.
pub struct BackgroundNode {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl BackgroundNode {
    pub async fn start(scripts: Vec<(&str, ScriptedResponse)>) -> Self {
        let mut scripted: HashMap<String, VecDeque<ScriptedResponse>> = HashMap::new();
        for (method, response) in scripts {
            scripted.entry(method.to_string()).or_default().push_back(response);
        }

        let state = MockNodeState {
            scripts: Arc::new(Mutex::new(scripted)),
            requests: Arc::new(Mutex::new(vec![])),
        };
        let requests = state.requests.clone();

        let router = Router::new().route("/", post(handle_rpc)).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router.into_make_service()).await.unwrap();
        });

        Self { url, requests }
    }

    /// Request bodies in the order the node received them.
    pub async fn recorded_requests(&self) -> Vec<Value> {
        self.requests.lock().await.clone()
    }
}

async fn handle_rpc(State(state): State<MockNodeState>, Json(request): Json<Value>) -> Json<Value> {
    state.requests.lock().await.push(request.clone());

    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();

    let mut scripts = state.scripts.lock().await;
    let known_method = scripts.contains_key(&method);
    let scripted = scripts.get_mut(&method).and_then(VecDeque::pop_front);
    drop(scripts);

    let response = match scripted {
        Some(ScriptedResponse::Result(result)) => {
            json!({ "jsonrpc": "2.0", "id": id, "result": result })
        }
        Some(ScriptedResponse::Error { code, message }) => {
            json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
        }
        None => {
            let (code, message) = if known_method {
                (-32000, format!("No scripted response left for method {method}"))
            } else {
                (-32601, format!("Method not found: {method}"))
            };
            json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
        }
    };

    Json(response)
}
