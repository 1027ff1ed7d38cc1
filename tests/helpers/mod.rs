use anyhow::Result;
use notecli::domain::{Note, NoteDraft};
use serde_json::json;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Build a note for seeding the test server.
#[allow(dead_code)]
pub fn note(id: i64, title: &str, body: &str, tags: &[&str]) -> Note {
    Note {
        id,
        title: title.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// In-process stand-in for the notes backend.
///
/// Serves the HTTP contract the repository client speaks (GET/POST /notes,
/// GET/PUT/DELETE /notes/{id}) from an in-memory store, one connection at a
/// time on a loopback port. Each response closes its connection.
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    base_url: String,
    store: Arc<Mutex<Store>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

struct Store {
    notes: Vec<Note>,
    next_id: i64,
    // When set, GET /notes answers 200 with a body that is not JSON
    broken_json: bool,
}

#[allow(dead_code)]
impl TestServer {
    pub fn start() -> Result<Self> {
        Self::launch(Vec::new(), false)
    }

    pub fn with_notes(notes: Vec<Note>) -> Result<Self> {
        Self::launch(notes, false)
    }

    /// A server whose list endpoint returns an unparseable body.
    pub fn with_broken_json() -> Result<Self> {
        Self::launch(Vec::new(), true)
    }

    fn launch(notes: Vec<Note>, broken_json: bool) -> Result<Self> {
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let store = Arc::new(Mutex::new(Store {
            notes,
            next_id,
            broken_json,
        }));
        let shutdown = Arc::new(AtomicBool::new(false));

        let handle = {
            let store = Arc::clone(&store);
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || serve(listener, store, shutdown))
        };

        Ok(Self {
            addr,
            base_url: format!("http://{addr}"),
            store,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ids currently held by the store, for direct assertions.
    pub fn note_ids(&self) -> Vec<i64> {
        let store = self.store.lock().expect("store poisoned");
        store.notes.iter().map(|note| note.id).collect()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Unblock the accept loop
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn serve(listener: TcpListener, store: Arc<Mutex<Store>>, shutdown: Arc<AtomicBool>) {
    for stream in listener.incoming() {
        if shutdown.load(Ordering::SeqCst) {
            break;
        }
        let Ok(stream) = stream else { break };
        let _ = handle_connection(stream, &store);
    }
}

fn handle_connection(mut stream: TcpStream, store: &Arc<Mutex<Store>>) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let target = parts.next().unwrap_or("").to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        if line.trim_end().is_empty() {
            break;
        }
        let lower = line.to_ascii_lowercase();
        if let Some(value) = lower.trim_end().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;

    let (status, payload) = route(&method, &target, &body, store);
    write_response(&mut stream, status, payload)
}

fn route(
    method: &str,
    target: &str,
    body: &[u8],
    store: &Arc<Mutex<Store>>,
) -> (u16, Option<String>) {
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };
    let mut store = store.lock().expect("store poisoned");

    match (method, path) {
        ("GET", "/notes") => {
            if store.broken_json {
                return (200, Some("this is not json".to_string()));
            }
            let filter = tags_from_query(query);
            let notes: Vec<&Note> = store
                .notes
                .iter()
                .filter(|note| filter.iter().all(|tag| note.tags.contains(tag)))
                .collect();
            (200, Some(to_json(&notes)))
        }
        ("POST", "/notes") => match serde_json::from_slice::<NoteDraft>(body) {
            Ok(draft) => {
                let id = store.next_id;
                store.next_id += 1;
                let created = Note {
                    id,
                    title: draft.title,
                    body: draft.body,
                    tags: draft.tags,
                };
                store.notes.push(created.clone());
                (201, Some(to_json(&created)))
            }
            Err(_) => (422, Some(json!({"detail": "Invalid body"}).to_string())),
        },
        (method, path) => {
            let Some(id) = path
                .strip_prefix("/notes/")
                .and_then(|rest| rest.parse::<i64>().ok())
            else {
                return (404, Some(json!({"detail": "Not found"}).to_string()));
            };
            match method {
                "GET" => match store.notes.iter().find(|note| note.id == id) {
                    Some(found) => (200, Some(to_json(found))),
                    None => not_found(),
                },
                "PUT" => match serde_json::from_slice::<NoteDraft>(body) {
                    Ok(draft) => match store.notes.iter_mut().find(|note| note.id == id) {
                        Some(found) => {
                            found.title = draft.title;
                            found.body = draft.body;
                            found.tags = draft.tags;
                            let updated = found.clone();
                            (200, Some(to_json(&updated)))
                        }
                        None => not_found(),
                    },
                    Err(_) => (422, Some(json!({"detail": "Invalid body"}).to_string())),
                },
                "DELETE" => match store.notes.iter().position(|note| note.id == id) {
                    Some(position) => {
                        store.notes.remove(position);
                        (204, None)
                    }
                    None => not_found(),
                },
                _ => (405, Some(json!({"detail": "Method not allowed"}).to_string())),
            }
        }
    }
}

fn not_found() -> (u16, Option<String>) {
    (404, Some(json!({"detail": "Note not found"}).to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("fixture data should serialize")
}

fn tags_from_query(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };
    query
        .split('&')
        .filter_map(|pair| pair.strip_prefix("tags="))
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
        .collect()
}

fn write_response(stream: &mut TcpStream, status: u16, payload: Option<String>) -> Result<()> {
    let reason = match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        404 => "Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        _ => "",
    };
    let mut response = format!("HTTP/1.1 {status} {reason}\r\nConnection: close\r\n");
    match payload {
        Some(payload) => {
            response.push_str(&format!(
                "Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{payload}",
                payload.len()
            ));
        }
        None => response.push_str("Content-Length: 0\r\n\r\n"),
    }
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
