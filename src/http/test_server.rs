use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Which status the server answers with.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StatusPlan {
    Always(u16),
    /// Answer `status` to the `nth` request (1-based) and 200 otherwise.
    FailNth { nth: usize, status: u16 },
}

impl StatusPlan {
    const fn status_for(self, seq: usize) -> u16 {
        match self {
            StatusPlan::Always(status) => status,
            StatusPlan::FailNth { nth, status } => {
                if seq == nth {
                    status
                } else {
                    200
                }
            }
        }
    }
}

#[derive(Debug)]
struct ServerState {
    plan: StatusPlan,
    requests: AtomicUsize,
    captured: Mutex<Vec<(String, String)>>,
}

/// Minimal threaded HTTP/1.1 server that records each request's path and body.
pub(crate) struct TestServer {
    pub(crate) url: String,
    state: Arc<ServerState>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

impl TestServer {
    pub(crate) fn spawn(plan: StatusPlan) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind test server failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("server addr failed: {}", err))?;
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let state = Arc::new(ServerState {
            plan,
            requests: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
        });
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let server_state = Arc::clone(&state);

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                match listener.accept() {
                    Ok((stream, _)) => {
                        let state = Arc::clone(&server_state);
                        thread::spawn(move || handle_client(stream, &state));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            state,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Captured `(path, body)` pairs in arrival order.
    pub(crate) fn captured(&self) -> Vec<(String, String)> {
        self.state
            .captured
            .lock()
            .map(|captured| captured.clone())
            .unwrap_or_default()
    }
}

/// Returns a base URL on which nothing is listening.
pub(crate) fn unused_base_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind probe failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("probe addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

fn handle_client(mut stream: TcpStream, state: &ServerState) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    drop(stream.set_read_timeout(Some(Duration::from_secs(5))));

    let Some((path, body)) = read_request(&mut stream) else {
        return;
    };
    let seq = state
        .requests
        .fetch_add(1, Ordering::SeqCst)
        .saturating_add(1);
    if let Ok(mut captured) = state.captured.lock() {
        captured.push((path, body));
    }

    let status = state.plan.status_for(seq);
    let reason = if status == 200 { "OK" } else { "Test Status" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status, reason
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> Option<(String, String)> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos.saturating_add(4);
        }
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    };

    let head = String::from_utf8_lossy(buffer.get(..header_end)?).into_owned();
    let path = head.lines().next()?.split_whitespace().nth(1)?.to_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let body_end = header_end.saturating_add(content_length);
    while buffer.len() < body_end {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    }

    let body = String::from_utf8_lossy(buffer.get(header_end..body_end)?).into_owned();
    Some((path, body))
}
