#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Condvar, Mutex, Once},
    thread,
    time::Duration,
};

static BYPASS_PROXY: Once = Once::new();

/// Loopback stand-in for the placeholder image service.
///
/// `GET /<size>` answers `200` with the body `icon-<size>` unless `<size>` is listed as
/// failing, in which case it answers `500`.
pub struct IconServer {
    pub base_url: String,
}

/// Holds every response until `expected` requests are open at the same time.
///
/// A request still waiting after `patience` gets a `500`, so a client that fetches one
/// icon after the other never gets past its first download.
struct Gate {
    arrived: Mutex<usize>,
    all_arrived: Condvar,
    expected: usize,
    patience: Duration,
}
impl Gate {
    fn wait(&self) -> bool {
        let mut arrived = self.arrived.lock().unwrap();
        *arrived += 1;
        self.all_arrived.notify_all();

        let (arrived, _) = self
            .all_arrived
            .wait_timeout_while(arrived, self.patience, |arrived| *arrived < self.expected)
            .unwrap();

        *arrived >= self.expected
    }
}

#[derive(Clone)]
struct Behavior {
    failing: Vec<String>,
    gate: Option<Arc<Gate>>,
}
impl IconServer {
    pub fn start() -> Self {
        Self::start_failing(&[])
    }
    pub fn start_failing(failing: &[&str]) -> Self {
        Self::serve(Behavior {
            failing: failing.iter().map(|path| path.to_string()).collect(),
            gate: None,
        })
    }
    /// Only answers once `expected` requests are in flight together.
    pub fn start_gated(expected: usize) -> Self {
        Self::serve(Behavior {
            failing: Vec::new(),
            gate: Some(Arc::new(Gate {
                arrived: Mutex::new(0),
                all_arrived: Condvar::new(),
                expected,
                patience: Duration::from_secs(5),
            })),
        })
    }
    fn serve(behavior: Behavior) -> Self {
        bypass_proxy();

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let behavior = behavior.clone();
                thread::spawn(move || respond(stream, &behavior));
            }
        });

        Self {
            base_url: format!("http://{}", address),
        }
    }
}

/// reqwest picks up HTTP_PROXY from the environment, keep loopback traffic direct.
pub fn bypass_proxy() {
    BYPASS_PROXY.call_once(|| {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        std::env::set_var("no_proxy", "127.0.0.1,localhost");
    });
}

pub fn icon_body(size: u32) -> Vec<u8> {
    format!("icon-{}", size).into_bytes()
}

fn respond(mut stream: TcpStream, behavior: &Behavior) {
    let Ok(reader_stream) = stream.try_clone() else {
        return;
    };
    let mut reader = BufReader::new(reader_stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain headers
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .trim_start_matches('/')
        .to_string();

    let released = behavior.gate.as_ref().map_or(true, |gate| gate.wait());

    let (status, body) = if !released || behavior.failing.contains(&path) {
        ("500 Internal Server Error", b"boom".to_vec())
    } else {
        ("200 OK", format!("icon-{}", path).into_bytes())
    };

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}
