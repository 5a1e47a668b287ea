//! Download-if-missing for cached dataset files.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::AppError;
use crate::progress::ProgressCallback;

/// Bytes read from the response body per write.
pub const CHUNK_SIZE: usize = 1024;

/// Transfers a single URL to a local path.
///
/// Implementations write the complete body to `dest` or return an error;
/// [`ensure_local`] takes care of the skip check and partial-file cleanup.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path, progress: &dyn ProgressCallback) -> Result<(), AppError>;
}

/// Streaming HTTP GET over a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
    chunk_size: usize,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Use a preconfigured client (proxies, timeouts, TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path, progress: &dyn ProgressCallback) -> Result<(), AppError> {
        let mut resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::network(format!("Request to {url} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::network(format!(
                "Request to {url} failed with status {}.",
                resp.status()
            )));
        }

        // No declared length: the indicator stays indeterminate.
        if let Some(total) = resp.content_length() {
            progress.set_total(total);
        }

        let file = File::create(dest)
            .map_err(|e| AppError::io(format!("Failed to create '{}': {e}", dest.display())))?;
        let mut out = BufWriter::new(file);
        let mut buf = vec![0u8; self.chunk_size];
        let mut written = 0u64;

        loop {
            let n = resp
                .read(&mut buf)
                .map_err(|e| AppError::network(format!("Failed reading body of {url}: {e}")))?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])
                .map_err(|e| AppError::io(format!("Failed to write '{}': {e}", dest.display())))?;
            written += n as u64;
            progress.inc(n as u64);
        }

        out.flush()
            .map_err(|e| AppError::io(format!("Failed to flush '{}': {e}", dest.display())))?;

        debug!("Wrote {written} bytes to {}", dest.display());
        Ok(())
    }
}

/// Make sure `dest` exists locally, downloading `url` if it does not.
///
/// When `dest` already exists the fetcher is never called. Otherwise the
/// parent directory is created and the body is streamed into a sibling
/// `.part` file that is renamed onto `dest` once complete. On failure the
/// `.part` file is removed, so `dest` only ever appears fully written.
pub fn ensure_local(
    fetcher: &dyn Fetcher,
    url: &str,
    dest: &Path,
    progress: &dyn ProgressCallback,
) -> Result<(), AppError> {
    if dest.exists() {
        debug!("{} already present, skipping download", dest.display());
        return Ok(());
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::io(format!("Failed to create directory '{}': {e}", parent.display()))
        })?;
    }

    info!("Downloading {url}");
    let part = partial_path(dest);

    if let Err(err) = fetcher.fetch(url, &part, progress) {
        progress.finish_and_clear();
        let _ = fs::remove_file(&part);
        return Err(err);
    }

    fs::rename(&part, dest).map_err(|e| {
        let _ = fs::remove_file(&part);
        AppError::io(format!("Failed to move download into '{}': {e}", dest.display()))
    })?;

    progress.finish(format!("Downloaded {}", dest.display()));
    Ok(())
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::{BufRead, BufReader};
    use std::net::TcpListener;
    use std::sync::Mutex;
    use std::thread;

    use tempfile::tempdir;

    use crate::error::ErrorKind;
    use crate::progress::NullProgress;

    /// Records every call; writes `body` or fails after a partial write.
    struct StubFetcher {
        body: &'static [u8],
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn ok(body: &'static [u8]) -> Self {
            Self { body, fail: false, calls: RefCell::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { body: b"Date,Bir", fail: true, calls: RefCell::new(Vec::new()) }
        }
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, url: &str, dest: &Path, progress: &dyn ProgressCallback) -> Result<(), AppError> {
            self.calls.borrow_mut().push(url.to_string());
            fs::write(dest, self.body).unwrap();
            progress.inc(self.body.len() as u64);
            if self.fail {
                return Err(AppError::network("connection reset"));
            }
            Ok(())
        }
    }

    #[test]
    fn existing_file_is_not_fetched() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");
        fs::write(&dest, "cached").unwrap();

        let fetcher = StubFetcher::ok(b"fresh");
        ensure_local(&fetcher, "http://example.invalid/daily.csv", &dest, &NullProgress).unwrap();

        assert!(fetcher.calls.borrow().is_empty());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "cached");
    }

    #[test]
    fn missing_file_is_fetched_into_new_directory() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("cache").join("daily.csv");

        let fetcher = StubFetcher::ok(b"Date,Births\n");
        ensure_local(&fetcher, "http://example.invalid/daily.csv", &dest, &NullProgress).unwrap();

        assert_eq!(fetcher.calls.borrow().as_slice(), ["http://example.invalid/daily.csv"]);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "Date,Births\n");
        assert!(!partial_path(&dest).exists());
    }

    #[test]
    fn failed_fetch_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");

        let fetcher = StubFetcher::failing();
        let err = ensure_local(&fetcher, "http://example.invalid/daily.csv", &dest, &NullProgress)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!dest.exists());
        assert!(!partial_path(&dest).exists());

        // A retry by the caller reaches the fetcher again.
        let retry = StubFetcher::ok(b"ok");
        ensure_local(&retry, "http://example.invalid/daily.csv", &dest, &NullProgress).unwrap();
        assert_eq!(retry.calls.borrow().len(), 1);
    }

    /// Remembers what the fetcher reported.
    #[derive(Default)]
    struct RecordingProgress {
        totals: Mutex<Vec<u64>>,
        incs: Mutex<Vec<u64>>,
    }

    impl ProgressCallback for RecordingProgress {
        fn set_total(&self, total: u64) {
            self.totals.lock().unwrap().push(total);
        }
        fn inc(&self, delta: u64) {
            self.incs.lock().unwrap().push(delta);
        }
        fn finish(&self, _msg: String) {}
        fn finish_and_clear(&self) {}
    }

    /// Answer one HTTP request on a loopback port with `response`, then close.
    fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            stream.write_all(&response).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{addr}/daily.csv")
    }

    fn loopback_fetcher() -> HttpFetcher {
        HttpFetcher::with_client(Client::builder().no_proxy().build().unwrap())
    }

    fn csv_body(rows: usize) -> Vec<u8> {
        let mut body = String::from("\"Date\",\"Births\"\n");
        for i in 0..rows {
            body.push_str(&format!("\"1959-01-{:02}\",{}\n", i % 28 + 1, 30 + i % 20));
        }
        body.into_bytes()
    }

    #[test]
    fn http_body_is_streamed_with_declared_length() {
        let body = csv_body(150);
        assert!(body.len() > 2 * CHUNK_SIZE);

        let mut response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(&body);
        let url = serve_once(response);

        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");
        let progress = RecordingProgress::default();
        loopback_fetcher().fetch(&url, &dest, &progress).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), body);
        assert_eq!(*progress.totals.lock().unwrap(), vec![body.len() as u64]);
        let incs = progress.incs.lock().unwrap();
        assert_eq!(incs.iter().sum::<u64>(), body.len() as u64);
        assert!(incs.iter().all(|&n| n > 0 && n <= CHUNK_SIZE as u64));
    }

    #[test]
    fn http_body_without_length_stays_indeterminate() {
        let body = csv_body(10);
        let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
        response.extend_from_slice(&body);
        let url = serve_once(response);

        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");
        let progress = RecordingProgress::default();
        loopback_fetcher().fetch(&url, &dest, &progress).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), body);
        assert!(progress.totals.lock().unwrap().is_empty());
        assert_eq!(progress.incs.lock().unwrap().iter().sum::<u64>(), body.len() as u64);
    }

    #[test]
    fn http_error_status_is_a_network_error() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found".to_vec(),
        );

        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");
        let progress = RecordingProgress::default();
        let err = loopback_fetcher().fetch(&url, &dest, &progress).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("404"));
        assert!(!dest.exists());
        assert!(progress.totals.lock().unwrap().is_empty());
        assert!(progress.incs.lock().unwrap().is_empty());
    }

    #[test]
    fn http_404_through_ensure_local_leaves_no_file() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
        );

        let dir = tempdir().unwrap();
        let dest = dir.path().join("daily.csv");
        let err = ensure_local(&loopback_fetcher(), &url, &dest, &NullProgress).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!dest.exists());
        assert!(!partial_path(&dest).exists());
    }

    #[test]
    fn partial_path_appends_suffix() {
        let p = partial_path(Path::new("data/daily-total-female-births.csv"));
        assert_eq!(p, PathBuf::from("data/daily-total-female-births.csv.part"));
    }
}
