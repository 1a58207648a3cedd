use std::{
    net::{TcpStream, ToSocketAddrs},
    path::{Path, PathBuf},
    time::Duration,
};

use url::Url;

use crate::{append_startup_log, ShellError, DEV_SERVER_URL};

/// Where the window's content comes from. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentTarget {
    DevServer { endpoint: String },
    Packaged { index_path: PathBuf },
}

impl ContentTarget {
    pub(crate) fn is_development(&self) -> bool {
        matches!(self, Self::DevServer { .. })
    }

    pub(crate) fn location(&self) -> String {
        match self {
            Self::DevServer { endpoint } => endpoint.clone(),
            Self::Packaged { index_path } => format!("file://{}", index_path.display()),
        }
    }

    /// Directory the packaged bundle is served from.
    pub(crate) fn content_root(&self) -> Option<&Path> {
        match self {
            Self::DevServer { .. } => None,
            Self::Packaged { index_path } => index_path.parent(),
        }
    }

    pub(crate) fn dev_endpoint(&self) -> Result<Option<Url>, ShellError> {
        match self {
            Self::DevServer { endpoint } => Ok(Some(Url::parse(endpoint)?)),
            Self::Packaged { .. } => Ok(None),
        }
    }

    /// Checks that the target can currently serve content. Blocking.
    pub(crate) fn probe(&self, timeout: Duration) -> Result<(), ShellError> {
        match self {
            Self::DevServer { endpoint } => probe_endpoint(endpoint, timeout),
            Self::Packaged { index_path } => {
                if index_path.is_file() {
                    Ok(())
                } else {
                    Err(ShellError::content_unavailable(
                        self.location(),
                        "packaged index file is missing",
                    ))
                }
            }
        }
    }
}

fn probe_endpoint(endpoint: &str, timeout: Duration) -> Result<(), ShellError> {
    let parsed = Url::parse(endpoint)?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ShellError::content_unavailable(endpoint, "endpoint has no host"))?
        .to_string();
    let port = parsed.port_or_known_default().unwrap_or(80);
    let timeout = timeout.max(Duration::from_millis(50));

    let addrs = (host.as_str(), port)
        .to_socket_addrs()
        .map_err(|error| ShellError::content_unavailable(endpoint, error.to_string()))?
        .collect::<Vec<_>>();
    if addrs
        .iter()
        .any(|address| TcpStream::connect_timeout(address, timeout).is_ok())
    {
        return Ok(());
    }

    Err(ShellError::content_unavailable(
        endpoint,
        format!("nothing is listening on {host}:{port}"),
    ))
}

/// Development when the packaged index is absent, production otherwise.
pub(crate) fn resolve_content_target(build_index: Option<&Path>) -> ContentTarget {
    let artifact_exists = build_index.is_some_and(Path::is_file);
    let target = match build_index {
        Some(index_path) if artifact_exists => ContentTarget::Packaged {
            index_path: index_path.to_path_buf(),
        },
        _ => ContentTarget::DevServer {
            endpoint: DEV_SERVER_URL.to_string(),
        },
    };

    append_startup_log(&format!("content target: {}", target.location()));
    append_startup_log(&format!("development mode: {}", target.is_development()));
    append_startup_log(&format!(
        "build artifact {} exists: {artifact_exists}",
        build_index
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<unresolved>".to_string())
    ));
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, net::TcpListener};

    #[test]
    fn missing_artifact_resolves_to_dev_server() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let index = dir.path().join("build").join("index.html");

        let target = resolve_content_target(Some(&index));
        assert!(target.is_development());
        assert_eq!(target.location(), "http://localhost:3000");
        assert_eq!(target.content_root(), None);
    }

    #[test]
    fn unresolved_artifact_path_resolves_to_dev_server() {
        assert!(resolve_content_target(None).is_development());
    }

    #[test]
    fn present_artifact_resolves_to_packaged_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let index = dir.path().join("index.html");
        fs::write(&index, "<html></html>").expect("write index");

        let target = resolve_content_target(Some(&index));
        assert!(!target.is_development());
        assert_eq!(target.location(), format!("file://{}", index.display()));
        assert_eq!(target.content_root(), Some(dir.path()));
    }

    #[test]
    fn toggling_artifact_presence_toggles_decision() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let index = dir.path().join("index.html");

        assert!(resolve_content_target(Some(&index)).is_development());
        fs::write(&index, "<html></html>").expect("write index");
        assert!(!resolve_content_target(Some(&index)).is_development());
        fs::remove_file(&index).expect("remove index");
        assert!(resolve_content_target(Some(&index)).is_development());
    }

    #[test]
    fn directory_in_place_of_artifact_is_not_packaged_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let index = dir.path().join("index.html");
        fs::create_dir_all(&index).expect("create dir");

        assert!(resolve_content_target(Some(&index)).is_development());
    }

    #[test]
    fn probe_packaged_target_requires_index_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let index = dir.path().join("index.html");
        let target = ContentTarget::Packaged {
            index_path: index.clone(),
        };

        assert!(matches!(
            target.probe(Duration::from_millis(100)),
            Err(ShellError::ContentUnavailable { .. })
        ));
        fs::write(&index, "<html></html>").expect("write index");
        assert!(target.probe(Duration::from_millis(100)).is_ok());
    }

    #[test]
    fn probe_dev_target_reports_listening_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
        let port = listener.local_addr().expect("local addr").port();
        let target = ContentTarget::DevServer {
            endpoint: format!("http://127.0.0.1:{port}"),
        };
        assert!(target.probe(Duration::from_millis(500)).is_ok());

        drop(listener);
        assert!(matches!(
            target.probe(Duration::from_millis(200)),
            Err(ShellError::ContentUnavailable { .. })
        ));
    }
}
