//! Embedded server helper for running the API inside another process (e.g. GUI).

use crate::{resolve_bind_address, AppError, AppState};
use std::{
    net::SocketAddr,
    sync::mpsc,
    thread::{self, JoinHandle},
};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Handle to an embedded API server running on a background thread.
///
/// Dropping the handle shuts the server down and joins the thread.
pub struct EmbeddedServer {
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
    addr: SocketAddr,
    used_fallback: bool,
}

/// Bind the server socket, retrying on an auto-assigned port when the
/// requested address is already taken.
///
/// # Returns
/// The bound listener and whether the auto-port fallback was used.
fn bind_listener(rt: &Runtime, bind_addr: SocketAddr) -> Result<(TcpListener, bool), String> {
    match rt.block_on(TcpListener::bind(bind_addr)) {
        Ok(listener) => Ok((listener, false)),
        Err(err) if err.kind() == std::io::ErrorKind::AddrInUse => {
            warn!(
                "API bind address {} is in use; falling back to an auto port",
                bind_addr
            );
            let fallback_addr = SocketAddr::new(bind_addr.ip(), 0);
            rt.block_on(TcpListener::bind(fallback_addr))
                .map(|listener| (listener, true))
                .map_err(|err| format!("failed to bind server socket: {}", err))
        }
        Err(err) => Err(format!("failed to bind server socket: {}", err)),
    }
}

impl EmbeddedServer {
    /// Start the API server on a background thread and wait until it is bound.
    ///
    /// The bind target comes from `BIND` or `127.0.0.1:PORT`, subject to the
    /// loopback policy in [`resolve_bind_address`].
    ///
    /// # Errors
    /// Returns an error when the runtime cannot start or no socket can be
    /// bound.
    pub fn start(state: AppState, allow_public: bool) -> Result<Self, AppError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("tabdeck-embedded-server".into())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(err) => {
                        let _ = ready_tx.send(Err(format!("failed to start runtime: {}", err)));
                        return;
                    }
                };

                let bind_addr = resolve_bind_address(&state.config, allow_public);
                let (listener, used_fallback) = match bind_listener(&rt, bind_addr) {
                    Ok(bound) => bound,
                    Err(message) => {
                        let _ = ready_tx.send(Err(message));
                        return;
                    }
                };

                let actual_addr = listener.local_addr().unwrap_or(bind_addr);
                if used_fallback {
                    warn!(
                        "API listening on http://{} (auto port; {} was in use)",
                        actual_addr, bind_addr
                    );
                } else {
                    info!("API listening on http://{}", actual_addr);
                }
                let _ = ready_tx.send(Ok((actual_addr, used_fallback)));

                let shutdown = async {
                    let _ = shutdown_rx.await;
                };

                if let Err(err) =
                    rt.block_on(crate::serve_router(listener, state, allow_public, shutdown))
                {
                    warn!("server error: {}", err);
                }
            })
            .map_err(|err| AppError::Server(format!("failed to spawn server: {}", err)))?;

        let (addr, used_fallback) = ready_rx
            .recv()
            .map_err(|_| AppError::Server("server thread exited before ready".to_string()))?
            .map_err(AppError::Server)?;

        Ok(Self {
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
            addr,
            used_fallback,
        })
    }

    /// Address the embedded server is actually listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Whether the server fell back to an auto-assigned port.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }
}

impl Drop for EmbeddedServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("embedded server thread panicked during shutdown");
            }
        }
    }
}
