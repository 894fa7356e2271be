use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use crate::scene::MeshData;

use super::{parse_gltf, AssetError, AssetSource, Fetcher, NetFetcher};

/// Fetches and flattens a glTF asset on the calling thread.
pub fn load_mesh(source: &AssetSource, fetcher: &dyn Fetcher) -> Result<MeshData, AssetError> {
    let started = Instant::now();
    let bytes = fetcher.fetch(source)?;
    let mesh = parse_gltf(&bytes, source, fetcher)?;
    log::info!(
        "loaded {source}: {} triangles in {:.0?}",
        mesh.triangle_count(),
        started.elapsed()
    );
    Ok(mesh)
}

/// Runs [`load_mesh`] on a background thread.
///
/// The render loop calls [`poll`](Self::poll) once per frame; the result is
/// handed over exactly once.
pub struct AssetLoader {
    rx: Option<Receiver<Result<MeshData, AssetError>>>,
}

impl AssetLoader {
    /// Starts loading `source` with a [`NetFetcher`].
    pub fn spawn(source: AssetSource) -> Self {
        Self::spawn_with(source, NetFetcher::new)
    }

    /// Starts loading `source` with a fetcher built on the loader thread.
    pub fn spawn_with<F, M>(source: AssetSource, make_fetcher: M) -> Self
    where
        F: Fetcher,
        M: FnOnce() -> Result<F, AssetError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        log::info!("loading {source}");

        let spawned = thread::Builder::new()
            .name("asset-loader".into())
            .spawn(move || {
                let result = make_fetcher().and_then(|fetcher| load_mesh(&source, &fetcher));
                // The receiver is gone if the viewer already exited.
                let _ = tx.send(result);
            });

        if let Err(e) = spawned {
            log::error!("failed to start asset loader thread: {e}");
        }

        Self { rx: Some(rx) }
    }

    /// Whether a result is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Non-blocking; returns the result the first time it is available.
    pub fn poll(&mut self) -> Option<Result<MeshData, AssetError>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(AssetError::LoaderGone),
        };
        self.rx = None;
        Some(result)
    }
}
