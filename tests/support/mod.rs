#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use hedgebook::adapter::http::ApiServer;
use hedgebook::adapter::sqlite::{create_pool, run_migrations, DbPool, SqliteBetStore};
use hedgebook::adapter::vision::SlipExtractor;
use hedgebook::app::AppState;
use hedgebook::extract::Vocabulary;
use hedgebook::port::BetStore;
use hedgebook::testkit::vision::ScriptedVision;

/// Temporary SQLite database for integration tests.
///
/// A pooled `:memory:` database is a different database on every
/// connection, so tests run against a real file that is removed on
/// drop.
pub struct TempDb {
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        path.push(format!("hedgebook-{name}-{nanos}.db"));

        let pool = create_pool(&path.display().to_string()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        Self { path, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteBetStore {
        SqliteBetStore::new(self.pool.clone())
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Router over a fresh temp database and a scripted vision model.
/// Keep the returned `TempDb` alive for the duration of the test.
pub fn test_router(db: &TempDb, vision: ScriptedVision) -> Router {
    let store: Arc<dyn BetStore> = Arc::new(db.store());
    let extractor = Arc::new(SlipExtractor::new(Arc::new(vision), Vocabulary::default()));
    ApiServer::new(AppState::new(store, extractor)).router()
}

/// Minimal bytes that pass image sniffing as a PNG.
pub fn fake_png_base64() -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0; 16]);
    STANDARD.encode(bytes)
}
