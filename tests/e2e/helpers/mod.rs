use anyhow::Result;
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use translator_backend::app::build_controllers;
use translator_backend::infrastructure::config::{
    Config, Environment, LogFormat, SttConfig, TranslateConfig, TtsConfig, TtsProvider,
};
use translator_backend::infrastructure::http::build_router;
use wiremock::MockServer;

pub mod api_client;
pub mod vendor_mocks;

use api_client::TestClient;
use db_pool::{DatabasePool, PooledDatabase};
use fixtures::TestFixtures;

// Docker client for test containers
static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// Shared PostgreSQL container for all tests
static SHARED_CONTAINER: Lazy<SharedContainer> = Lazy::new(|| SharedContainer::new());

// Global database pool
static DB_POOL: Lazy<DatabasePool> = Lazy::new(|| DatabasePool::new(SHARED_CONTAINER.port));

/// Shared container that lives for the duration of all tests
struct SharedContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

impl SharedContainer {
    fn new() -> Self {
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        println!("🐳 Started shared PostgreSQL container on port {}", port);

        Self {
            _container: container,
            port,
        }
    }
}

/// Wiremock servers standing in for the external vendors
pub struct VendorServers {
    pub translate: MockServer,
    pub stt: MockServer,
    pub tts: MockServer,
}

impl VendorServers {
    async fn start() -> Self {
        Self {
            translate: MockServer::start().await,
            stt: MockServer::start().await,
            tts: MockServer::start().await,
        }
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub pool: PgPool,
    pub config: Config,
    pub vendors: VendorServers,
    pub fixtures: TestFixtures,
    _db: PooledDatabase,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            // Get a database from the shared pool
            let pooled_db = DB_POOL
                .get_database()
                .await
                .expect("Failed to get database from pool");

            let vendors = VendorServers::start().await;
            let config = test_config(&pooled_db.database_url, &vendors);

            let client = spawn_app(&config, pooled_db.pool.clone())
                .await
                .expect("Failed to start app");
            let fixtures = TestFixtures::new(pooled_db.pool.clone());

            Self {
                client,
                pool: pooled_db.pool.clone(),
                config,
                vendors,
                fixtures,
                _db: pooled_db,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Database cleanup happens automatically via Drop on PooledDatabase
        }
    }
}

impl TestContext {
    /// A second server on the same database with every vendor key removed
    pub async fn unconfigured_client(&self) -> TestClient {
        let mut config = self.config.clone();
        config.translate.google_api_key = None;
        config.stt.assemblyai_api_key = None;
        config.tts.voicerss_api_key = None;

        spawn_app(&config, self.pool.clone())
            .await
            .expect("Failed to start unconfigured app")
    }
}

fn test_config(database_url: &str, vendors: &VendorServers) -> Config {
    Config {
        database_url: database_url.to_string(),
        db_max_connections: 5,
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        http_timeout_secs: 5,
        translate: TranslateConfig {
            google_api_key: Some("test-google-key".to_string()),
            google_base_url: vendors.translate.uri(),
            max_chars: 30_000,
        },
        stt: SttConfig {
            assemblyai_api_key: Some("test-assemblyai-key".to_string()),
            assemblyai_base_url: vendors.stt.uri(),
            poll_interval_ms: 10,
            poll_max_attempts: 3,
            max_upload_bytes: 1024 * 1024,
        },
        tts: TtsConfig {
            provider: TtsProvider::VoiceRss,
            max_chars: 5000,
            cache_enabled: false, // Disable cache in tests to avoid test pollution
            voicerss_api_key: Some("test-voicerss-key".to_string()),
            voicerss_base_url: vendors.tts.uri(),
            playai_api_key: None,
            playai_user_id: None,
            playai_base_url: vendors.tts.uri(),
            playai_poll_interval_ms: 10,
            playai_poll_max_attempts: 3,
            speechify_api_key: None,
            speechify_base_url: vendors.tts.uri(),
            elevenlabs_api_key: None,
            elevenlabs_base_url: vendors.tts.uri(),
            elevenlabs_model_id: "eleven_multilingual_v2".to_string(),
        },
    }
}

async fn spawn_app(config: &Config, pool: PgPool) -> Result<TestClient> {
    let controllers = build_controllers(config, Arc::new(pool))?;
    let app = build_router(controllers, config.stt.max_upload_bytes);

    // Start server
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to be ready
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    Ok(TestClient::new(&base_url))
}
