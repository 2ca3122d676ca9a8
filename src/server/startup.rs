use axum::http::{header, HeaderValue, Method};
use time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::seed::SeedService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store on the application database and its session layer.
///
/// Sessions expire after `session_timeout_minutes` without a request. The store is
/// returned separately so the cleanup job can purge expired rows.
///
/// # Returns
/// - `Ok((SessionManagerLayer, SqliteStore))` - Layer for the router and the backing store
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(SessionManagerLayer<SqliteStore>, SqliteStore), AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store.clone())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_timeout_minutes,
        )));

    Ok((session_layer, session_store))
}

/// Ensures the default staff and admin accounts exist.
///
/// # Returns
/// - `Ok(())` - Default accounts present
/// - `Err(AppError)` - Database or hashing error
pub async fn seed_default_accounts(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let created = SeedService::new(db)
        .seed_default_accounts(&config.default_staff_password, &config.default_admin_password)
        .await?;

    if created > 0 {
        tracing::info!("Created {} default staff account(s)", created);
    }

    Ok(())
}

/// Builds the CORS layer from the configured origins.
///
/// With no origins configured any origin is allowed, without credentials. Listed
/// origins are allowed with credentials so the session cookie is sent cross-origin.
/// Origins that are not valid header values are skipped with a warning.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
}
