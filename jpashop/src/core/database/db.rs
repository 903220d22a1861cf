use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, PoolError, PooledConnection};
use tracing::{error, info};

use crate::core::env::app_env::AppEnv;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
pub type DbPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub fn establish_connection(env: &AppEnv) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(&env.db_uri.0);

    let pool = r2d2::Pool::builder()
        .max_size(env.db_pool_size)
        .build(manager)
        .inspect_err(|e| error!("Failed to create pool: {}", e))?;

    info!("Connected to database (pool size {})", env.db_pool_size);

    Ok(pool)
}
