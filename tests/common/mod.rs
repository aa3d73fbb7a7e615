use raffle_backend::config::DatabaseConfig;
use raffle_backend::database::{DbPool, create_pool, run_migrations};

/// 新建并迁移内存 SQLite 库；单连接保证所有查询落在同一个内存实例上
pub async fn setup_db() -> DbPool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config).await.expect("connect sqlite");
    run_migrations(&pool).await.expect("run migrations");
    pool
}
