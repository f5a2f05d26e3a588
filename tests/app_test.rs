use myjantes_backend::app::app::App;
use myjantes_backend::config::app_conf::AppConfig;
use myjantes_backend::config::database_conf::DatabaseConfig;

#[tokio::test]
async fn test_app_builds_on_in_memory_database() {
    let app = App::with_config(AppConfig::default(), &DatabaseConfig::in_memory()).await;
    assert!(app.is_ok());
}

#[tokio::test]
async fn test_app_reports_unopenable_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("myjantes.db");
    let config = DatabaseConfig::with_path(path.to_string_lossy().to_string());
    let app = App::with_config(AppConfig::default(), &config).await;
    assert!(app.is_err());
}

#[tokio::test]
async fn test_app_new_reads_database_from_env() {
    // Only test in this binary that touches the environment
    std::env::set_var("DATABASE_PATH", ":memory:");
    std::env::set_var("DATABASE_MAX_CONNECTIONS", "1");
    let app = App::new().await;
    assert!(app.is_ok());

    std::env::set_var("DATABASE_MAX_CONNECTIONS", "zero");
    let app = App::new().await;
    assert!(app.is_err());
    std::env::remove_var("DATABASE_PATH");
    std::env::remove_var("DATABASE_MAX_CONNECTIONS");
}
