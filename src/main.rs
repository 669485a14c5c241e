use mimalloc::MiMalloc;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use user_store::{Comment, Config, StoreError, User, UserStore};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        max_connections = cfg.max_connections
    );

    match run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "demo run aborted");
            ExitCode::FAILURE
        }
    }
}

/// Walk one user through its whole lifecycle, reporting each step.
async fn run(cfg: &Config) -> Result<(), StoreError> {
    let store = UserStore::connect(cfg)
        .await
        .inspect_err(|e| println!("Failed to open the database: {e}"))?;

    let result = lifecycle(&store).await;
    store.close().await;
    result
}

async fn lifecycle(store: &UserStore) -> Result<(), StoreError> {
    store
        .init_schema()
        .await
        .inspect_err(|e| println!("Failed to create the users and comments tables: {e}"))?;

    let user = User::new("John Doe", 30).with_comments(vec![
        Comment::new("First comment"),
        Comment::new("Second comment"),
    ]);

    let id = store
        .create_user(&user)
        .await
        .inspect_err(|e| println!("Failed to add user: {e}"))?;
    println!("User added with id {id}.");

    let mut fetched = store
        .get_user(id)
        .await
        .inspect_err(|e| println!("Failed to fetch user: {e}"))?;
    let rendered = serde_json::to_string(&fetched).unwrap_or_else(|_| format!("{fetched:?}"));
    println!("Fetched user: {rendered}");

    fetched.age = 34;
    store
        .update_user(&fetched)
        .await
        .inspect_err(|e| println!("Failed to update user: {e}"))?;
    println!("User updated.");

    store
        .delete_user(fetched.id)
        .await
        .inspect_err(|e| println!("Failed to delete user: {e}"))?;
    println!("User deleted.");

    Ok(())
}
