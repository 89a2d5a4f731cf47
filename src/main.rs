use anyhow::Result;
use coursedb::{Config, CourseManager};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_args();

    let mut manager = CourseManager::with_capacity(config.capacity)?;
    for file in &config.files {
        if config.async_read {
            manager.read_file_async(file).await?;
        } else {
            manager.read_file(file)?;
        }
    }

    if config.crns.is_empty() {
        for line in manager.show_all() {
            println!("{}", line);
        }
    } else {
        for crn in &config.crns {
            println!("{}", manager.get(*crn));
        }
    }

    Ok(())
}
