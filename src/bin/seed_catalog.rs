//! 演示目录灌入命令
//!
//! ```text
//! seed-catalog [--delete-existing] [--dry-run]
//! ```

use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info};

use rust_schoolsystem::config::AppConfig;
use rust_schoolsystem::storage::sea_orm_storage::SeaOrmStorage;

#[derive(Parser, Debug)]
#[command(name = "seed-catalog", about = "Seed a demo grade/subject/track catalog")]
struct Args {
    /// 先清空现有目录（年级级联带走科目/轨道/课程）
    #[arg(long)]
    delete_existing: bool,

    /// 执行完整流程但回滚事务，不落库
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let args = Args::parse();

    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .init();

    let storage = match SeaOrmStorage::new_async().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            std::process::exit(1);
        }
    };

    match storage
        .seed_demo_catalog(args.delete_existing, args.dry_run)
        .await
    {
        Ok(report) => {
            info!(
                "Seed complete: {} grade(s), {} subject(s), {} track(s){}",
                report.grades,
                report.subjects,
                report.tracks,
                if args.dry_run { " (dry run, rolled back)" } else { "" }
            );
        }
        Err(e) => {
            error!("Seed failed: {}", e);
            std::process::exit(1);
        }
    }
}
