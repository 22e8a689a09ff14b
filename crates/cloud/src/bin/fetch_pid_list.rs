// Fetch the supported device-product list from the catalog service.
// Run: cargo run --bin fetch_pid_list
// Override the target with DEVICE_LINK_API_DOMAIN / DEVICE_LINK_LANG.

use anyhow::Result;
use device_link_cloud::{CatalogConfig, PidCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut config = CatalogConfig::default();
    if let Ok(domain) = std::env::var("DEVICE_LINK_API_DOMAIN") {
        config.api_domain = domain;
    }
    if let Ok(lang) = std::env::var("DEVICE_LINK_LANG") {
        config.lang = lang;
    }

    println!(
        "Fetching supported models from http://{} (lang={})",
        config.api_domain, config.lang
    );

    let catalog = PidCatalog::with_config(config);
    let pids = catalog.refresh(None).await;

    if pids.is_empty() {
        println!("No supported models returned (catalog unreachable or empty)");
    } else {
        println!("{} supported models:", pids.len());
        for pid in &pids {
            println!("  - {}", pid);
        }
    }

    Ok(())
}
