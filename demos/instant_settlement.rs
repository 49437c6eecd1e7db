use kuda::core::utils::generate_reference;
use kuda::services::settlement::{GetSettlementStatus, ListTerminals, LogTransaction};
use kuda::{ApiWrapper, KudaBuilder, SettlementConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Needs KUDA_SETTLEMENT_SECRET_KEY and KUDA_SETTLEMENT_CLIENT_PASSWORD
    let config = match SettlementConfig::from_env_file("KUDA") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(());
        }
    };

    let client = KudaBuilder::new().build_settlement_async(config)?;

    let terminals = client
        .execute(&ListTerminals {
            page_size: 10,
            page_number: 1,
        })
        .await?;
    println!("Terminals: {:?}", terminals.data);

    let transaction_id = generate_reference();
    client
        .execute(&LogTransaction {
            amount: 150_000,
            transaction_id: transaction_id.clone(),
            terminal_id: "TERM0001".to_string(),
        })
        .await?;

    let status = client
        .execute(&GetSettlementStatus { transaction_id })
        .await?;
    println!("Settlement: {:?} {:?}", status.status, status.message);

    Ok(())
}
