use kuda::services::accounts::GetMainAccountBalance;
use kuda::services::billing::GetBillers;
use kuda::{BillType, BlockingApiWrapper, KudaBuilder, KudaConfig, Mode};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match KudaConfig::from_env_file("KUDA") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Ok(());
        }
    };

    // No async runtime needed
    let client = KudaBuilder::new()
        .with_mode(Mode::Development)
        .build_blocking(config)?;

    let balance = client.execute(&GetMainAccountBalance)?;
    println!("Balance: {:?}", balance.data);

    let billers = client.execute(&GetBillers {
        bill_type_name: BillType::Airtime,
    })?;
    println!("Airtime billers: {}", billers.raw);

    Ok(())
}
