use kuda::core::utils::generate_number;
use kuda::services::accounts::{CreateVirtualAccount, GetMainAccountBalance};
use kuda::services::transactions::{ConfirmTransferRecipient, GetBanks};
use kuda::{ApiWrapper, KudaBuilder, KudaConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // You need to set KUDA_EMAIL and KUDA_API_KEY (KUDA_MODE defaults to development)
    let config = match KudaConfig::from_env_file("KUDA") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            eprintln!("Please set KUDA_EMAIL and KUDA_API_KEY environment variables");
            return Ok(());
        }
    };

    let client = KudaBuilder::new().with_timeout(20).build_async(config)?;
    println!("Talking to {}", client.base_url());

    println!("\nMain account balance");
    match client.execute(&GetMainAccountBalance).await {
        Ok(response) => println!("  {:?}: {:?}", response.message, response.data),
        Err(e) => eprintln!("Error getting balance: {}", e),
    }

    println!("\nBanks");
    let banks = client.execute(&GetBanks).await?;
    if let Some(list) = banks
        .data
        .as_ref()
        .and_then(|data| data.get("banks"))
        .and_then(|banks| banks.as_array())
    {
        for bank in list.iter().take(5) {
            println!("  {} ({})", bank["bankName"], bank["bankCode"]);
        }
        println!("  ... {} banks in total", list.len());
    }

    println!("\nName enquiry");
    let enquiry = ConfirmTransferRecipient {
        beneficiary_account_number: "1100000000".to_string(),
        beneficiary_bank_code: "999129".to_string(),
        sender_tracking_reference: None,
        is_request_from_virtual_account: false,
    };
    match client.execute(&enquiry).await {
        Ok(response) => println!("  {:?}", response.data),
        Err(e) => eprintln!("Error confirming recipient: {}", e),
    }

    println!("\nCreating a virtual account");
    let account = CreateVirtualAccount {
        email: "ada@example.com".to_string(),
        phone_number: "08012345678".to_string(),
        last_name: "Lovelace".to_string(),
        first_name: "Ada".to_string(),
        middle_name: "King".to_string(),
        business_name: "Analytical Engines".to_string(),
        tracking_reference: generate_number(10).to_string(),
    };
    let response = client.execute(&account).await?;
    println!("  status={:?} message={:?}", response.status, response.message);

    Ok(())
}
