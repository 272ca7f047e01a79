mod output;

use anyhow::Result;
use aws_account_info_resolver::AccountInfoService;
use clap::Parser;
use log::debug;

/// Print the AWS account ID and partition of the active credentials.
#[derive(Parser)]
#[command(name = "aws-account-info", version, about)]
struct Cli {
    /// Print the resolved identity as JSON
    #[arg(long)]
    json: bool,

    /// Print only the account ID
    #[arg(long, conflicts_with = "json")]
    account_id_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let service = AccountInfoService::from_env().await;
    let identity = service.resolve_account_identity().await?;
    debug!(
        "resolved account {} in partition {}",
        identity.account_id, identity.partition
    );

    if cli.json {
        output::print_identity_json(&identity)?;
    } else if cli.account_id_only {
        println!("{}", identity.account_id);
    } else {
        output::print_identity(&identity);
    }
    Ok(())
}
