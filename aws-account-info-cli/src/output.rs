use anyhow::Result;
use aws_account_info_resolver::AccountIdentity;
use std::io::{self, Write};

pub(crate) fn print_identity(identity: &AccountIdentity) {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    let _ = writeln!(w, "Account ID: {}", identity.account_id);
    let _ = writeln!(w, "Partition:  {}", identity.partition);
}

pub(crate) fn print_identity_json(identity: &AccountIdentity) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(identity)?);
    Ok(())
}
