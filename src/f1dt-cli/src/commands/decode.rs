//! Token decode command handler

use anyhow::{bail, Context, Result};
use f1dt::reference::team_by_code;
use f1dt::TokenId;

/// Handle the decode command
pub fn handle(tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        bail!("no tokens given; pass one or more 32-character hex identifiers");
    }

    for (i, text) in tokens.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let token: TokenId = text
            .parse()
            .with_context(|| format!("Invalid token text '{text}'"))?;
        let fields = token
            .decode()
            .with_context(|| format!("Token '{text}' does not decode"))?;

        let team = team_by_code(fields.model).map_or("-", |t| t.name);
        println!("Token:   {token}");
        println!("Counter: {}", fields.counter);
        println!("Rarity:  {}", fields.rarity.name());
        println!("Type:    {}", fields.item_type.name());
        println!("SubType: {}", fields.subtype.name());
        println!("Season:  {}", fields.season);
        println!("Team:    {team} (model {})", fields.model);
    }

    Ok(())
}
