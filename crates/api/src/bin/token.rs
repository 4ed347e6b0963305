//! Mint a signed bearer token for local development and manual testing.
//!
//! Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_AUDIENCE` (from the environment
//! or `.env`) and prints an HS256 token carrying either a role preset's
//! permissions or an explicit list.
//!
//! ```text
//! casting-token --role executive_producer
//! casting-token --permission get:movies --permission get:actors --ttl-mins 5
//! ```

use anyhow::Context;
use clap::Parser;

use casting_api::auth::jwt::{issue_token, JwtConfig};
use casting_core::permissions;
use casting_core::roles::Role;

#[derive(Parser)]
#[command(name = "casting-token")]
#[command(about = "Print a signed bearer token for the casting API")]
#[command(version)]
struct Args {
    /// Role preset: casting_assistant, casting_director, executive_producer.
    #[arg(long, required_unless_present = "permission")]
    role: Option<Role>,

    /// Explicit permission string; repeat for several.
    #[arg(long, conflicts_with = "role")]
    permission: Vec<String>,

    /// Value of the `sub` claim.
    #[arg(long, default_value = "dev|casting-token")]
    subject: String,

    /// Lifetime in minutes.
    #[arg(long, default_value_t = 60)]
    ttl_mins: i64,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "casting_token=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    let granted: Vec<String> = match args.role {
        Some(role) => role.permissions().iter().map(|p| p.to_string()).collect(),
        None => args.permission,
    };
    for unknown in granted.iter().filter(|p| !permissions::is_known(p)) {
        tracing::warn!(permission = %unknown, "No route requires this permission");
    }

    let token = issue_token(
        &args.subject,
        &granted,
        chrono::Duration::minutes(args.ttl_mins),
        &config,
    )
    .context("Failed to sign token")?;

    tracing::info!(subject = %args.subject, permissions = ?granted, ttl_mins = args.ttl_mins, "Token issued");
    println!("{token}");
    Ok(())
}
