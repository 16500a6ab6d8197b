//! Provisions the `access_logs` table in the PumpDrive MySQL database
//!
//! Usage: pumplog_init [--host H] [--port P] [--user U] [--database D]
//!
//! The password comes from `PUMPLOG_MYSQL_PASSWORD` or
//! `PUMPLOG_MYSQL_PASSWORD_FILE`, never from a flag.
//!
//! Exit codes:
//!   0 - Success (table created or already present)
//!   1 - Any failure (configuration, connection, execution, verification)

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pumplog::config::{
    ProvisionConfig, TlsMode, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER,
};
use pumplog::schema::access_logs::ACCESS_LOGS;
use pumplog::{provision, verify, ProvisionError};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Create the access_logs table in the PumpDrive database")]
struct Cli {
    #[arg(long, default_value = DEFAULT_HOST, env = "PUMPLOG_MYSQL_HOST")]
    host: String,

    #[arg(long, default_value_t = DEFAULT_PORT, env = "PUMPLOG_MYSQL_PORT")]
    port: u16,

    #[arg(long, default_value = DEFAULT_USER, env = "PUMPLOG_MYSQL_USER")]
    user: String,

    #[arg(long, default_value = DEFAULT_DATABASE, env = "PUMPLOG_MYSQL_DATABASE")]
    database: String,

    /// Accept invalid or self-signed server certificates
    #[arg(long, conflicts_with = "disable_tls")]
    tls_skip_verify: bool,

    /// Connect without TLS (local scratch servers only)
    #[arg(long)]
    disable_tls: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let tls_mode = if cli.disable_tls {
        TlsMode::Disabled
    } else if cli.tls_skip_verify {
        TlsMode::SkipVerify
    } else {
        TlsMode::Required
    };

    let config = ProvisionConfig::new(cli.host, cli.port, cli.user, cli.database, tls_mode);

    if let Err(e) = run(&config).await {
        match e {
            ProvisionError::Verification(_) => println!("❌ ERROR: Table not found after creation!"),
            ProvisionError::Database(err) => println!("❌ MySQL Error: {}", err),
            other => println!("💥 Error: {}", other),
        }
        std::process::exit(1);
    }

    std::process::exit(0);
}

async fn run(config: &ProvisionConfig) -> Result<(), ProvisionError> {
    println!("🔧 Connecting to production database...");
    let mut conn = provision::connect(config).await?;
    println!("✅ Connected successfully!");

    println!("📝 Creating access_logs table...");
    let ddl = provision::access_logs_ddl();
    provision::create_table(&mut conn, &ddl).await?;
    println!("✅ Table created successfully!");

    let matches = verify::matching_tables(&mut conn, ACCESS_LOGS).await?;
    if matches.is_empty() {
        // No exception but no table either; treat the silent no-op as fatal
        return Err(ProvisionError::Verification(ACCESS_LOGS.to_string()));
    }
    println!(
        "📊 Verification: Table exists! Found {} match(es)",
        matches.len()
    );

    let columns = verify::describe_table(&mut conn, ACCESS_LOGS).await?;
    println!("\n📋 Table structure:");
    for col in &columns {
        println!("  - {}: {} {}", col.name, col.column_type, col.nullability());
    }

    conn.disconnect().await?;

    println!("\n✨ Done! The access_logs table is now ready.");
    Ok(())
}
