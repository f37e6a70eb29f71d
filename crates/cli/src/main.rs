//! Command Line Interface for GigShield premium pricing.
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use gigshield_api::{ApiServer, Settings};
use gigshield_domain::enums::CoveragePeriod;
use gigshield_domain::pricing::{compute_premium, compute_premium_by_period};
use gigshield_domain::solvency::assess_pool;
use gigshield_domain::value_objects::{PoolMetrics, PricingInput};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gigshield")]
#[command(about = "Freelance insurance premium pricing and pool solvency CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an insurance quote
    Quote {
        /// Total value of the freelance engagement
        #[arg(short, long)]
        project_value: Decimal,

        /// Coverage amount requested
        #[arg(short, long)]
        coverage: Decimal,

        /// Coverage period (1m, 3m, 6m, 1y)
        #[arg(long, default_value = "1m")]
        period: CoveragePeriod,

        /// Risk tolerance, 0 (most averse) to 100
        #[arg(short, long, default_value_t = 50)]
        risk_tolerance: u8,

        /// Reputation score, 0 to 100 (configured default when omitted)
        #[arg(long)]
        reputation: Option<u8>,

        /// Job type key (e.g. development, design)
        #[arg(long, default_value = "")]
        job_type: String,

        /// Industry key (e.g. technology, finance)
        #[arg(long, default_value = "")]
        industry: String,

        /// Compare premiums across every coverage period
        #[arg(long)]
        all_periods: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Assess the health of a risk pool
    PoolHealth {
        /// Total staked capital in SOL
        #[arg(long)]
        total_capital: Decimal,

        /// Fraction of capital held as reserves
        #[arg(long)]
        reserve_ratio: Decimal,

        /// Expected liabilities in SOL
        #[arg(long)]
        expected_liabilities: Decimal,

        /// Claims paid year to date in SOL
        #[arg(long, default_value = "0")]
        claim_payouts: Decimal,

        /// Number of active stakers
        #[arg(long, default_value_t = 0)]
        active_stakers: u64,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective pricing configuration
    DescribeConfig,
    /// Run the HTTP quote service
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    debug!(server = ?settings.server, "Settings loaded");

    match cli.command {
        Commands::Quote {
            project_value,
            coverage,
            period,
            risk_tolerance,
            reputation,
            job_type,
            industry,
            all_periods,
            json,
        } => {
            let mut input = PricingInput::new(project_value, coverage)
                .with_period(period)
                .with_risk_tolerance(risk_tolerance)
                .with_job_type(job_type)
                .with_industry(industry);
            input.reputation_score = reputation;

            if all_periods {
                let quotes = compute_premium_by_period(&input, &settings.pricing)?;
                info!(count = quotes.len(), "Priced all coverage periods");
                if json {
                    let rows: Vec<_> = quotes
                        .iter()
                        .map(|(period, result)| {
                            serde_json::json!({ "period": period, "result": result })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    render::period_table(&quotes).printstd();
                }
                return Ok(());
            }

            let result = compute_premium(&input, &settings.pricing)?;
            info!(premium = %result.premium, "Quote computed");

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("\n🛡️  Quote");
                println!("════════════════════════════════════");
                render::breakdown_table(&result).printstd();
                println!("Premium:        ${} USDC", result.premium);
                if let Some(rate) = result.premium_rate(input.coverage_amount) {
                    println!("Premium rate:   {}", render::as_percent(rate));
                }
                println!(
                    "Risk profile:   job x{} / industry x{}{}",
                    result.risk_profile.job_type_multiplier,
                    result.risk_profile.industry_multiplier,
                    if result.breakdown.job_industry_adjustment.is_some() {
                        ""
                    } else {
                        " (advisory)"
                    }
                );
                println!("════════════════════════════════════");
            }
        }
        Commands::PoolHealth {
            total_capital,
            reserve_ratio,
            expected_liabilities,
            claim_payouts,
            active_stakers,
            json,
        } => {
            let metrics = PoolMetrics {
                total_capital,
                reserve_ratio,
                expected_liabilities,
                claim_payouts,
                active_stakers,
                last_updated: Some(chrono::Utc::now()),
            };
            let health = assess_pool(&metrics)?;
            info!(reserve_health = %health.reserve_health, "Pool assessed");

            if json {
                println!("{}", serde_json::to_string_pretty(&health)?);
            } else {
                println!("\n📊 Pool Health");
                println!("════════════════════════════════════");
                render::pool_table(&health).printstd();
                if health.reserve_health.needs_attention() {
                    println!("⚠️  Reserves are {}", health.reserve_health);
                }
                println!("════════════════════════════════════");
            }
        }
        Commands::DescribeConfig => {
            println!("{}", serde_json::to_string_pretty(&settings.pricing)?);
        }
        Commands::Serve => {
            ApiServer::new(settings).run().await?;
        }
    }

    Ok(())
}
