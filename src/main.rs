// Planwright CLI - run the planning pipeline over the embedded sample data

use anyhow::{Context, Result};
use clap::Parser;

use planwright::backends::Mode;
use planwright::data;
use planwright::report::{parse_report_blocks, ReportBlock};
use planwright::validate::validate_goal_text;
use planwright::{AppConfig, Orchestrator, PlanError};

#[derive(Parser)]
#[command(name = "planwright", about = "Candidate budget plans from goals text")]
struct Args {
    /// Backend mode: "rules" (deterministic) or "agent" (Gemini)
    #[arg(long, default_value = "rules")]
    mode: String,

    /// Sample user id (see data/mock/users.json)
    #[arg(long, default_value = "u_001")]
    user: String,

    /// Free-text goals; defaults to the user's first saved goal
    #[arg(long)]
    goals: Option<String>,

    /// Also print the report re-parsed into typed blocks
    #[arg(long)]
    blocks: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env();
    let mode: Mode = args.mode.parse()?;

    let users = data::load_users()?;
    let user = users
        .iter()
        .find(|u| u.id == args.user)
        .with_context(|| format!("unknown user id: {}", args.user))?;

    let accounts = data::load_accounts()?;
    let account = data::account_for(&accounts, &user.id)
        .with_context(|| format!("no account snapshot for user: {}", user.id))?;

    let goals_text = match args.goals {
        Some(text) => text,
        None => {
            let goals = data::load_goals()?;
            data::goals_for(&goals, &user.id)
                .into_iter()
                .next()
                .with_context(|| format!("no saved goals for user: {}", user.id))?
        }
    };

    let problems = validate_goal_text(&goals_text, mode, &config);
    if !problems.is_empty() {
        return Err(PlanError::Validation(problems).into());
    }

    let orchestrator = Orchestrator::new(config);
    let result = orchestrator.run(mode, user, account, &goals_text).await?;

    println!("{}", result.markdown);

    if args.blocks {
        println!("--- parsed blocks ---");
        render_blocks(&result.markdown);
    }

    Ok(())
}

fn render_blocks(markdown: &str) {
    for block in parse_report_blocks(markdown) {
        match block {
            ReportBlock::Heading { level, text } => {
                println!("{} {}", "#".repeat(level as usize), text);
            }
            ReportBlock::Paragraph { text } => println!("{text}"),
            ReportBlock::Bullets { items } => {
                for item in items {
                    println!("  - {item}");
                }
            }
            ReportBlock::PlanTable { rows } => {
                println!(
                    "  {:<16} {:>10} {:>10} {:>10}",
                    "Plan", "Emergency", "Debt", "Invest"
                );
                for row in rows {
                    println!(
                        "  {:<16} {:>10} {:>10} {:>10}",
                        row.plan, row.emergency_fund, row.debt_payment, row.investment
                    );
                }
            }
        }
        println!();
    }
}
