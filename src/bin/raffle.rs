use std::io::Write;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;

use raffle_backend::{
    AppError,
    config::ClientSettings,
    draw::{AnimationPlan, DrawSession, MAX_WINNERS, MIN_WINNERS, Phase, animated_draw},
    external::RaffleApiClient,
    utils::format_ticket_number,
};

const TRY_AGAIN: &str = "Failed to register. Please try again.";
const SOMETHING_WRONG: &str = "Something went wrong. Please try again.";

#[derive(Parser)]
#[command(name = "raffle", about = "Register for the raffle and draw winners")]
struct Cli {
    /// Raffle endpoint, e.g. http://localhost:8080/api/v1/raffle
    #[arg(long, global = true, env = "RAFFLE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a name and email and print the ticket number
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Confirm the registration with a follow-up lookup
        #[arg(long)]
        verify: bool,
    },
    /// Look up the ticket registered for an email
    Lookup { email: String },
    /// List all registered participants
    List,
    /// Draw winners from the registered participants
    Draw {
        /// Number of winners (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(MIN_WINNERS as i64..=MAX_WINNERS as i64))]
        winners: Option<u8>,
        /// Reveal winners without the cycling animation
        #[arg(long)]
        no_animation: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut settings = ClientSettings::load()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        settings.client.api_url = url;
    }

    let client = RaffleApiClient::new(settings.client.clone());
    if !client.is_configured() {
        log::warn!("RAFFLE_API_URL is not set; the raffle client cannot reach the backend");
    }

    match cli.command {
        Commands::Register {
            name,
            email,
            verify,
        } => register(&client, &name, &email, verify).await,
        Commands::Lookup { email } => lookup(&client, &email).await,
        Commands::List => list(&client).await,
        Commands::Draw {
            winners,
            no_animation,
        } => {
            let requested = winners
                .map(usize::from)
                .unwrap_or(settings.draw.default_winners);
            let plan = if no_animation {
                AnimationPlan::instant()
            } else {
                AnimationPlan::from_config(&settings.draw)
            };
            draw(&client, requested, &plan).await
        }
    }
}

fn user_message(err: &AppError) -> &'static str {
    if err.is_transport() {
        TRY_AGAIN
    } else {
        SOMETHING_WRONG
    }
}

async fn register(
    client: &RaffleApiClient,
    name: &str,
    email: &str,
    verify: bool,
) -> anyhow::Result<()> {
    if name.trim().is_empty() || email.trim().is_empty() {
        bail!("Name and email are required");
    }

    let outcome = match client.register(name, email).await {
        Ok(outcome) => outcome,
        Err(AppError::ExternalApiError(msg)) => bail!("{msg}"),
        Err(e) => {
            log::error!("Registration request failed: {e}");
            bail!(user_message(&e));
        }
    };

    let participant = if verify {
        match client.get_by_email(email.trim()).await {
            Ok(Some(p)) => p,
            Ok(None) => bail!(SOMETHING_WRONG),
            Err(e) => {
                log::error!("Verification lookup failed: {e}");
                bail!(user_message(&e));
            }
        }
    } else {
        outcome.participant().clone()
    };

    if outcome.is_new() {
        println!("You're in, {}!", participant.name);
    } else {
        println!("Already registered, {}.", participant.name);
    }
    println!("Your ticket number is {}", format_ticket_number(participant.number));
    Ok(())
}

async fn lookup(client: &RaffleApiClient, email: &str) -> anyhow::Result<()> {
    match client.get_by_email(email.trim()).await {
        Ok(Some(p)) => {
            println!("{} {} <{}>", format_ticket_number(p.number), p.name, p.email);
            Ok(())
        }
        Ok(None) => bail!("Not found"),
        Err(e) => {
            log::error!("Lookup failed: {e}");
            bail!(user_message(&e));
        }
    }
}

async fn list(client: &RaffleApiClient) -> anyhow::Result<()> {
    let participants = client.list_participants().await.map_err(|e| {
        log::error!("Failed to fetch participants: {e}");
        anyhow::anyhow!(user_message(&e))
    })?;

    println!("{} participants registered", participants.len());
    for p in &participants {
        println!("{} {}", format_ticket_number(p.number), p.name);
    }
    Ok(())
}

async fn draw(
    client: &RaffleApiClient,
    requested: usize,
    plan: &AnimationPlan,
) -> anyhow::Result<()> {
    // 获取失败时按无人参与处理
    let participants = match client.list_participants().await {
        Ok(list) => list,
        Err(e) => {
            log::error!("Failed to fetch participants: {e}");
            Vec::new()
        }
    };

    println!("{} participants registered", participants.len());
    let mut session = DrawSession::new(participants, requested);
    if !session.is_enabled() {
        println!("No participants yet");
        return Ok(());
    }

    let mut rng = StdRng::from_entropy();
    let mut stdout = std::io::stdout();
    while session.has_more_draws() {
        let round = session.winners().len() + 1;
        let winner = animated_draw(&mut session, plan, &mut rng, |phase, shown| {
            let marker = match phase {
                Phase::Fast => "Drawing...",
                Phase::Slow => "Drawing.. ",
            };
            let _ = write!(stdout, "\r{marker} {}", format_ticket_number(shown.number));
            let _ = stdout.flush();
        })
        .await;

        let Some(winner) = winner else { break };
        println!(
            "\rWinner {round}: {} {}            ",
            format_ticket_number(winner.number),
            winner.name
        );
    }

    if session.is_exhausted() {
        println!(
            "Only {} of {} winners drawn: everyone has already won",
            session.winners().len(),
            session.requested()
        );
    }
    Ok(())
}
