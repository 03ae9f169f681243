//! Sahayak CLI - Voice assistant for seniors in the terminal
//!
//! Sign in once (or continue as a guest) and the session is remembered
//! between runs. `sahayak chat` opens the assistant itself.

mod chat;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sahayak::{
    Catalog, DomainError, EmergencyContact, GeoLocation, Language, Mode, SignupData,
    SpeechEngine,
};
use sahayak_app::adapters::{
    CommandSpeechEngine, ConsoleSpeechEngine, InMemoryUserRepository, JsonFileStore,
    ManualLocation,
};
use sahayak_app::{AppController, ConversationController, SessionManager, SpeechOutput};

use config::{Config, SpeechEngineKind};

/// Accounts live in an in-memory table that each run seeds afresh
const SIGNUP_NOTE: &str = "Note: new accounts are kept only for this run. You stay signed in, \
but 'sahayak login' will not know this account after you log out.";

/// The assistant wired with the CLI's adapters
pub type App = AppController<InMemoryUserRepository, JsonFileStore>;

#[derive(Parser)]
#[command(name = "sahayak")]
#[command(about = "Sahayak - a friendly voice assistant for seniors", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password (demo: rajesh@example.com / password123)
    Login {
        /// Email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create a new account
    Signup {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        religion: Option<String>,
        /// Emergency contact name
        #[arg(long, requires = "contact_phone")]
        contact_name: Option<String>,
        /// Emergency contact phone number
        #[arg(long, requires = "contact_name")]
        contact_phone: Option<String>,
    },

    /// Continue without an account
    Guest,

    /// Sign out and forget the saved session
    Logout,

    /// Show who is signed in
    Whoami,

    /// Show the emergency contact
    Emergency,

    /// Talk to the assistant
    Chat {
        /// Start in a mode: religious, wellness, shopping, scheme
        #[arg(short, long)]
        mode: Option<String>,
        /// Language for this session: en, hi
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the default language (en, hi)
    Language { language: String },
    /// Set a fixed location used for shopping help
    Location {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Forget the configured location
    ClearLocation,
    /// Choose how lines are read aloud (console, command)
    Speech {
        engine: String,
        /// Synthesizer program for the command engine
        #[arg(long)]
        program: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => cmd_login(email, password).await,
        Commands::Signup {
            name,
            email,
            age,
            religion,
            contact_name,
            contact_phone,
        } => cmd_signup(name, email, age, religion, contact_name, contact_phone).await,
        Commands::Guest => cmd_guest().await,
        Commands::Logout => cmd_logout().await,
        Commands::Whoami => cmd_whoami().await,
        Commands::Emergency => cmd_emergency().await,
        Commands::Chat { mode, language } => cmd_chat(mode, language).await,
        Commands::Config { action } => cmd_config(action),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Wire the assistant from configuration and restore any saved session
async fn open_app(config: &Config) -> Result<(App, Arc<ManualLocation>)> {
    let store = Arc::new(JsonFileStore::new(config.storage_path()?));
    let session = SessionManager::new(
        Arc::new(InMemoryUserRepository::with_demo_accounts()),
        store,
        config.session_config(),
    );

    let location = Arc::new(ManualLocation::new(config.location));
    let conversation = ConversationController::new(
        Arc::new(Catalog::new()),
        location.clone(),
        config.conversation_config(),
    );

    let engine: Arc<dyn SpeechEngine> = match config.speech.engine {
        SpeechEngineKind::Console => Arc::new(ConsoleSpeechEngine::new()),
        SpeechEngineKind::Command => Arc::new(CommandSpeechEngine::new(&config.speech.program)),
    };

    let app = AppController::new(session, conversation, SpeechOutput::new(engine));
    app.start().await.context("Failed to restore saved session")?;
    Ok((app, location))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(email: Option<String>, password: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    print!("Signing in... ");
    std::io::stdout().flush().ok();
    match app.login(&email, &password).await {
        Ok(user) => {
            println!("{}", "OK".green());
            println!("{} Welcome, {}", "✓".green(), user.name.cyan().bold());
            Ok(())
        }
        Err(DomainError::InvalidCredentials) => {
            println!("{}", "Failed".red());
            bail!("Email or password is incorrect. Please try again.");
        }
        Err(e) => Err(e.into()),
    }
}

async fn cmd_signup(
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    religion: Option<String>,
    contact_name: Option<String>,
    contact_phone: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Your name")
            .interact_text()
            .context("Failed to read name")?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new()
            .with_prompt("Email")
            .interact_text()
            .context("Failed to read email")?,
    };
    let password = Password::new()
        .with_prompt("Choose a password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;

    let mut data = SignupData::new(name, email, password);
    if let Some(age) = age {
        data = data.with_age(age);
    }
    if let Some(religion) = religion {
        data = data.with_religion(religion);
    }
    if let (Some(contact), Some(phone)) = (contact_name, contact_phone) {
        data = data.with_emergency_contact(EmergencyContact::new(contact, phone));
    }

    print!("Creating account... ");
    std::io::stdout().flush().ok();
    let user = app.signup(data).await?;
    println!("{}", "OK".green());
    println!(
        "{} Welcome, {} (id {})",
        "✓".green(),
        user.name.cyan().bold(),
        user.id.dimmed()
    );
    println!("\n{}", SIGNUP_NOTE.dimmed());
    Ok(())
}

async fn cmd_guest() -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let user = app.continue_as_guest().await?;
    println!("{} Continuing as {}", "✓".green(), user.name.cyan());
    println!("\n{}", "Start talking with:".dimmed());
    println!("  sahayak chat");
    Ok(())
}

async fn cmd_logout() -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let previous = app.session().current_user().await;
    app.logout().await?;

    match previous {
        Some(user) => println!("{} Signed out {}", "✓".green(), user.name),
        None => println!("Nobody was signed in."),
    }
    Ok(())
}

async fn cmd_whoami() -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let Some(user) = app.session().current_user().await else {
        println!("Not signed in.");
        println!("\n{}", "Sign in with:".dimmed());
        println!("  sahayak login");
        println!("  sahayak guest");
        return Ok(());
    };

    println!("{}", "Signed in:".bold());
    println!("  Name: {}", user.name.cyan());
    println!("  Email: {}", user.email);
    if let Some(age) = user.age {
        println!("  Age: {}", age);
    }
    if let Some(religion) = &user.religion {
        println!("  Religion: {}", religion);
    }
    if user.is_guest() {
        println!("  {}", "(guest)".dimmed());
    }
    Ok(())
}

async fn cmd_emergency() -> Result<()> {
    let config = Config::load()?;
    let (app, _) = open_app(&config).await?;

    let contact = app
        .emergency_contact()
        .await
        .context("Not signed in. Run 'sahayak login' or 'sahayak guest' first.")?;

    println!("📞 {}", contact.name.red().bold());
    println!("   {}", contact.phone.bold());
    Ok(())
}

async fn cmd_chat(mode: Option<String>, language: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let (app, location) = open_app(&config).await?;

    if !app.session().is_authenticated().await {
        bail!("Not signed in. Run 'sahayak login' or 'sahayak guest' first.");
    }

    if let Some(language) = language {
        let language: Language = language.parse().map_err(anyhow::Error::msg)?;
        app.set_language(language).await?;
    }

    if let Some(mode) = mode {
        let mode: Mode = mode.parse().map_err(anyhow::Error::msg)?;
        app.select_mode(mode).await?;
    }

    chat::run(&app, &location).await
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    let Some(action) = action else {
        return show_config(&config);
    };

    match action {
        ConfigAction::Language { language } => {
            config.language = language.parse().map_err(anyhow::Error::msg)?;
            config.save()?;
            println!("{} Language set to {}", "✓".green(), config.language);
        }
        ConfigAction::Location {
            latitude,
            longitude,
        } => {
            let fix = GeoLocation::checked(latitude, longitude)?;
            config.location = Some(fix);
            config.save()?;
            println!("{} Location set to {}", "✓".green(), fix);
        }
        ConfigAction::ClearLocation => {
            config.location = None;
            config.save()?;
            println!("{} Location cleared", "✓".green());
        }
        ConfigAction::Speech { engine, program } => {
            config.speech.engine = engine.parse().map_err(anyhow::Error::msg)?;
            if let Some(program) = program {
                config.speech.program = program;
            }
            config.save()?;
            println!("{} Speech engine set to {}", "✓".green(), engine);
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Storage: {:?}", config.storage_path()?);
    println!("  Language: {}", config.language.to_string().cyan());
    match config.speech.engine {
        SpeechEngineKind::Console => println!("  Speech: console"),
        SpeechEngineKind::Command => println!("  Speech: {}", config.speech.program),
    }
    match config.location {
        Some(fix) => println!("  Location: {}", fix.to_string().green()),
        None => println!("  Location: {}", "Not set".red()),
    }
    println!(
        "  Timing: login {} ms, listening {} ms, reply {} ms",
        config.timing.network_latency_ms,
        config.timing.recognition_delay_ms,
        config.timing.response_delay_ms
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_note_warns_about_login() {
        assert!(SIGNUP_NOTE.contains("only for this run"));
        assert!(SIGNUP_NOTE.contains("sahayak login"));
    }

    #[test]
    fn test_location_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "sahayak", "config", "location", "--latitude", "-33.9", "--longitude", "151.2",
        ])
        .unwrap();
        match cli.command {
            Commands::Config {
                action: Some(ConfigAction::Location { latitude, longitude }),
            } => {
                assert_eq!(latitude, -33.9);
                assert!(GeoLocation::checked(latitude, longitude).is_ok());
            }
            _ => panic!("expected config location"),
        }
    }
}
