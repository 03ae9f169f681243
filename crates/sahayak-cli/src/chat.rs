//! Interactive conversation loop

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Input, Select};
use tokio::sync::broadcast::error::RecvError;

use sahayak::{
    Catalog, DomainError, GeoLocation, Language, MessageKey, Mode, TranscriptEntry, Translator,
};
use sahayak_app::adapters::ManualLocation;
use sahayak_app::{ConversationEvent, ConversationSnapshot};

use crate::App;

#[derive(Debug, Clone, Copy)]
enum Action {
    Talk,
    Mode(Mode),
    Home,
    ReadAloud,
    StopSpeaking,
    Emergency,
    Language,
    Location,
    Logout,
    Quit,
}

impl Action {
    fn label(self, language: Language) -> String {
        match self {
            Action::Talk => "🎤 Talk".to_string(),
            Action::Mode(mode) => {
                let title = Catalog.text(language, mode.title_key());
                match mode.description_key() {
                    Some(key) => format!("{} - {}", title, Catalog.text(language, key)),
                    None => title,
                }
            }
            Action::Home => format!("🏠 {}", Catalog.text(language, MessageKey::BackToHome)),
            Action::ReadAloud => "🔊 Read the last reply aloud".to_string(),
            Action::StopSpeaking => "🔇 Stop speaking".to_string(),
            Action::Emergency => format!("📞 {}", Catalog.text(language, MessageKey::EmergencyCall)),
            Action::Language => "🌐 Change language".to_string(),
            Action::Location => "📍 Set my location".to_string(),
            Action::Logout => format!("🚪 {}", Catalog.text(language, MessageKey::Logout)),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Menu for the current mode: mode cards on the home screen, a way back elsewhere
fn menu(mode: Mode) -> Vec<Action> {
    let mut actions = vec![Action::Talk];
    if mode == Mode::Home {
        actions.extend(
            Mode::ALL
                .into_iter()
                .filter(|m| *m != Mode::Home)
                .map(Action::Mode),
        );
    } else {
        actions.push(Action::Home);
    }
    actions.extend([
        Action::ReadAloud,
        Action::StopSpeaking,
        Action::Emergency,
        Action::Language,
        Action::Location,
        Action::Logout,
        Action::Quit,
    ]);
    actions
}

/// Run the conversation until the user quits or signs out
pub async fn run(app: &App, location: &ManualLocation) -> Result<()> {
    let user = app
        .session()
        .current_user()
        .await
        .context("Not signed in. Run 'sahayak login' or 'sahayak guest' first.")?;

    let snapshot = app.conversation().snapshot().await;
    println!(
        "\n{} {}",
        Catalog.text(snapshot.language, MessageKey::AppName).bold(),
        format!("({})", user.name).dimmed()
    );
    for entry in &snapshot.transcript {
        print_entry(entry);
    }

    loop {
        let snapshot = app.conversation().snapshot().await;
        let actions = menu(snapshot.mode);
        let labels: Vec<String> = actions.iter().map(|a| a.label(snapshot.language)).collect();

        let Some(choice) = select(header(&snapshot), labels).await? else {
            break;
        };

        match actions[choice] {
            Action::Talk => talk(app).await?,
            Action::Mode(mode) => {
                app.select_mode(mode).await?;
                print_latest(app).await;
            }
            Action::Home => {
                app.go_home().await?;
                print_latest(app).await;
            }
            Action::ReadAloud => match app.speak_latest().await {
                Ok(_) => {}
                Err(DomainError::NotFound { .. }) => println!("{}", "Nothing to read yet.".dimmed()),
                Err(e) => return Err(e.into()),
            },
            Action::StopSpeaking => app.stop_speaking(),
            Action::Emergency => {
                let contact = app.emergency_contact().await?;
                println!("📞 {} {}", contact.name.red().bold(), contact.phone.bold());
            }
            Action::Language => {
                let languages = [Language::English, Language::Hindi];
                let labels = languages.iter().map(|l| l.to_string()).collect();
                if let Some(index) = select("Language".to_string(), labels).await? {
                    app.set_language(languages[index]).await?;
                    println!("{} Language set to {}", "✓".green(), languages[index]);
                }
            }
            Action::Location => {
                let fix = prompt_location().await?;
                location.set(Some(fix));
                println!("{} Location set to {}", "✓".green(), fix);
            }
            Action::Logout => {
                app.logout().await?;
                println!("{} Signed out {}", "✓".green(), user.name);
                return Ok(());
            }
            Action::Quit => break,
        }
    }

    app.stop_speaking();
    Ok(())
}

/// Press the microphone and print lines until the assistant answers
async fn talk(app: &App) -> Result<()> {
    let mut events = app.conversation().subscribe();
    if !app.toggle_listening().await? {
        return Ok(());
    }

    let language = app.conversation().language().await;
    println!("🎤 {}", Catalog.text(language, MessageKey::Listening).italic());

    loop {
        match events.recv().await {
            Ok(ConversationEvent::EntryAppended(entry)) => {
                print_entry(&entry);
                if !entry.is_user {
                    break;
                }
            }
            Ok(ConversationEvent::TranscriptReset(_)) => break,
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "Conversation events lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
    Ok(())
}

fn header(snapshot: &ConversationSnapshot) -> String {
    format!(
        "{} [{}]",
        Catalog.text(snapshot.language, snapshot.mode.title_key()),
        snapshot.mood
    )
}

async fn print_latest(app: &App) {
    if let Some(entry) = app.conversation().transcript().await.last() {
        print_entry(entry);
    }
}

fn print_entry(entry: &TranscriptEntry) {
    let time = entry.timestamp.format("%H:%M").to_string();
    if entry.is_user {
        println!("{} 🧓 {}", time.dimmed(), entry.text.yellow());
    } else {
        println!("{} 🤖 {}", time.dimmed(), entry.text.cyan());
    }
}

async fn select(prompt: String, items: Vec<String>) -> Result<Option<usize>> {
    tokio::task::spawn_blocking(move || {
        Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()
    })
    .await
    .context("Menu task failed")?
    .context("Failed to read selection")
}

async fn prompt_location() -> Result<GeoLocation> {
    tokio::task::spawn_blocking(|| -> Result<GeoLocation> {
        let latitude: f64 = Input::new()
            .with_prompt("Latitude")
            .validate_with(|v: &f64| GeoLocation::checked(*v, 0.0).map(|_| ()))
            .interact_text()
            .context("Failed to read latitude")?;
        let longitude: f64 = Input::new()
            .with_prompt("Longitude")
            .validate_with(|v: &f64| GeoLocation::checked(0.0, *v).map(|_| ()))
            .interact_text()
            .context("Failed to read longitude")?;
        Ok(GeoLocation::checked(latitude, longitude)?)
    })
    .await
    .context("Location prompt failed")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_menu_lists_every_mode() {
        let actions = menu(Mode::Home);
        let modes: Vec<Mode> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Mode(m) => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(
            modes,
            vec![Mode::Religious, Mode::Wellness, Mode::Shopping, Mode::Scheme]
        );
        assert!(!actions.iter().any(|a| matches!(a, Action::Home)));
    }

    #[test]
    fn test_mode_menu_offers_way_home() {
        let actions = menu(Mode::Wellness);
        assert!(actions.iter().any(|a| matches!(a, Action::Home)));
        assert!(!actions.iter().any(|a| matches!(a, Action::Mode(_))));
        assert!(actions.iter().any(|a| matches!(a, Action::Logout)));
        assert!(matches!(actions.last(), Some(Action::Quit)));
    }

    #[test]
    fn test_mode_label_includes_description() {
        let label = Action::Mode(Mode::Religious).label(Language::English);
        assert!(label.starts_with(&Catalog.text(Language::English, MessageKey::ReligiousMode)));
        assert!(label.contains(&Catalog.text(Language::English, MessageKey::ReligiousDescription)));
    }
}
