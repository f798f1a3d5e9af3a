// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local profile records: user, language preference, standalone mood.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};
use wikoo_core::{KeyValueStore, Language, MoodSelection, UserRecord, WikooError};

use crate::keys;

/// Profile state persisted alongside the conversation log.
///
/// There is no authentication: signup and login only record a name and
/// email so the companion can greet the user.
#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
    default_language: Language,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>, default_language: Language) -> Self {
        Self {
            store,
            default_language,
        }
    }

    /// The signed-in user, if any. An unreadable record counts as absent.
    pub async fn user(&self) -> Result<Option<UserRecord>, WikooError> {
        let Some(raw) = self.store.load(keys::USER).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "stored user record is unreadable, treating as signed out");
                Ok(None)
            }
        }
    }

    /// Record a new account. Name falls back to the email's local part.
    pub async fn signup(&self, name: &str, email: &str) -> Result<UserRecord, WikooError> {
        let email = validate_email(email)?;
        let name = match name.trim() {
            "" => local_part(&email).to_string(),
            n => n.to_string(),
        };
        if name.is_empty() {
            return Err(WikooError::Validation("name is required".into()));
        }
        let user = UserRecord { name, email };
        self.put_user(&user).await?;
        Ok(user)
    }

    /// Sign in by email; the display name is the capitalized local part.
    pub async fn login(&self, email: &str) -> Result<UserRecord, WikooError> {
        let email = validate_email(email)?;
        let user = UserRecord {
            name: display_name(local_part(&email)),
            email,
        };
        self.put_user(&user).await?;
        Ok(user)
    }

    async fn put_user(&self, user: &UserRecord) -> Result<(), WikooError> {
        let raw = serde_json::to_string(user)?;
        self.store.save(keys::USER, &raw).await?;
        debug!(email = %user.email, "user record saved");
        Ok(())
    }

    /// Active language, or the configured default when none was chosen.
    pub async fn language(&self) -> Result<Language, WikooError> {
        Ok(self
            .store
            .load(keys::LANGUAGE)
            .await?
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or(self.default_language))
    }

    pub async fn set_language(&self, lang: Language) -> Result<(), WikooError> {
        self.store.save(keys::LANGUAGE, lang.code()).await
    }

    /// Last standalone mood selection. Unknown values count as absent.
    pub async fn mood(&self) -> Result<Option<MoodSelection>, WikooError> {
        Ok(self
            .store
            .load(keys::MOOD)
            .await?
            .and_then(|raw| MoodSelection::from_str(&raw).ok()))
    }

    pub async fn set_mood(&self, mood: MoodSelection) -> Result<(), WikooError> {
        self.store.save(keys::MOOD, &mood.to_string()).await
    }

    /// Forget everything stored on this device: user, log, language, mood.
    pub async fn logout(&self) -> Result<(), WikooError> {
        self.store.clear().await?;
        debug!("local state cleared");
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<String, WikooError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(WikooError::Validation("email is required".into()));
    }
    if !email.contains('@') {
        return Err(WikooError::Validation(format!(
            "`{email}` is not an email address"
        )));
    }
    Ok(email.to_string())
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

fn display_name(local: &str) -> String {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Friend".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationStore;
    use wikoo_core::Utterance;
    use wikoo_test_utils::MemoryStore;

    fn profile() -> (Arc<MemoryStore>, ProfileStore) {
        let mem = Arc::new(MemoryStore::new());
        let profile = ProfileStore::new(mem.clone(), Language::English);
        (mem, profile)
    }

    #[tokio::test]
    async fn signup_records_user() {
        let (_, p) = profile();
        let user = p.signup(" Asha ", "asha@example.com").await.unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(p.user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn signup_blank_name_uses_local_part() {
        let (_, p) = profile();
        let user = p.signup("  ", "ravi.k@example.com").await.unwrap();
        assert_eq!(user.name, "ravi.k");
    }

    #[tokio::test]
    async fn signup_rejects_bad_email() {
        let (_, p) = profile();
        assert!(matches!(
            p.signup("A", "not-an-email").await,
            Err(WikooError::Validation(_))
        ));
        assert!(matches!(p.signup("A", "").await, Err(WikooError::Validation(_))));
        assert!(matches!(
            p.signup("", "@example.com").await,
            Err(WikooError::Validation(_))
        ));
        assert_eq!(p.user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn login_capitalizes_local_part() {
        let (_, p) = profile();
        let user = p.login("meena@example.com").await.unwrap();
        assert_eq!(user.name, "Meena");

        let user = p.login("@example.com").await.unwrap();
        assert_eq!(user.name, "Friend");
    }

    #[tokio::test]
    async fn language_defaults_then_persists() {
        let mem = Arc::new(MemoryStore::new());
        let p = ProfileStore::new(mem.clone(), Language::Hindi);
        assert_eq!(p.language().await.unwrap(), Language::Hindi);

        p.set_language(Language::Tamil).await.unwrap();
        assert_eq!(p.language().await.unwrap(), Language::Tamil);
        assert_eq!(mem.load(keys::LANGUAGE).await.unwrap().as_deref(), Some("ta"));
    }

    #[tokio::test]
    async fn mood_selection_round_trips() {
        let (mem, p) = profile();
        assert_eq!(p.mood().await.unwrap(), None);
        p.set_mood(MoodSelection::Okay).await.unwrap();
        assert_eq!(p.mood().await.unwrap(), Some(MoodSelection::Okay));

        mem.save(keys::MOOD, "ecstatic").await.unwrap();
        assert_eq!(p.mood().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_user_record_reads_as_signed_out() {
        let (mem, p) = profile();
        mem.save(keys::USER, "[]").await.unwrap();
        assert_eq!(p.user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn logout_clears_all_state() {
        let (mem, p) = profile();
        let conv = ConversationStore::new(mem.clone());
        p.signup("Asha", "asha@example.com").await.unwrap();
        p.set_language(Language::Tamil).await.unwrap();
        p.set_mood(MoodSelection::Low).await.unwrap();
        conv.append(Utterance::user("hello")).await.unwrap();

        p.logout().await.unwrap();

        for key in keys::ALL {
            assert_eq!(mem.load(key).await.unwrap(), None, "{key} survived logout");
        }
        assert_eq!(p.language().await.unwrap(), Language::English);
        assert!(conv.load().await.unwrap().is_empty());
    }
}
