// SPDX-FileCopyrightText: 2026 Wikoo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-to-speech through an external program (`espeak-ng` by default).

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use wikoo_core::{
    AdapterType, HealthStatus, PluginAdapter, SpeechRequest, SpeechSynthesizer, Voice, WikooError,
};

use crate::catalog::VoiceCatalog;

/// espeak-ng's default words per minute.
const BASE_WPM: f32 = 175.0;

/// Drives an espeak-compatible command line synthesizer.
///
/// One child process per utterance; starting a new one or calling
/// [`cancel`](SpeechSynthesizer::cancel) kills the previous child.
pub struct CommandSynthesizer {
    program: String,
    resolved: Option<PathBuf>,
    current: Mutex<Option<Child>>,
}

impl CommandSynthesizer {
    /// Resolve `program` on `PATH`. A missing program leaves the synthesizer unavailable.
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        let resolved = find_program(&program);
        if resolved.is_none() {
            debug!(program, "speech program not found");
        }
        Self {
            program,
            resolved,
            current: Mutex::new(None),
        }
    }

    /// Query the program's voices in the background and publish them.
    ///
    /// Nothing is published when the query fails or lists no voices.
    pub fn load_catalog(&self, catalog: VoiceCatalog) -> Option<JoinHandle<()>> {
        let program = self.resolved.clone()?;
        Some(tokio::spawn(async move {
            match Command::new(&program)
                .arg("--voices")
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output()
                .await
            {
                Ok(output) if output.status.success() => {
                    let voices = parse_voices(&String::from_utf8_lossy(&output.stdout));
                    if voices.is_empty() {
                        warn!(program = %program.display(), "speech program listed no voices");
                    } else {
                        catalog.publish(voices);
                    }
                }
                Ok(output) => {
                    warn!(status = %output.status, "listing voices failed");
                }
                Err(e) => {
                    warn!(error = %e, "could not run speech program");
                }
            }
        }))
    }

    /// Wait for the current utterance, if any, to finish playing.
    pub async fn wait(&self) {
        let child = self.lock_current().take();
        if let Some(mut child) = child {
            match child.wait().await {
                Ok(status) if !status.success() => debug!(%status, "speech process exited"),
                Ok(_) => {}
                Err(e) => warn!(error = %e, "waiting for speech process failed"),
            }
        }
    }

    fn lock_current(&self) -> std::sync::MutexGuard<'_, Option<Child>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|p| p.is_file())
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File          Other Languages
///  5  en-us           --/M      English_(America)  gmw/en-US     (en 3)
/// ```
///
/// The language column doubles as the voice identifier.
pub fn parse_voices(listing: &str) -> Vec<Voice> {
    listing
        .lines()
        .filter(|line| !line.trim_start().starts_with("Pty"))
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            let _priority = cols.next()?;
            let language = cols.next()?;
            let _age_gender = cols.next()?;
            let name = cols.next()?;
            Some(Voice {
                id: language.to_string(),
                name: name.replace('_', " "),
                locale: language.to_string(),
            })
        })
        .collect()
}

/// Command line arguments for one utterance.
pub fn speech_args(request: &SpeechRequest) -> Vec<String> {
    let mut args = Vec::with_capacity(10);
    if let Some(voice) = &request.voice {
        args.push("-v".to_string());
        args.push(voice.id.clone());
    }
    let speed = (BASE_WPM * request.rate).round().max(1.0);
    let pitch = (50.0 * request.pitch).round().clamp(0.0, 99.0);
    let amplitude = (100.0 * request.volume).round().clamp(0.0, 200.0);
    args.extend([
        "-s".to_string(),
        format!("{speed}"),
        "-p".to_string(),
        format!("{pitch}"),
        "-a".to_string(),
        format!("{amplitude}"),
        "--".to_string(),
        request.text.clone(),
    ]);
    args
}

#[async_trait]
impl PluginAdapter for CommandSynthesizer {
    fn name(&self) -> &str {
        &self.program
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Speech
    }

    async fn health_check(&self) -> Result<HealthStatus, WikooError> {
        Ok(match &self.resolved {
            Some(_) => HealthStatus::Healthy,
            None => HealthStatus::Unhealthy(format!("`{}` not found on PATH", self.program)),
        })
    }

    async fn shutdown(&self) -> Result<(), WikooError> {
        self.cancel();
        Ok(())
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    fn is_available(&self) -> bool {
        self.resolved.is_some()
    }

    fn cancel(&self) {
        if let Some(mut child) = self.lock_current().take() {
            if let Err(e) = child.start_kill() {
                debug!(error = %e, "speech process already gone");
            }
        }
    }

    async fn speak(&self, request: SpeechRequest) -> Result<(), WikooError> {
        let Some(program) = &self.resolved else {
            return Err(WikooError::CapabilityUnsupported(format!(
                "`{}` not found on PATH",
                self.program
            )));
        };

        let child = Command::new(program)
            .args(speech_args(&request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| WikooError::Internal(format!("failed to start {}: {e}", self.program)))?;

        // Replacing the previous child drops it, which kills it.
        *self.lock_current() = Some(child);
        debug!(locale = %request.locale, chars = request.text.chars().count(), "speech started");
        Ok(())
    }
}
