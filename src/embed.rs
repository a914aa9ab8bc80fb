// Embed address construction and hand-off to the system opener.
// Playback itself happens entirely inside the third-party frame.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;

pub const DEFAULT_EMBED_HOST: &str = "piped.video";

/// Permissions granted to the embedded frame.
pub const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// `https://<host>/embed/<id>`
pub fn embed_url(host: &str, video_id: &str) -> String {
    format!("https://{}/embed/{}", host.trim_end_matches('/'), video_id)
}

/// Launches embed addresses with an external program (browser or player).
#[derive(Debug, Clone)]
pub struct Opener {
    command: String,
}

impl Opener {
    /// Use `command` if given, otherwise the platform's URL opener.
    pub fn new(command: Option<&str>) -> Self {
        let command = command
            .filter(|c| !c.trim().is_empty())
            .map_or_else(|| platform_opener().to_string(), str::to_string);
        Self { command }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Absolute path of the opener, if it can be found on `PATH`.
    pub fn resolve(&self) -> Option<PathBuf> {
        which::which(&self.command).ok()
    }

    /// Spawn the opener on `url` without waiting for it. The child is reaped
    /// on a background task so it never lingers as a zombie.
    pub fn open(&self, url: &str) -> anyhow::Result<()> {
        let program = self
            .resolve()
            .with_context(|| format!("opener `{}` not found on PATH", self.command))?;
        let mut child = Command::new(&program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {}", program.display()))?;

        tracing::info!(opener = %program.display(), %url, "opened embed");
        tokio::spawn(async move {
            let _ = child.wait().await;
        });
        Ok(())
    }
}

impl Default for Opener {
    fn default() -> Self {
        Self::new(None)
    }
}

fn platform_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
