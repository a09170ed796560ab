use crate::core::ConfigProvider;
use crate::utils::error::{QuinielaError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_required_field,
    validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_NEXT_DRAW_URL: &str =
    "https://www.loteriasyapuestas.es/servicios/proximosv3?game_id=LAQU";
pub const DEFAULT_MATCHES_URL: &str =
    "https://www.loteriasyapuestas.es/servicios/fechav3?game_id=LAQU&fecha_sorteo=";
pub const TOKEN_PLACEHOLDER: &str = "YOUR_GITHUB_TOKEN_HERE";

#[derive(Clone, Parser)]
#[command(name = "quiniela-gist", version)]
#[command(about = "Publish the next Quiniela draw's matches to a GitHub Gist")]
pub struct CliConfig {
    /// GitHub personal access token with the `gist` scope
    #[arg(long, env = "GIST_UPDATE_TOKEN", hide_env_values = true)]
    pub gist_token: Option<String>,

    /// Gist to overwrite
    #[arg(long, env = "GIST_ID", default_value = "d6b5be152cf5e3f6ebb02f2daa60f291")]
    pub gist_id: String,

    /// File inside the Gist that receives the match list
    #[arg(long, env = "GIST_FILENAME", default_value = "partidos.json")]
    pub gist_filename: String,

    #[arg(long, env = "GIST_API_URL", default_value = "https://api.github.com")]
    pub gist_api_url: String,

    /// Endpoint listing upcoming draws
    #[arg(long, env = "QUINIELA_NEXT_DRAW_URL", default_value = DEFAULT_NEXT_DRAW_URL)]
    pub next_draw_url: String,

    /// Endpoint returning a draw's matches; the YYYYMMDD date is appended
    #[arg(long, env = "QUINIELA_MATCHES_URL", default_value = DEFAULT_MATCHES_URL)]
    pub matches_url: String,

    #[arg(long, env = "QUINIELA_TIMEOUT_SECONDS", default_value = "10")]
    pub timeout_seconds: u64,

    /// Write the file into this directory instead of updating the Gist
    #[arg(long, env = "QUINIELA_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Fetch and print the payload without publishing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Whether this run ends with a PATCH to the Gist API.
    pub fn publishes_to_gist(&self) -> bool {
        !self.dry_run && self.output_dir.is_none()
    }

    pub fn token(&self) -> Result<&str> {
        validate_required_field("gist_token", &self.gist_token).map(String::as_str)
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("gist_token", &self.gist_token.as_ref().map(|_| "***"))
            .field("gist_id", &self.gist_id)
            .field("gist_filename", &self.gist_filename)
            .field("gist_api_url", &self.gist_api_url)
            .field("next_draw_url", &self.next_draw_url)
            .field("matches_url", &self.matches_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("output_dir", &self.output_dir)
            .field("dry_run", &self.dry_run)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("next_draw_url", &self.next_draw_url)?;
        validate_url("matches_url", &self.matches_url)?;
        validate_path("gist_filename", &self.gist_filename)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(dir) = &self.output_dir {
            validate_path("output_dir", dir)?;
        }

        if self.publishes_to_gist() {
            validate_url("gist_api_url", &self.gist_api_url)?;
            validate_non_empty_string("gist_id", &self.gist_id)?;

            let token = self.token()?;
            validate_non_empty_string("gist_token", token)?;
            if token.contains(TOKEN_PLACEHOLDER) {
                return Err(QuinielaError::ConfigError {
                    message: format!("gist_token still holds the '{}' placeholder", TOKEN_PLACEHOLDER),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn next_draw_url(&self) -> &str {
        &self.next_draw_url
    }

    fn matches_url(&self) -> &str {
        &self.matches_url
    }

    fn output_filename(&self) -> &str {
        &self.gist_filename
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
