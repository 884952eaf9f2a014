//! Runtime configuration: environment variables first, then command-line overrides.
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `TETRIS_STACK_SEED` | `--seed N` | Fixed RNG seed (clock-seeded otherwise) |
//! | `TETRIS_STACK_MODE` | `--tui` / `--plain` / `--json` | Frontend |
//! | `TETRIS_STACK_LOG_PATH` | `--log-path P` | Write logs to a file instead of stderr |

use anyhow::{anyhow, Result};

use crate::core::{PieceGenerator, SimpleRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendMode {
    /// Full-screen crossterm menu.
    Tui,
    /// Numbered menu over stdin/stdout.
    Plain,
    /// Like `Plain`, but every response is one JSON line.
    Json,
}

impl FrontendMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tui" => Some(FrontendMode::Tui),
            "plain" | "text" => Some(FrontendMode::Plain),
            "json" => Some(FrontendMode::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub mode: FrontendMode,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mode: FrontendMode::Tui,
            log_path: None,
        }
    }
}

pub const USAGE: &str = "\
Usage: tetris-stack [--seed N] [--tui | --plain | --json] [--log-path PATH]

Environment:
  TETRIS_STACK_SEED      fixed RNG seed
  TETRIS_STACK_MODE      tui | plain | json
  TETRIS_STACK_LOG_PATH  log file (RUST_LOG selects the level)";

impl AppConfig {
    /// Environment variables, then `args` (program name already stripped).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env().parse_args(args)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_STACK_SEED").and_then(|s| s.trim().parse().ok());
        let mode = lookup("TETRIS_STACK_MODE")
            .and_then(|s| FrontendMode::from_str(&s))
            .unwrap_or(defaults.mode);
        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            mode,
            log_path,
        }
    }

    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--log-path" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log-path"))?;
                    self.log_path = Some(v.clone());
                }
                "--tui" => self.mode = FrontendMode::Tui,
                "--plain" => self.mode = FrontendMode::Plain,
                "--json" => self.mode = FrontendMode::Json,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }

    /// Generator for a new session; seeded from the clock when no seed is configured.
    pub fn generator(&self) -> PieceGenerator<SimpleRng> {
        let rng = match self.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        };
        PieceGenerator::new(rng)
    }
}
