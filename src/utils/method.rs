use std::{fmt, path::Path, str::FromStr};

use anyhow::{anyhow, Error};
use glob::MatchOptions;
use log::debug;

use crate::utils::walker::Walker;

/// The matching facility being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// `glob::glob_with` on the joined pattern.
    #[default]
    Glob,
    /// Directory walk testing every candidate against a compiled pattern.
    Walk,
}

impl Method {
    pub const VARIANTS: &'static [&'static str] = &["glob", "walk"];

    /// Literal prefix of every output line.
    pub fn tag(&self) -> &'static str {
        match self {
            Method::Glob => "rust",
            Method::Walk => "rust-walk",
        }
    }

    /// Number of matches for `pattern` under `base`; `joined` is the two already joined.
    pub fn count(&self, base: &Path, pattern: &str, joined: &Path) -> anyhow::Result<usize> {
        match self {
            Method::Glob => {
                let joined = joined
                    .to_str()
                    .ok_or_else(|| anyhow!("non UTF-8 path {:?}", joined))?;
                let count = glob::glob_with(joined, MatchOptions::new())?
                    .filter_map(|entry| match entry {
                        Ok(path) => Some(path),
                        Err(e) => {
                            debug!("Skipping unreadable entry: {}", e);
                            None
                        }
                    })
                    .count();
                Ok(count)
            }
            Method::Walk => Ok(Walker::new(pattern)?.walk(base)),
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glob" => Ok(Method::Glob),
            "walk" => Ok(Method::Walk),
            _ => Err(anyhow!("unknown method '{}'", s)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Method::Glob => "glob",
            Method::Walk => "walk",
        })
    }
}
