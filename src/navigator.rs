use crate::extractor::{LinkExtractor, BASE_URL};
use crate::fetcher::Fetcher;
use crate::stats::WalkStats;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::thread::sleep;
use std::time::Duration;

pub const PHILOSOPHY_URL: &str = "https://en.wikipedia.org/wiki/Philosophy";
pub const DEFAULT_MAX_HOPS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    ReachedTarget { hops: usize },
    LoopDetected { page: String },
    DeadEnd { page: String },
    HopLimitExceeded { max_hops: usize },
}

#[derive(Debug)]
pub struct Navigation {
    pub outcome: Outcome,
    /// Every page emitted during the run, in order. A page seen twice (loop) appears twice.
    pub path: Vec<String>,
    pub stats: WalkStats,
}

pub struct Navigator<F: Fetcher> {
    fetcher: F,
    extractor: LinkExtractor,
    target: String,
    max_hops: usize,
    delay: Duration,
}

impl<F: Fetcher> Navigator<F> {
    pub fn new(fetcher: F) -> Result<Self> {
        Ok(Self {
            fetcher,
            extractor: LinkExtractor::new(BASE_URL)?,
            target: PHILOSOPHY_URL.to_string(),
            max_hops: DEFAULT_MAX_HOPS,
            delay: Duration::ZERO,
        })
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn next_page(&self, url: &str, stats: &mut WalkStats) -> Result<Option<String>> {
        let document = self.fetcher.fetch(url)?;
        stats.pages_fetched += 1;

        let next = self.extractor.first_link(&document);
        log::debug!("{} -> {:?}", url, next);
        Ok(next)
    }

    /// Follows first links from `start` until the target, a loop, a dead end
    /// or the hop limit. Each visited page is written to `sink` as it is reached.
    ///
    /// A failed fetch aborts the walk with an error.
    pub fn run<W: Write>(&self, start: &str, sink: &mut W) -> Result<Navigation> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut path = Vec::new();
        let mut stats = WalkStats::new();
        let mut hops = 0;
        let mut current = start.to_string();

        let outcome = loop {
            if hops >= self.max_hops && current != self.target {
                break Outcome::HopLimitExceeded {
                    max_hops: self.max_hops,
                };
            }

            writeln!(sink, "{}", current).context("Failed to write visited page")?;
            path.push(current.clone());

            if current == self.target {
                break Outcome::ReachedTarget { hops };
            }

            if visited.contains(&current) {
                break Outcome::LoopDetected { page: current };
            }
            visited.insert(current.clone());

            if hops > 0 && !self.delay.is_zero() {
                sleep(self.delay);
            }

            match self.next_page(&current, &mut stats)? {
                Some(next) => {
                    current = next;
                    hops += 1;
                    stats.links_followed += 1;
                }
                None => break Outcome::DeadEnd { page: current },
            }
        };

        stats.finish();
        log::info!(
            "Walk finished after {} hops: {} pages fetched in {} ms",
            hops,
            stats.pages_fetched,
            stats.elapsed_ms
        );

        Ok(Navigation {
            outcome,
            path,
            stats,
        })
    }
}
