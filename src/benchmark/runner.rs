use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use super::harness::MeasurementHarness;
use super::types::{BenchmarkConfig, SizeTier, TierReport};
use crate::dataset::{DatasetProvider, DirectoryProvider, SyntheticProvider};
use crate::error::{Error, Result};

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    rng: StdRng,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Provider the runner would use for `tier` under the current config.
    pub fn provider_for(&self, tier: SizeTier) -> Box<dyn DatasetProvider> {
        let count = tier.working_size(self.config.working_set_cap);
        if self.config.materialize {
            Box::new(DirectoryProvider::new(self.config.tier_dir(tier), count))
        } else {
            Box::new(SyntheticProvider::new(count))
        }
    }

    pub fn run_tier(&mut self, tier: SizeTier) -> Result<TierReport> {
        let provider = self.provider_for(tier);
        self.run_with_provider(tier, provider.as_ref())
    }

    /// Load keys from `provider` and measure them, labelled as `tier`.
    pub fn run_with_provider(
        &mut self,
        tier: SizeTier,
        provider: &dyn DatasetProvider,
    ) -> Result<TierReport> {
        info!(
            %tier,
            nominal = tier.nominal_count(),
            source = %provider.description(),
            "starting experiment"
        );

        let keys = provider.load_keys(&mut self.rng)?;
        if keys.is_empty() {
            return Err(Error::EmptyDataset(provider.description()));
        }
        info!(%tier, keys = keys.len(), "keys loaded");

        let mut harness = MeasurementHarness::new(&mut self.rng, self.config.repetitions)
            .with_verification(self.config.verify);
        let stats = harness.measure(&keys)?;

        Ok(TierReport {
            tier,
            key_count: keys.len(),
            stats,
        })
    }

    /// Run each tier in turn. A failing tier is logged and skipped; the
    /// remaining tiers still run.
    pub fn run_tiers(&mut self, tiers: &[SizeTier]) -> Vec<TierReport> {
        let mut reports = Vec::with_capacity(tiers.len());
        for &tier in tiers {
            match self.run_tier(tier) {
                Ok(report) => reports.push(report),
                Err(e) => error!(%tier, error = %e, "experiment aborted"),
            }
        }
        reports
    }
}
