use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::registry::traits::registry::Registry;
use crate::stats::structs::stats_atomics::StatsAtomics;

pub struct PeerTracker {
    pub config: Arc<Configuration>,
    pub registry: Arc<dyn Registry>,
    pub stats: Arc<StatsAtomics>,
}
