//! The full-analysis entry point.
//!
//! [`NetworkAnalysis::run`] executes the whole suite in a fixed order —
//! basic stats, centralities, connectivity, communities, hubs, airline
//! metrics — and returns one [`AnalysisReport`]. Later sections read
//! earlier ones (the hub ranking consumes the centrality section), so
//! the order is part of the contract. The report is built by this
//! single owner and immutable once returned; there is no shared mutable
//! state between analyses, and several of the per-source loops could be
//! sharded across threads without changing any result.
//!
//! Degree statistics are computed once and threaded to every consumer
//! (density, degree centrality, assortativity, hubs) instead of being
//! recomputed per section.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::airline::{
    EfficiencyConfig, HubRanking, Redundancy, RedundancyConfig, RedundancyEstimate,
    RegionalConnectivity, RouteEfficiency, RouteEfficiencyEstimate,
};
use crate::analytics::{
    BetweennessCentrality, BetweennessConfig, BetweennessResult, ClosenessCentrality,
    ClosenessConfig, ClosenessResult, ClusteringCoefficient, ClusteringResult, CommunityConfig,
    CommunityDetection, CommunityResult, ConnectedComponents, Connectivity, DegreeStats,
    DiameterConfig, DiameterResult, NodeScores, PageRank, PageRankConfig, PageRankResult,
};
use crate::store::Graph;

/// Tuning knobs for a full analysis run.
///
/// The sampling caps are the backpressure mechanism for large networks;
/// the defaults match the per-algorithm defaults and keep a run with
/// thousands of airports and tens of thousands of routes tractable.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Betweenness centrality settings.
    pub betweenness: BetweennessConfig,
    /// Closeness centrality settings.
    pub closeness: ClosenessConfig,
    /// PageRank settings.
    pub pagerank: PageRankConfig,
    /// Community detection settings.
    pub community: CommunityConfig,
    /// Diameter estimate settings.
    pub diameter: DiameterConfig,
    /// Route efficiency settings.
    pub efficiency: EfficiencyConfig,
    /// Redundancy estimate settings.
    pub redundancy: RedundancyConfig,
}

impl AnalysisConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable every sampling cap, making all estimates exact.
    /// Only advisable on small networks.
    pub const fn exact(mut self) -> Self {
        self.betweenness.source_cap = None;
        self.closeness.source_cap = None;
        self.diameter.source_cap = None;
        self.efficiency.origin_cap = None;
        self.redundancy.origin_cap = None;
        self
    }
}

/// Node counts, degree distributions, and component structure.
#[derive(Debug, Clone, Serialize)]
pub struct BasicStats {
    /// Number of airports.
    pub airports: usize,
    /// Number of directed routes.
    pub routes: usize,
    /// Edge density in [0, 1].
    pub density: f64,
    /// Mean total degree.
    pub average_degree: f64,
    /// Maximum total degree.
    pub max_degree: usize,
    /// Minimum total degree.
    pub min_degree: usize,
    /// Histogram of total degrees.
    pub degree_distribution: BTreeMap<usize, usize>,
    /// Number of weakly connected components.
    pub components: usize,
    /// Size of the largest component.
    pub largest_component: usize,
}

/// The four centrality measures.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    /// Degree centrality (total degree, max-normalized).
    pub degree: NodeScores,
    /// Sampled Brandes betweenness.
    pub betweenness: BetweennessResult,
    /// Sampled closeness.
    pub closeness: ClosenessResult,
    /// PageRank.
    pub pagerank: PageRankResult,
}

/// Clustering, diameter, and assortativity.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    /// Local and global clustering coefficients.
    pub clustering: ClusteringResult,
    /// Sampled diameter estimate.
    pub diameter: DiameterResult,
    /// Degree assortativity coefficient.
    pub assortativity: f64,
}

/// The airline-domain metrics.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineMetrics {
    /// Mean route efficiency.
    pub efficiency: RouteEfficiencyEstimate,
    /// Internal/external routing per region.
    pub regional: RegionalConnectivity,
    /// Single-edge redundancy estimate.
    pub redundancy: RedundancyEstimate,
}

/// The complete result of a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Basic structural statistics.
    pub basic: BasicStats,
    /// Centrality measures.
    pub centralities: CentralityReport,
    /// Connectivity metrics.
    pub connectivity: ConnectivityReport,
    /// Community structure.
    pub communities: CommunityResult,
    /// Composite hub ranking.
    pub hubs: HubRanking,
    /// Airline-domain metrics.
    pub airline: AirlineMetrics,
    /// Wall time of the run in seconds.
    pub elapsed_seconds: f64,
}

/// The full analysis pipeline.
pub struct NetworkAnalysis;

impl NetworkAnalysis {
    /// Run the full suite with default settings.
    pub fn run(graph: &Graph) -> AnalysisReport {
        Self::run_with_config(graph, &AnalysisConfig::default())
    }

    /// Run the full suite with explicit settings.
    pub fn run_with_config(graph: &Graph, config: &AnalysisConfig) -> AnalysisReport {
        let started = Instant::now();
        info!(
            airports = graph.node_count(),
            routes = graph.edge_count(),
            "starting full network analysis"
        );

        let degrees = DegreeStats::compute(graph);

        info!("computing basic statistics");
        let components = ConnectedComponents::compute(graph);
        let basic = BasicStats {
            airports: graph.node_count(),
            routes: graph.edge_count(),
            density: degrees.density(),
            average_degree: degrees.average(),
            max_degree: degrees.max(),
            min_degree: degrees.min(),
            degree_distribution: degrees.distribution.clone(),
            components: components.num_components,
            largest_component: components.largest(),
        };

        info!("computing centrality measures");
        let betweenness = BetweennessCentrality::compute(graph, &config.betweenness);
        if betweenness.approximate {
            debug!(sources = betweenness.sources, "betweenness sampled below node count");
        }
        let closeness = ClosenessCentrality::compute(graph, &config.closeness);
        let pagerank = PageRank::compute(graph, &config.pagerank);
        let centralities = CentralityReport {
            degree: degrees.centrality(),
            betweenness,
            closeness,
            pagerank,
        };

        info!("computing connectivity metrics");
        let connectivity = ConnectivityReport {
            clustering: ClusteringCoefficient::compute(graph),
            diameter: Connectivity::diameter(graph, &config.diameter),
            assortativity: Connectivity::assortativity(graph, &degrees.total_degrees),
        };

        info!("detecting communities");
        let communities = CommunityDetection::compute(graph, &config.community);

        info!("ranking hubs");
        let hubs =
            HubRanking::compute(&degrees, &centralities.degree, &centralities.pagerank.scores);

        info!("computing airline metrics");
        let airline = AirlineMetrics {
            efficiency: RouteEfficiency::compute(graph, &config.efficiency),
            regional: RegionalConnectivity::compute(graph),
            redundancy: Redundancy::compute(graph, &config.redundancy),
        };

        let elapsed_seconds = started.elapsed().as_secs_f64();
        info!(
            elapsed_seconds,
            components = basic.components,
            communities = communities.num_communities,
            "analysis complete"
        );

        AnalysisReport { basic, centralities, connectivity, communities, hubs, airline, elapsed_seconds }
    }
}
