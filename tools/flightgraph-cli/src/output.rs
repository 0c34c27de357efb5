//! Rendering of analysis results and route queries.

use flightgraph::{AnalysisReport, Graph, PathResult};

use crate::error::Result;

/// Print the whole report as pretty JSON.
pub fn print_json(report: &AnalysisReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the human-readable analysis summary.
pub fn print_summary(graph: &Graph, report: &AnalysisReport, top: usize) {
    println!("===== Network analysis =====");
    println!("Airports:               {}", report.basic.airports);
    println!("Routes:                 {}", report.basic.routes);
    println!("Density:                {:.4}%", report.basic.density * 100.0);
    println!("Average degree:         {:.2}", report.basic.average_degree);
    println!(
        "Connected components:   {} (largest {})",
        report.basic.components, report.basic.largest_component
    );
    println!("Clustering coefficient: {:.4}", report.connectivity.clustering.global);
    println!(
        "Diameter{}:     {:.0} km",
        if report.connectivity.diameter.approximate { " (sampled)" } else { "          " },
        report.connectivity.diameter.value
    );
    println!("Assortativity:          {:.4}", report.connectivity.assortativity);
    println!(
        "Communities:            {} (modularity {:.4})",
        report.communities.num_communities, report.communities.modularity
    );
    println!("Route efficiency:       {:.4}", report.airline.efficiency.mean);
    println!("Redundancy:             {:.4}", report.airline.redundancy.fraction);
    println!("Elapsed:                {:.2}s", report.elapsed_seconds);

    if !report.hubs.all().is_empty() {
        println!();
        println!("Top {} hubs:", top.min(report.hubs.all().len()));
        for (position, hub) in report.hubs.top(top).iter().enumerate() {
            let label = graph
                .airport(hub.index)
                .map_or_else(|| format!("#{}", hub.index), airport_label);
            println!(
                "  {:>2}. {label} - {} connections, score {:.1}",
                position + 1,
                hub.total_degree,
                hub.score
            );
        }
    }

    if !report.airline.regional.regions.is_empty() {
        println!();
        println!("Regions:");
        for (region, stats) in &report.airline.regional.regions {
            println!(
                "  {region}: {} airports, {} internal / {} external routes",
                stats.airports, stats.internal_routes, stats.external_routes
            );
        }
    }
}

/// Print a computed route, stop by stop.
pub fn print_route(graph: &Graph, path: &PathResult) {
    println!("Total distance: {:.0} km", path.total_distance);
    println!("Stops:          {}", path.hops().saturating_sub(1));
    for (position, &index) in path.nodes.iter().enumerate() {
        let label =
            graph.airport(index).map_or_else(|| format!("#{index}"), airport_label);
        let marker = if position == 0 {
            "depart"
        } else if position == path.nodes.len() - 1 {
            "arrive"
        } else {
            "via   "
        };
        println!("  {marker}  {label}");
    }
}

/// Label an airport for terminal output: "Name (IATA), City, Country"
/// with empty parts elided.
pub fn airport_label(airport: &flightgraph::Airport) -> String {
    let mut label = airport.name.clone();
    if !airport.iata.is_empty() {
        label.push_str(&format!(" ({})", airport.iata));
    }
    if !airport.city.is_empty() {
        label.push_str(&format!(", {}", airport.city));
    }
    if !airport.country.is_empty() {
        label.push_str(&format!(", {}", airport.country));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightgraph::Airport;

    #[test]
    fn label_elides_empty_fields() {
        let bare = Airport::new(1, "Somewhere");
        assert_eq!(airport_label(&bare), "Somewhere");

        let full = Airport::new(2, "Heathrow")
            .with_iata("LHR")
            .with_city("London")
            .with_country("United Kingdom");
        assert_eq!(airport_label(&full), "Heathrow (LHR), London, United Kingdom");
    }
}
