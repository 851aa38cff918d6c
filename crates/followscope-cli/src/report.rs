//! Per-competitor console summary of a processed record set.

use std::collections::BTreeMap;
use std::path::Path;

use followscope_core::NormalizedRecord;

/// Aggregates for one competitor's listings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CompetitorSummary {
    pub listings: usize,
    pub mean_price: f64,
    /// Unset when no listing had a computable price-per-volume.
    pub mean_price_per_volume: Option<f64>,
}

/// Groups records by competitor and computes per-competitor means.
pub(crate) fn summarize(records: &[NormalizedRecord]) -> BTreeMap<String, CompetitorSummary> {
    struct Acc {
        listings: usize,
        price_sum: f64,
        ppv_sum: f64,
        ppv_count: usize,
    }

    let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
    for record in records {
        let acc = groups.entry(record.competitor.clone()).or_insert(Acc {
            listings: 0,
            price_sum: 0.0,
            ppv_sum: 0.0,
            ppv_count: 0,
        });
        acc.listings += 1;
        acc.price_sum += record.price;
        if let Some(ppv) = record.price_per_volume {
            acc.ppv_sum += ppv;
            acc.ppv_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|(competitor, acc)| {
            #[allow(clippy::cast_precision_loss)]
            let summary = CompetitorSummary {
                listings: acc.listings,
                mean_price: acc.price_sum / acc.listings as f64,
                mean_price_per_volume: (acc.ppv_count > 0)
                    .then(|| acc.ppv_sum / acc.ppv_count as f64),
            };
            (competitor, summary)
        })
        .collect()
}

/// Reads a processed record set and prints the per-competitor summary.
pub(crate) fn run_report(input: &Path) -> anyhow::Result<()> {
    let mut reader = csv::Reader::from_path(input)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {e}", input.display()))?;

    let mut records: Vec<NormalizedRecord> = Vec::new();
    for result in reader.deserialize() {
        records.push(result.map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))?);
    }

    let groups = summarize(&records);
    println!(
        "{} records across {} competitors in {}",
        records.len(),
        groups.len(),
        input.display()
    );
    if !records.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let mean_price =
            records.iter().map(|r| r.price).sum::<f64>() / records.len() as f64;
        let ppv: Vec<f64> = records.iter().filter_map(|r| r.price_per_volume).collect();
        println!("Overall mean price: {mean_price:.0}");
        if !ppv.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let mean_ppv = ppv.iter().sum::<f64>() / ppv.len() as f64;
            println!("Overall mean price/cm3: {mean_ppv:.4}");
        }
    }
    println!(
        "{:<20} {:>10} {:>14} {:>18}",
        "Competitor", "Listings", "Mean price", "Mean price/cm3"
    );
    for (competitor, summary) in groups {
        let ppv = summary
            .mean_price_per_volume
            .map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        println!(
            "{:<20} {:>10} {:>14.0} {:>18}",
            competitor, summary.listings, summary.mean_price, ppv
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use followscope_core::Category;

    fn record(competitor: &str, price: f64, thickness_cm: f64) -> NormalizedRecord {
        NormalizedRecord::new(
            competitor,
            None,
            thickness_cm,
            100.0,
            100.0,
            price,
            Category::Roll,
        )
    }

    #[test]
    fn summarize_groups_by_competitor_with_means() {
        let records = vec![
            record("파크론", 20000.0, 1.0),
            record("파크론", 40000.0, 2.0),
            record("티지오매트", 9900.0, 1.5),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.len(), 2);
        let parklon = &summary["파크론"];
        assert_eq!(parklon.listings, 2);
        assert!((parklon.mean_price - 30000.0).abs() < f64::EPSILON);
        // per-record ppv: 20000/10000 = 2.0 and 40000/20000 = 2.0
        assert!((parklon.mean_price_per_volume.unwrap() - 2.0).abs() < 1e-9);

        let tgo = &summary["티지오매트"];
        assert_eq!(tgo.listings, 1);
        assert!((tgo.mean_price - 9900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn records_without_price_per_volume_do_not_poison_the_mean() {
        let records = vec![
            record("파크론", 20000.0, 1.0),
            record("파크론", 99000.0, 0.0),
        ];
        let summary = summarize(&records);
        let parklon = &summary["파크론"];
        assert_eq!(parklon.listings, 2);
        assert!((parklon.mean_price_per_volume.unwrap() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn empty_record_set_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }
}
