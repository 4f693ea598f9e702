use super::types::TierReport;
use std::fmt::Write;

/// Render the sequential/binary ratio, or `N/A` when it is undefined.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}x", r),
        None => "N/A".to_string(),
    }
}

/// Full labelled report for one tier.
pub fn format_tier_report(report: &TierReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    writeln!(
        out,
        "\n===== RESULTS FOR {} DIRECTORY ({} files nominal) =====",
        report.tier.label().to_uppercase(),
        report.tier.nominal_count()
    )
    .unwrap();
    writeln!(out, "Keys measured:                      {}", report.key_count).unwrap();
    writeln!(out, "Sort time:                          {:.4} ms", stats.sort_ms).unwrap();
    writeln!(
        out,
        "Avg sequential search:              {:.4} ms",
        stats.sequential_search_ms
    )
    .unwrap();
    writeln!(
        out,
        "Avg binary search:                  {:.4} ms",
        stats.binary_search_ms
    )
    .unwrap();
    writeln!(out, "Avg deletion:                       {:.4} ms", stats.deletion_ms).unwrap();
    writeln!(out, "Avg ordered insertion:              {:.4} ms", stats.insertion_ms).unwrap();
    writeln!(
        out,
        "Ratio sequential/binary:            {}",
        format_ratio(stats.search_ratio())
    )
    .unwrap();
    writeln!(out, "{}", "=".repeat(60)).unwrap();

    out
}

pub fn print_tier_report(report: &TierReport) {
    print!("{}", format_tier_report(report));
}

/// Print one row per tier so tiers can be compared side by side.
pub fn print_summary_table(reports: &[TierReport]) {
    if reports.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(110));
    println!("Summary");
    println!("{}", "=".repeat(110));
    println!(
        "{:<8} {:<12} {:<10} {:<12} {:<14} {:<14} {:<14} {:<14} {:<10}",
        "Tier", "Nominal", "Keys", "Sort", "Seq search", "Bin search", "Delete", "Insert", "Seq/Bin"
    );
    println!(
        "{:<8} {:<12} {:<10} {:<12} {:<14} {:<14} {:<14} {:<14} {:<10}",
        "", "(files)", "", "(ms)", "(ms/op)", "(ms/op)", "(ms/op)", "(ms/op)", ""
    );
    println!("{}", "-".repeat(110));

    for r in reports {
        let s = &r.stats;
        println!(
            "{:<8} {:<12} {:<10} {:<12.4} {:<14.6} {:<14.6} {:<14.6} {:<14.6} {:<10}",
            r.tier.label(),
            r.tier.nominal_count(),
            r.key_count,
            s.sort_ms,
            s.sequential_search_ms,
            s.binary_search_ms,
            s.deletion_ms,
            s.insertion_ms,
            format_ratio(s.search_ratio()),
        );
    }
    println!("{}", "=".repeat(110));
}

/// CSV export: header plus one row per tier. Undefined ratios are left empty.
pub fn reports_to_csv(reports: &[TierReport]) -> String {
    let mut csv = String::new();

    writeln!(
        csv,
        "tier,nominal_files,keys,sort_ms,sequential_search_ms,binary_search_ms,deletion_ms,insertion_ms,search_ratio"
    )
    .unwrap();

    for r in reports {
        let s = &r.stats;
        let ratio = s
            .search_ratio()
            .map(|x| format!("{:.4}", x))
            .unwrap_or_default();
        writeln!(
            csv,
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{}",
            r.tier.label(),
            r.tier.nominal_count(),
            r.key_count,
            s.sort_ms,
            s.sequential_search_ms,
            s.binary_search_ms,
            s.deletion_ms,
            s.insertion_ms,
            ratio
        )
        .unwrap();
    }

    csv
}
