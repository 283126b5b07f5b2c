//! Decree 43/2013 increase schedule.

/// One row of the statutory schedule, keyed by how far (percent) the current
/// rent sits below the benchmark.
pub(super) struct Band {
    pub(super) max_gap: f64,
    pub(super) increase: u8,
    pub(super) reason: &'static str,
}

/// Ordered ascending by upper bound. Upper edges are inclusive, so a gap of
/// exactly 20 percent stays in the 5 percent band.
const BANDS: [Band; 5] = [
    Band {
        max_gap: 10.0,
        increase: 0,
        reason: "Rent is within 10% of market value",
    },
    Band {
        max_gap: 20.0,
        increase: 5,
        reason: "Rent is 11-20% below market value",
    },
    Band {
        max_gap: 30.0,
        increase: 10,
        reason: "Rent is 21-30% below market value",
    },
    Band {
        max_gap: 40.0,
        increase: 15,
        reason: "Rent is 31-40% below market value",
    },
    Band {
        max_gap: f64::INFINITY,
        increase: 20,
        reason: "Rent is >40% below market value",
    },
];

pub(super) const ABOVE_MARKET_REASON: &str = "Current rent is above market value";

/// Percentage by which the current rent sits below the benchmark. Positive
/// means under market; negative means the rent already exceeds it.
pub(super) fn gap_percent(current_rent: f64, benchmark_rent: f64) -> f64 {
    (benchmark_rent - current_rent) / benchmark_rent * 100.0
}

/// Schedule row for a gap. The infinite upper edge makes the last row a
/// catch-all, so the lookup is total.
pub(super) fn band_for_gap(gap: f64) -> &'static Band {
    BANDS
        .iter()
        .find(|band| gap <= band.max_gap)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}
