/// Arithmetic mean of the values, or 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Calculate Cohen's d for two independent samples.
///
/// The mean difference between the groups is divided by their pooled standard
/// deviation to give a standardized effect size for the group difference.
///
/// # Notes
/// Assumes that both groups hold at least one sample.
pub fn cohens_d(
    g1_mean: f64,
    g1_sd: f64,
    g1_n: usize,
    g2_mean: f64,
    g2_sd: f64,
    g2_n: usize,
) -> f64 {
    let mean_diff = g2_mean - g1_mean;

    let sd_num = (g1_n - 1) as f64 * g1_sd.powi(2) + (g2_n - 1) as f64 * g2_sd.powi(2);
    let sd_denom = (g1_n + g2_n - 2) as f64;
    let sd_pooled = (sd_num / sd_denom).sqrt();

    mean_diff / sd_pooled
}

#[test]
fn test_mean_of_values() {
    assert_eq!(0.0, mean(&[]));
    assert_eq!(10.0, mean(&[10.0]));
    assert_eq!(15.0, mean(&[10.0, 20.0]));
    assert_eq!(20.0, mean(&[10.0, 20.0, 30.0]));
}

#[test]
fn test_cohens_d_with_unit_pooled_deviation_is_the_mean_difference() {
    assert_eq!(1.0, cohens_d(2.0, 1.0, 10, 3.0, 1.0, 10));
    assert_eq!(-1.0, cohens_d(3.0, 1.0, 10, 2.0, 1.0, 10));
}

#[test]
fn test_cohens_d_of_equal_means_is_zero() {
    assert_eq!(0.0, cohens_d(5.0, 2.0, 20, 5.0, 1.5, 30));
}
