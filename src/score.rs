// src/score.rs
//
// Chi-squared goodness-of-fit of a table's tracked-party counts against
// the fixed national baseline. The p-value comes from the regularized
// upper incomplete gamma function, evaluated by series or continued
// fraction. Reference: Numerical Recipes in C, 2nd ed., sections 6.1-6.2.
use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

use crate::config::consts::{P_MODERATE_FLOOR, P_NORMAL_FLOOR, PREFERENCES};
use crate::extract::VoteSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Normal,
    OutlierModerado,
    OutlierExtremo,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Normal => "Normal",
            Recommendation::OutlierModerado => "Outlier Moderado",
            Recommendation::OutlierExtremo => "Outlier Extremo",
        }
    }

    fn from_p(p: f64) -> Self {
        if p > P_NORMAL_FLOOR {
            Recommendation::Normal
        } else if p > P_MODERATE_FLOOR {
            Recommendation::OutlierModerado
        } else {
            Recommendation::OutlierExtremo
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Fewer than two baseline parties in the payload. With zero or one
    /// category the test statistic has no degrees of freedom.
    #[error("only {matched} baseline parties present, need at least 2")]
    InsufficientParties { matched: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyScore {
    pub chi_squared: f64,
    pub p_value: f64,
    pub recommendation: Recommendation,
}

/// Score one table. Parties outside the baseline are excluded from the
/// test; pair order follows the payload, so repeated runs over the same
/// payload produce bit-identical scores.
pub fn score_votes(summary: &VoteSummary) -> Result<AnomalyScore, ScoreError> {
    let total = summary.afirmativos as f64;

    let mut observed = Vec::new();
    let mut expected = Vec::new();
    for party in &summary.votes_per_party {
        if let Some(share) = baseline_share(&party.code) {
            observed.push(party.votes as f64);
            expected.push(total * share);
        }
    }

    if observed.len() < 2 {
        return Err(ScoreError::InsufficientParties { matched: observed.len() });
    }

    // No affirmative votes: every expected count is zero and the statistic
    // is undefined. An empty table is not suspicious.
    if summary.afirmativos == 0 {
        return Ok(AnomalyScore {
            chi_squared: 0.0,
            p_value: 1.0,
            recommendation: Recommendation::Normal,
        });
    }

    let chi_squared = pearson_stat(&observed, &expected);
    let dof = (observed.len() - 1) as f64;
    let p_value = chi_squared_sf(chi_squared, dof);

    Ok(AnomalyScore {
        chi_squared,
        p_value,
        recommendation: Recommendation::from_p(p_value),
    })
}

fn baseline_share(code: &str) -> Option<f64> {
    PREFERENCES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, share)| *share)
}

fn pearson_stat(observed: &[f64], expected: &[f64]) -> f64 {
    observed
        .iter()
        .zip(expected)
        .map(|(o, e)| (o - e) * (o - e) / e)
        .sum()
}

/// Survival function of the chi-squared distribution with `dof` degrees
/// of freedom: P(X >= x) = Q(dof/2, x/2).
fn chi_squared_sf(x: f64, dof: f64) -> f64 {
    gamma_q(dof / 2.0, x / 2.0).clamp(0.0, 1.0)
}

/// Regularized upper incomplete gamma Q(a, x), a > 0, x >= 0.
fn gamma_q(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    // The series converges fast for x < a + 1, the continued fraction
    // everywhere else.
    if x < a + 1.0 {
        1.0 - gamma_p_series(a, x)
    } else {
        gamma_q_cf(a, x)
    }
}

/// P(a, x) by the lower-tail power series.
fn gamma_p_series(a: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-15;
    const MAX_ITER: usize = 300;

    let mut ap = a;
    let mut term = 1.0 / a;
    let mut sum = term;
    for _ in 0..MAX_ITER {
        ap += 1.0;
        term *= x / ap;
        sum += term;
        if term.abs() < sum.abs() * EPS {
            break;
        }
    }
    sum * (a * x.ln() - x - ln_gamma(a)).exp()
}

/// Q(a, x) by modified Lentz evaluation of the continued fraction.
fn gamma_q_cf(a: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-15;
    const TINY: f64 = 1e-30;
    const MAX_ITER: usize = 300;

    let mut b = x + 1.0 - a;
    let mut c = 1.0 / TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..=MAX_ITER {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b + an / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < EPS {
            break;
        }
    }
    (a * x.ln() - x - ln_gamma(a)).exp() * h
}

/// ln |Gamma(x)| via the Lanczos approximation, g = 7, 9 coefficients.
fn ln_gamma(x: f64) -> f64 {
    const LANCZOS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    if x < 0.5 {
        // Reflection: Gamma(x) Gamma(1-x) = pi / sin(pi x)
        return PI.ln() - (PI * x).sin().abs().ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, c) in LANCZOS.iter().enumerate().skip(1) {
        acc += c / (z + i as f64);
    }
    let t = z + 7.5;
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + acc.ln()
}

/* ---------- tests ---------- */
