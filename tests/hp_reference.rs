//! Compare the banded HP filter against a dense solve of the same system.
//!
//! The reference builds `I + lambda * D'D` explicitly from the second
//! difference matrix `D` and solves it with a Cholesky factorization.

use approx::assert_relative_eq;
use macroprep::trend::HPFilter;

/// Dense `(n - 2) x n` second difference matrix.
fn second_difference(n: usize) -> Vec<Vec<f64>> {
    (0..n - 2)
        .map(|k| {
            let mut row = vec![0.0; n];
            row[k] = 1.0;
            row[k + 1] = -2.0;
            row[k + 2] = 1.0;
            row
        })
        .collect()
}

fn normal_matrix(n: usize, lambda: f64) -> Vec<Vec<f64>> {
    let d = second_difference(n);
    let mut a = vec![vec![0.0; n]; n];
    for i in 0..n {
        a[i][i] = 1.0;
        for j in 0..n {
            a[i][j] += lambda * d.iter().map(|row| row[i] * row[j]).sum::<f64>();
        }
    }
    a
}

fn cholesky_solve(a: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = b.len();
    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }
            if i == j {
                assert!(sum > 0.0, "matrix is not positive definite");
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    let mut y = vec![0.0; n];
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[i][j] * y[j]).sum();
        y[i] = (b[i] - sum) / l[i][i];
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let sum: f64 = (i + 1..n).map(|j| l[j][i] * x[j]).sum();
        x[i] = (y[i] - sum) / l[i][i];
    }
    x
}

/// Log of an index of industrial production shaped series.
fn production_index(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            (50.0 + 0.2 * t + 3.0 * (t / 9.0).sin() + 1.5 * (t / 2.3).cos()).ln()
        })
        .collect()
}

#[test]
fn banded_solve_matches_dense_reference() {
    for &n in &[3usize, 4, 5, 12, 40, 97] {
        for &lambda in &[0.5, 100.0, 1600.0, 129_600.0] {
            let series = production_index(n);
            let expected = cholesky_solve(&normal_matrix(n, lambda), &series);
            let result = HPFilter::new(lambda).decompose(&series).unwrap();

            for (got, want) in result.trend.iter().zip(expected.iter()) {
                assert_relative_eq!(*got, *want, epsilon = 1e-8, max_relative = 1e-8);
            }
        }
    }
}

#[test]
fn trend_satisfies_normal_equations() {
    let n = 150;
    let lambda = 1600.0;
    let series = production_index(n);
    let trend = HPFilter::new(lambda).decompose(&series).unwrap().trend;

    let a = normal_matrix(n, lambda);
    for i in 0..n {
        let lhs: f64 = (0..n).map(|j| a[i][j] * trend[j]).sum();
        assert_relative_eq!(lhs, series[i], epsilon = 1e-8);
    }
}

#[test]
fn larger_lambda_gives_smoother_trend() {
    let series = production_index(120);
    let roughness = |lambda: f64| -> f64 {
        let trend = HPFilter::new(lambda).decompose(&series).unwrap().trend;
        trend
            .windows(3)
            .map(|w| (w[2] - 2.0 * w[1] + w[0]).powi(2))
            .sum()
    };

    let light = roughness(10.0);
    let standard = roughness(1600.0);
    let heavy = roughness(129_600.0);
    assert!(light > standard);
    assert!(standard > heavy);
}
