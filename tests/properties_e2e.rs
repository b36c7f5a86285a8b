use std::time::Instant;
use vecmat::ops;

fn random_vector(dim: usize, seed: u64) -> Vec<f64> {
    // Simple LCG pseudo-random generator (no external dep needed)
    let mut state = seed;
    (0..dim)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            // Map to [-1.0, 1.0]
            ((state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
        })
        .collect()
}

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| random_vector(cols, seed.wrapping_add(r as u64 * 7919)))
        .collect()
}

#[test]
fn test_randomized_operation_sweep() {
    let num_vectors = 1000;
    let num_matrices = 100;
    let num_systems = 100;

    println!("\n=== Operation Property Sweep ===");
    println!("Vectors: {}, Matrices: {}, Systems: {}\n", num_vectors, num_matrices, num_systems);

    // Phase 1: Normalized vectors have unit norm and preserve direction
    let start = Instant::now();
    for i in 0..num_vectors {
        let dim = 2 + (i % 14);
        let v = random_vector(dim, i as u64);
        let unit = ops::unit_vector(&v).unwrap();

        assert!((ops::norm(&unit) - 1.0).abs() < 1e-9);
        let scale = ops::norm(&v);
        for (u, x) in unit.iter().zip(v.iter()) {
            assert!((u * scale - x).abs() < 1e-9);
        }
    }
    let unit_time = start.elapsed();
    println!("Phase 1 - {} unit vectors: {:.3}s", num_vectors, unit_time.as_secs_f64());

    // Phase 2: Angles fall in [0, 180] and are symmetric
    let start = Instant::now();
    for i in 0..num_vectors {
        let dim = 2 + (i % 14);
        let v1 = random_vector(dim, i as u64);
        let v2 = random_vector(dim, (num_vectors + i) as u64);

        let angle = ops::angle_between(&v1, &v2).unwrap();
        assert!((0.0..=180.0).contains(&angle));

        let reversed = ops::angle_between(&v2, &v1).unwrap();
        assert!((angle - reversed).abs() < 1e-9);
    }
    let angle_time = start.elapsed();
    println!("Phase 2 - {} angle pairs: {:.3}s", num_vectors, angle_time.as_secs_f64());

    // Phase 3: Scaled copies are parallel, v - v combines to zero
    let start = Instant::now();
    for i in 0..num_vectors {
        let dim = 2 + (i % 2);
        let v = random_vector(dim, i as u64);
        let scaled: Vec<f64> = v.iter().map(|x| 2.0 * x).collect();

        let (parallel, _) = ops::parallelism(&v, &scaled).unwrap();
        assert!(parallel, "Scaled copy not detected as parallel at seed {}", i);

        let zero = ops::linear_combination(&[v.clone(), v], &[1.0, -1.0]).unwrap();
        assert!(zero.iter().all(|x| *x == 0.0));
    }
    let parallel_time = start.elapsed();
    println!("Phase 3 - {} parallel checks: {:.3}s", num_vectors, parallel_time.as_secs_f64());

    // Phase 4: Transposing twice is the identity, and (AB)^T = B^T A^T
    let start = Instant::now();
    for i in 0..num_matrices {
        let rows = 2 + (i % 5);
        let cols = 2 + (i % 7);
        let a = random_matrix(rows, cols, i as u64);
        let b = random_matrix(cols, rows, (num_matrices + i) as u64);

        let twice = ops::matrix_transpose(&ops::matrix_transpose(&a).unwrap()).unwrap();
        assert_eq!(twice, a);

        let left = ops::matrix_transpose(&ops::matrix_multiply(&a, &b).unwrap()).unwrap();
        let right = ops::matrix_multiply(
            &ops::matrix_transpose(&b).unwrap(),
            &ops::matrix_transpose(&a).unwrap(),
        )
        .unwrap();
        assert_eq!(left, right);
    }
    let transpose_time = start.elapsed();
    println!("Phase 4 - {} transpose/multiply identities: {:.3}s", num_matrices, transpose_time.as_secs_f64());

    // Phase 5: Solutions of diagonally dominant systems satisfy A*x = b
    let start = Instant::now();
    for i in 0..num_systems {
        let dim = 2 + (i % 6);
        let mut a = random_matrix(dim, dim, i as u64);
        // Strengthen the diagonal so the system is never singular
        for (r, row) in a.iter_mut().enumerate() {
            row[r] += dim as f64 + 1.0;
        }
        let b = random_vector(dim, (num_systems + i) as u64);

        let x = ops::solve_system(&a, &b).unwrap();
        assert_eq!(x.len(), dim);
        for (row, rhs) in a.iter().zip(b.iter()) {
            let recovered: f64 = row.iter().zip(x.iter()).map(|(l, r)| l * r).sum();
            assert!((recovered - rhs).abs() < 1e-9, "Residual too large at seed {}", i);
        }
    }
    let solve_time = start.elapsed();
    println!("Phase 5 - {} solved systems: {:.3}s (avg {:.3}ms/system)\n",
        num_systems, solve_time.as_secs_f64(),
        solve_time.as_secs_f64() / num_systems as f64 * 1000.0);
}
