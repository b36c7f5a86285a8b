use vecmat::ops;

fn main() {
    // === Phase 1: Vector operations ===
    println!("=== Phase 1: Vector Operations ===\n");

    let v = vec![3.0, 4.0];
    let unit = ops::unit_vector(&v).unwrap();
    println!("unit_vector({:?}) = {:?}", v, unit);
    println!("  norm of result: {:.6}", ops::norm(&unit));

    let angle = ops::angle_between(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    println!("angle_between([1,0], [0,1]) = {:.4} degrees", angle);
    let angle = ops::angle_between(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
    println!("angle_between([1,0], [1,1]) = {:.4} degrees\n", angle);

    // === Phase 2: Relationship checks ===
    println!("=== Phase 2: Relationship Checks ===\n");

    let (orthogonal, dot) = ops::orthogonality(&[1.0, 0.0], &[0.0, 5.0]).unwrap();
    println!("orthogonality([1,0], [0,5]): orthogonal={} dot={:.4}", orthogonal, dot);
    let (orthogonal, dot) = ops::orthogonality(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
    println!("orthogonality([1,2], [2,4]): orthogonal={} dot={:.4}", orthogonal, dot);

    let (parallel, cross) = ops::parallelism(&[2.0, 4.0], &[1.0, 2.0]).unwrap();
    println!("parallelism([2,4], [1,2]): parallel={} cross={:?}", parallel, cross);
    let (parallel, cross) = ops::parallelism(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
    println!("parallelism([1,0], [0,1]): parallel={} cross={:?}\n", parallel, cross);

    // === Phase 3: Combinations and systems ===
    println!("=== Phase 3: Combinations and Systems ===\n");

    let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let coefficients = vec![2.0, 3.0];
    let combined = ops::linear_combination(&vectors, &coefficients).unwrap();
    println!("2*[1,0] + 3*[0,1] = {:?}", combined);

    let a = vec![
        vec![1.0, 2.0, 0.0],
        vec![3.0, 1.0, 1.0],
        vec![0.0, 1.0, 2.0],
    ];
    let b = vec![5.0, 8.0, 8.0];
    let solution = ops::solve_system(&a, &b).unwrap();
    println!("solve_system(3x3) = {:?}\n", solution);

    // === Phase 4: Matrix operations ===
    println!("=== Phase 4: Matrix Operations ===\n");

    let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let transpose = ops::matrix_transpose(&m).unwrap();
    println!("transpose(2x3) = {:?}", transpose);

    let m2 = vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]];
    let product = ops::matrix_multiply(&m, &m2).unwrap();
    println!("multiply(2x3, 3x2) = {:?}\n", product);

    // === Phase 5: Failure modes ===
    println!("=== Phase 5: Failure Modes ===\n");

    match ops::unit_vector(&[0.0, 0.0]) {
        Ok(unit) => println!("unit_vector([0,0]) = {:?}", unit),
        Err(error) => println!("unit_vector([0,0]) -> Error: {}", error),
    }
    match ops::solve_system(&[vec![1.0, 2.0], vec![2.0, 4.0]], &[3.0, 6.0]) {
        Ok(solution) => println!("solve_system(singular) = {:?}", solution),
        Err(error) => println!("solve_system(singular) -> Error: {}", error),
    }
    match ops::angle_between(&[1.0, 0.0], &[1.0, 0.0, 0.0]) {
        Ok(angle) => println!("angle_between(2d, 3d) = {:.4}", angle),
        Err(error) => println!("angle_between(2d, 3d) -> Error: {}", error),
    }

    println!("\n=== Summary ===");
    println!("Eight operations, all stateless; failures report a message instead of panicking.");
}
