use matrix_ops::Matrix;

fn main() {
    // RUST_LOG=trace shows why a matrix was rejected
    env_logger::init();

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);

    println!("a * b =");
    a.multiply(&b).expect("2x2 by 2x2").print();

    println!("transpose(a) =");
    a.transpose().expect("a is rectangular").print();

    let row = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]);
    let col = Matrix::from_rows(vec![vec![4.0], vec![5.0], vec![6.0]]);
    println!("row . col = {}", row.dot(&col).expect("equal length vectors"));

    let ragged = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
    match ragged.transpose() {
        Ok(t) => t.print(),
        Err(e) => println!("ragged input rejected: {}", e),
    }
}
