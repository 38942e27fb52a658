use linmat::{Matrix, Vector, cross_product, lerp};
use rand::Rng;

fn main() -> Result<(), linmat::LinalgError> {
    let n = 4;
    // build a random SPD matrix: A = MᵀM + I
    let mut rng = rand::thread_rng();
    let m = Matrix::<f64>::from_fn(n, n, |_, _| rng.r#gen());
    let mut a = &m.transpose() * &m;
    for i in 0..n {
        a[(i, i)] += 1.0;
    }
    println!("A =\n{a:.4}");
    println!("det(A) = {:.6}, rank(A) = {}", a.determinant()?, a.rank());

    let inv = a.inverse()?;
    println!("A⁻¹ =\n{inv:.4}");
    println!("A·A⁻¹ =\n{:.4}", &a * &inv);

    // rhs
    let b = Vector::from((0..n).map(|_| rng.r#gen()).collect::<Vec<f64>>());
    let x = a.solve(&b)?;
    println!("x = {:?}, residual = {:e}", x.as_slice(), (&(&a * &x) - &b).norm_2());

    let u = Vector::from(vec![1.0, 2.0, 3.0]);
    let v = Vector::from(vec![4.0, 5.0, 6.0]);
    println!("u × v = {:?}", cross_product(&u, &v)?.as_slice());
    println!("lerp(u, v, 0.5) = {:?}", lerp(&u, &v, 0.5)?.as_slice());
    Ok(())
}
