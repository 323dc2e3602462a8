use complex_number::{Complex, ComplexError};

fn main() -> Result<(), ComplexError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let a = Complex::new(1, 2);
    let b = Complex::new(3, -1);

    println!("a = {a}, b = {b}");
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / b = {}", (a / b)?);
    println!("a ^ 0.5 = {}", a.powf(0.5));
    println!("|a| = {} ({})", a.magnitude(), a.norm());

    // same magnitude, so these compare equal
    let (one, i) = (Complex::new(1, 0), Complex::<i32>::i());
    println!("{one} == {i}: {}", one == i);

    match a / Complex::default() {
        Ok(z) => println!("a / 0 = {z}"),
        Err(e) => println!("a / 0: {e}"),
    }

    Ok(())
}
