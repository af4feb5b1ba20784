// ============================================================================
// Find Pi
// Demonstration binary: square roots and pi at the default precision
// ============================================================================

use realnum::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Realnum Example ===\n");

    let x: RealNumber = "1.0".parse().expect("literal parses");
    println!("x is {}", x);
    let y: RealNumber = "300000000.0".parse().expect("literal parses");
    println!("y is {}", y);

    // eleven integer digits exceed the configured maximum
    match "10000000000.0".parse::<RealNumber>() {
        Ok(_) => println!("unexpected: oversized integer part was accepted"),
        Err(err) => println!("this error is expected: {}", err),
    }

    match x.checked_div(&y) {
        Ok(z) => println!("z is {}", z),
        Err(err) => println!("division failed: {}", err),
    }
    println!("x.difference(y) is {}", x.difference(&y));

    let num: RealNumber = "2.0".parse().expect("literal parses");
    let guess: RealNumber = "1.4".parse().expect("literal parses");
    let iterations = 10;

    match babylonian_sqrt(&num, &guess, iterations) {
        Ok(sqrt_two) => {
            println!("Square root of 2 is {}", sqrt_two);
            match gauss_legendre_pi(6, iterations, &sqrt_two) {
                Ok(pi) => println!("Pi is\n{}", pi),
                Err(err) => println!("pi computation failed: {}", err),
            }
        },
        Err(err) => println!("sqrt computation failed: {}", err),
    }
}
