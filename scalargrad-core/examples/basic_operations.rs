// Builds a small expression graph, propagates gradients through it and prints
// the activations on a single input.
//
// Run with `RUST_LOG=debug cargo run --example basic_operations` to see the
// propagation log.

use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    println!("{}", "=".repeat(60));
    println!("Basic operations and autograd");
    println!("{}", "=".repeat(60));

    let a = Value::with_label(-4.0, "a");
    let b = Value::with_label(2.0, "b");

    let c = &a + &b;
    c.set_label("c");
    let d = &a * &b + b.pow(3.0)?;
    d.set_label("d");
    let e = &c - &d;
    e.set_label("e");
    let f = e.pow(2.0)?;
    f.set_label("f");
    let g = f.try_div(&Value::new(2.0))?;
    g.set_label("g");
    let g = &g + &Value::new(10.0).try_div(&f)?;

    println!("\nFinal value: {}", g);
    println!("\nComputing gradients...");
    g.backward();
    println!("dg/da = {:.4}", a.grad());
    println!("dg/db = {:.4}", b.grad());

    println!("\n{}", "=".repeat(60));
    println!("Activation functions");
    println!("{}", "=".repeat(60));

    let x = Value::with_label(0.5, "x");
    println!("\nReLU({}) = {:.4}", x.data(), x.relu().data());
    println!("tanh({}) = {:.4}", x.data(), x.tanh().data());
    println!("sigmoid({}) = {:.4}", x.data(), x.sigmoid().data());
    println!("exp({}) = {:.4}", x.data(), x.exp().data());
    println!("log({}) = {:.4}", x.data(), x.log()?.data());

    Ok(())
}
