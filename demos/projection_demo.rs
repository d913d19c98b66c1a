//! Projected gradient on a constrained least-squares toy problem.
//!
//! Minimizes ½‖x − b‖² subject to ‖x‖₁ ≤ r, whose solution is exactly the
//! projection of `b` onto the ball. The demo runs a few projected gradient
//! steps, then compares the iterate against the one-shot projection and the
//! bisection reference.
//!
//! Set `RUST_LOG=l1ball=trace` to see the threshold chosen at every step.

use l1ball::core::l1_norm;
use l1ball::{L1Ball, ProximableFunction};
use num_complex::Complex64;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("l1ball=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let b = vec![3.0, -1.5, 0.2, 0.0, -2.5, 0.7];
    let ball = L1Ball::new(2.0)?;
    tracing::info!("{ball}");
    tracing::info!("‖b‖₁ = {}, f(b) = {}", l1_norm(&b), ball.evaluate(&b));

    // 1) Projected gradient with step γ = 0.5.
    let gamma = 0.5;
    let mut x = vec![0.0; b.len()];
    let mut z = vec![0.0; b.len()];
    for it in 0..40 {
        for i in 0..x.len() {
            z[i] = x[i] - gamma * (x[i] - b[i]);
        }
        ball.prox_into(&mut x, &z, gamma)?;
        if it % 10 == 0 {
            tracing::info!(iteration = it, "x = {x:.4?}");
        }
    }

    // 2) One-shot projection and the bisection reference.
    let (p, _) = ProximableFunction::<f64>::prox(&ball, &b, gamma)?;
    let (q, _) = ball.prox_naive(&b, gamma);
    let gap_pg: f64 = x.iter().zip(&p).map(|(a, c)| (a - c).abs()).fold(0.0, f64::max);
    let gap_ref: f64 = p.iter().zip(&q).map(|(a, c)| (a - c).abs()).fold(0.0, f64::max);

    println!("projection      = {p:.6?}");
    println!("‖projection‖₁   = {:.12}", l1_norm(&p));
    println!("max |x_pg − P|  = {gap_pg:.3e}");
    println!("max |P − P_ref| = {gap_ref:.3e}");

    // 3) Complex input: moduli are thresholded, phases kept.
    let c = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -1.0)];
    let mut w = vec![Complex64::new(0.0, 0.0); c.len()];
    ball.prox_into(&mut w, &c, 1.0)?;
    println!("complex projection = {w:?}");

    Ok(())
}
