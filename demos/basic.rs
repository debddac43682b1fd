//! Basic usage of the 3-PG SIMD kernels.

use threepg_simd::accuracy::{exp2_sweep, log2_sweep, pow_sweep, roundtrip_sweep};
use threepg_simd::{SimdWidth, f32x4, log2_x4, pow_const_x4, scalar};

fn main() {
    // Four lanes at once
    println!("=== 4-lane kernels ===");
    let x = f32x4::from([1.0, 2.0, 10.0, 1000.0]);
    println!("log2({:?}) = {:?}", x.to_array(), log2_x4(x).to_array());
    println!("{:?} ^ 2.4 = {:?}", x.to_array(), pow_const_x4(x, 2.4).to_array());

    // Single values
    println!("\n=== Scalar kernels ===");
    for v in [0.5f32, 3.0, 42.0] {
        println!(
            "x = {:6.2}  ln = {:.6}  exp(ln) = {:.6}",
            v,
            scalar::ln(v),
            scalar::exp(scalar::ln(v))
        );
    }

    // Run-wide width selection; both widths give identical bits
    println!("\n=== Width selection ===");
    let width = SimdWidth::preferred();
    let mut stem_mass: Vec<f32> = (1..=9).map(|d| d as f32 * 4.5).collect();
    let mut check = stem_mass.clone();
    width.pow_slice(&mut stem_mass, 2.4);
    SimdWidth::Scalar.pow_slice(&mut check, 2.4);
    println!("preferred width: {}", width);
    println!("identical to scalar: {}", stem_mass == check);

    println!("\n=== Accuracy ===");
    println!("log2  [1e-3, 1e4]   {:?}", log2_sweep(1.0e-3, 1.0e4, 200_000));
    println!("exp2  [-126, 126]   {:?}", exp2_sweep(-126.0, 126.0, 200_000));
    println!("round [1e-3, 1e6]   {:?}", roundtrip_sweep(1.0e-3, 1.0e6, 200_000));
    println!("pow2.4 [0.01, 100]  {:?}", pow_sweep(0.01, 100.0, 2.4, 200_000));
}
