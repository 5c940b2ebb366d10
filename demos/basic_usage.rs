// demos/basic_usage.rs
//! Basic usage example of the array types

use ctvec::prelude::*;

/// A buffer-oriented routine in the style of a C numeric API.
fn fill_ramp(ptr: *mut f64, count: usize) {
    for i in 0..count {
        unsafe { ptr.add(i).write(i as f64 * 0.5) };
    }
}

fn main() -> Result<()> {
    println!("=== Float Array ===\n");

    let mut temps = FloatArray::with_len_filled(3, 5.0);
    temps.append(7.0);
    println!("After append: {} (len {}, capacity {})", temps, temps.len(), temps.capacity());

    temps.resize(2);
    println!("After resize(2): {}", temps);

    temps.clear();
    println!("After clear: {} (len {})", temps, temps.len());

    println!("\n=== Raw Buffer Access ===\n");

    let mut ramp = FloatArray::with_len(6);
    let len = ramp.len();
    fill_ramp(ramp.as_mut_ptr(), len);
    println!("Filled through pointer: {}", ramp);

    println!("\n=== Int Array ===\n");

    let mut ids = IntArray::with_len(0);
    for id in [1, 2, 3] {
        ids.append(id);
    }
    println!("{} (len {}, capacity {})", ids, ids.len(), ids.capacity());

    ids.set(1, 20)?;
    println!("Checked read of index 1: {}", ids.value(1)?);

    match ids.value(10) {
        Err(e) => println!("Checked read of index 10: {}", e),
        Ok(v) => println!("Unexpected value {}", v),
    }

    println!("\n=== In-Place Resize Policy ===\n");

    let mut scratch = IntArray::with_config(ArrayConfig::in_place());
    scratch.resize(1000);
    scratch.resize(10);
    println!("len {}, capacity {}", scratch.len(), scratch.capacity());

    Ok(())
}
