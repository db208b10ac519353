//! Minimal end-to-end example: convert a length, compare with tolerances and compute a velocity.

use csiquant::prelude::*;

fn main() -> Result<(), QuantityError> {
    let d = 1001.0 * METERS;
    println!("{} m = {} km", d.magnitude(), d.get_as(KILOMETERS)?);
    println!("rounded to km: {:?}", d.round_to(KILOMETERS)?.magnitude());

    let km = 1.0 * KILOMETERS;
    assert!(d.q_approx(km, 2.0 * METERS)?);
    assert!(!d.q_approx(km, 0.5 * METERS)?);

    let t = 40.0 * SECONDS;
    let v = (d / t)?;
    assert!(v.is_of(Dimension::VELOCITY)?);
    println!("velocity: {} m/s", v.get_as(METERS_PER_SECOND)?);

    match (d + t).map(|q| q.magnitude()) {
        Ok(_) => unreachable!("length and time are incommensurable"),
        Err(e) => println!("expected failure: {e}"),
    }
    Ok(())
}
