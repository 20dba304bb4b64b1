//! The demonstration run by the `timefield` binary.

use core::fmt::Display;
use core::hash::{Hash, Hasher};
use std::io::Write;

use ahash::AHasher;
use log::debug;

use crate::*;

/// Hash a value with fixed keys so the result is stable between runs.
pub fn fingerprint<T: Hash>(value: &T) -> u64 {
    let mut hasher = AHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

fn write_value<W: Write, T: Hash + Display>(w: &mut W, value: &T) -> Result<(), std::io::Error> {
    writeln!(w, "{}; hash: {}", value, fingerprint(value))
}

/// Build the sample durations and write each result on its own line.
pub fn run<W: Write>(w: &mut W) -> Result<(), std::io::Error> {
    debug!("coarse durations");
    let first = Duration::new(0, 1, 0);
    let second = Duration::new(1, 1, 1);
    write_value(w, &first)?;
    write_value(w, &second)?;
    writeln!(w, "{}", first == second)?;
    writeln!(w, "{}", first < second)?;

    debug!("normalized durations");
    let third = NormalizedDuration::new(72, 61, 0);
    let fourth = NormalizedDuration::new(24, 1, 1);
    write_value(w, &third)?;
    write_value(w, &fourth)?;
    writeln!(w, "{}", third == fourth)?;

    debug!("precise durations");
    let fifth = HighResDuration::new(1, 1, 1, 1, 1, 1);
    let sixth = HighResDuration::new(1, 1, 1, 0, 0, 0);
    write_value(w, &fifth)?;
    write_value(w, &sixth)?;
    writeln!(w, "{}", fifth == sixth)?;
    writeln!(w, "{}", sixth > fifth)?;

    debug!("cross-scale comparison");
    writeln!(w, "{}", CrossScaleComparator::compare(&second, &sixth))?;

    Ok(())
}
