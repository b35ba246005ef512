//! Prints `get_max_default` for two bit sets or two intervals given on the command line.
//!
//! ```text
//! cargo run --example 01-get-max -- bits 15 12 0
//! cargo run --example 01-get-max -- interval 2 6 3 5 0 0
//! ```
//!
//! With no arguments, a few fixed pairs are shown.

use core::fmt::Display;

use containment::{BitSet, Interval};
use eyre::WrapErr;
use poset_max::{get_max_default, log::ShortForm, GreaterOrEqual};

fn report<T: GreaterOrEqual + Display + ShortForm + Copy>(a: T, b: T, dflt: T) {
    let max = get_max_default(a, b, dflt);
    println!("a    = {a} {}", a.short_form());
    println!("b    = {b} {}", b.short_form());
    println!("dflt = {dflt} {}", dflt.short_form());
    println!("max  = {max} ({:?})", a.containment_cmp(&b));
    println!();
}

fn parse<T: core::str::FromStr>(args: &[String]) -> eyre::Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.iter()
        .map(|arg| arg.parse::<T>().wrap_err_with(|| format!("failed to parse {arg:?}")))
        .collect()
}

fn main() -> eyre::Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match args.split_first() {
        None => {
            report(BitSet::from_bits(15), BitSet::from_bits(12), BitSet::from_bits(0));
            report(BitSet::from_bits(6), BitSet::from_bits(3), BitSet::from_bits(99));
            report(Interval::new(2, 6), Interval::new(3, 5), Interval::new(0, 0));
            report(Interval::new(0, 4), Interval::new(2, 6), Interval::new(0, 0));
        }
        Some((kind, rest)) if kind == "bits" => {
            let values = parse::<u32>(rest)?;
            let [a, b, dflt] = values[..] else {
                eyre::bail!("expected `bits A B DFLT`, got {rest:?}");
            };
            report(BitSet::from_bits(a), BitSet::from_bits(b), BitSet::from_bits(dflt));
        }
        Some((kind, rest)) if kind == "interval" => {
            let values = parse::<i32>(rest)?;
            let [a1, a2, b1, b2, d1, d2] = values[..] else {
                eyre::bail!("expected `interval A1 A2 B1 B2 D1 D2`, got {rest:?}");
            };
            report(Interval::new(a1, a2), Interval::new(b1, b2), Interval::new(d1, d2));
        }
        Some((kind, _)) => eyre::bail!("unknown kind {kind:?}, expected `bits` or `interval`"),
    }
    Ok(())
}
