//! Walkthrough of checked-int: mixed-kind arithmetic, explicit casts and the
//! overflow channel. Set `RUST_LOG=debug` to also see the working kinds.

use anyhow::Context;
use checked_int::{checked, checked_cast, select, Checked, OverflowError, Primitive};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn kind_of<T: Primitive>(_: &Checked<T>) -> checked_int::Kind {
    Checked::<T>::kind()
}

fn report<T: Primitive>(label: &str, res: Result<Checked<T>, OverflowError>) {
    match res {
        Ok(v) => info!(%v, kind = ?kind_of(&v), "{}", label),
        Err(e) => warn!(op = %e.op(), "{}: {}", label, e),
    }
}

fn mixed_arithmetic() -> anyhow::Result<()> {
    let a = checked(10i32);
    let b = checked(11i64);

    let c = a + b;
    debug!(kind = ?kind_of(&c), "i32 + i64");
    info!(%c, "a + b");
    info!(d = %(a + 1), e = %(1i32 + a), "raw operands on either side");

    // unsigned meets signed in u32, where 1 - 10 has no value
    report("1u32 - a", checked(1u32).try_sub(a));

    let g = 1i64 * a;
    let h = 1u64 / a;
    info!(%g, %h, "widened by the raw operand");

    let mut acc = a;
    acc += 1;
    acc -= 1u32;
    acc *= 1i64;
    acc /= 1u64;
    acc %= 7u64;
    info!(%acc, "compound assignment casts back to i32");

    let narrow: Checked<i16> = checked_cast(acc).context("narrowing accumulator")?;
    let wide: i64 = acc.into();
    info!(%narrow, wide, "explicit narrowing, implicit widening");
    Ok(())
}

fn comparisons() {
    let c1 = checked(10i32);
    let c2 = checked(20i32);
    info!(
        gt = c1 > c2,
        ge = c1 >= c2,
        le = c1 <= c2,
        lt = c1 < c2,
        eq = c1 == c2,
        ne = c1 != c2,
        "10 vs 20"
    );
    info!(plus = %c1.promote(), minus = %(-c1), "unary");

    let bo: Checked<bool> = true.into();
    if bo.get() {
        info!(%bo, "bool only converts to bool");
    }
}

fn unification() -> anyhow::Result<()> {
    let y = select(false, checked(10i32), checked(11i64))?;
    let w = select(false, 1i64, checked(1i64))?;
    debug!(y_kind = ?kind_of(&y), w_kind = ?kind_of(&w), "common kinds");
    info!(%y, %w, "select");

    let ii = checked(255u32);
    let jj: Checked<i32> = ii.cast()?;
    info!(%jj, infallible = Checked::<u32>::cast_is_infallible::<i32>(), "u32 to i32");
    Ok(())
}

fn overflow_scenarios() {
    report("i32::MAX + 1", checked(i32::MAX).try_add(1i32));
    report("200u8 + 100u8", checked(200u8).try_add(100u8));
    report("10i32 + 20i64", checked(10i32).try_add(20i64));
    report("5u32 / 0", checked(5u32).try_div(0u32));
    report("-1i32 as u16", checked(-1i32).cast::<u16>());
    report("i8::MIN / -1", checked(i8::MIN).try_div(-1i8));
    report("1u8 << 31", checked(1u8).try_shl(31));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    mixed_arithmetic()?;
    comparisons();
    unification()?;
    overflow_scenarios();
    Ok(())
}
