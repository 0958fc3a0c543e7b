//! Misc stuff.

use std::fmt::Display;

use num_traits::PrimInt;
use pad::{Alignment, PadStr};


/// Renders a number left-padded with zeroes to the given width. Numbers
/// already wider than the width are left alone, never truncated.
///
/// A minus sign survives the padding, so `-5` at width 4 comes out as
/// `-005` rather than `0-05`.
pub fn zero_pad<N>(number: N, width: usize) -> String
where N: PrimInt + Display {
    let digits = number.to_string();

    if let Some(rest) = digits.strip_prefix('-') {
        format!("-{}", rest.pad(width.saturating_sub(1), '0', Alignment::Right, false))
    }
    else {
        digits.pad(width, '0', Alignment::Right, false)
    }
}
