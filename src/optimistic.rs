//! Optimistic quantity echo
//!
//! The quantity input is updated before the server answers. There is no
//! reconciliation: a rejected update leaves the echoed number in place until
//! the next full render. Any sequencing guard belongs in this module.

/// Something holding a quantity as text, usually the row's `<input>`
pub trait QuantityField {
    fn read_raw(&self) -> String;
    fn write_raw(&self, value: &str);
}

impl QuantityField for web_sys::HtmlInputElement {
    fn read_raw(&self) -> String {
        self.value()
    }

    fn write_raw(&self, value: &str) {
        self.set_value(value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityStep {
    Increment,
    Decrement,
}

/// Leading integer of `raw`, like the browser's `parseInt`
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Positive quantity in `raw`, or `None` when unparsable or not positive
pub fn parse_quantity(raw: &str) -> Option<u32> {
    parse_leading_int(raw)
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok())
}

/// Quantity after `step`, or `None` when decrementing would drop below 1
pub fn next_quantity(raw: &str, step: QuantityStep) -> Option<u32> {
    let current = parse_quantity(raw).unwrap_or(1);
    match step {
        QuantityStep::Increment => Some(current.saturating_add(1)),
        QuantityStep::Decrement if current > 1 => Some(current - 1),
        QuantityStep::Decrement => None,
    }
}

/// Apply `step` to `field` immediately and return the value written
pub fn echo_quantity_locally(field: &dyn QuantityField, step: QuantityStep) -> Option<u32> {
    let next = next_quantity(&field.read_raw(), step)?;
    field.write_raw(&next.to_string());
    Some(next)
}
