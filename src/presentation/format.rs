//! Display strings for prices, changes and large quantities.

/// Shown wherever a value is not (yet) known
pub const UNKNOWN: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 { Trend::Up } else { Trend::Down }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("¥{:.2}", price)
}

pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

pub fn format_rate(rate: f64) -> String {
    format!("{}%", format_signed(rate))
}

/// `+1.23 (+0.45%)`
pub fn format_change(amount: f64, rate: f64) -> String {
    format!("{} ({})", format_signed(amount), format_rate(rate))
}

/// Volumes and turnover: 亿 (1e8) and 万 (1e4) units, plain grouping below.
pub fn format_large_number(value: f64) -> String {
    if value >= 100_000_000.0 {
        format!("{:.2}亿", value / 100_000_000.0)
    } else if value >= 10_000.0 {
        format!("{:.2}万", value / 10_000.0)
    } else {
        group_thousands(value.round() as i64)
    }
}

pub fn format_count(count: Option<u64>) -> String {
    count.map_or_else(|| UNKNOWN.to_string(), |n| n.to_string())
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
