/// A numeric money interval parsed from free-text price or budget strings.
///
/// `max == None` means the interval is open-ended ("Over £10,000", "£10,000+").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneyRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl MoneyRange {
    /// Interval intersection test; an open-ended max behaves as infinity
    #[inline]
    pub fn intersects(&self, other: &MoneyRange) -> bool {
        let self_max = self.max.unwrap_or(f64::INFINITY);
        let other_max = other.max.unwrap_or(f64::INFINITY);
        self.min <= other_max && other.min <= self_max
    }
}

/// Parse the numeric bounds out of a price-range or budget-bucket string.
///
/// Handles the catalog and questionnaire formats: "£1,000 - £2,500",
/// "£500-£1,000", "£10,000+", "Over £10,000", "Under £1,000",
/// "£85 - £180 per person". Returns None when the text carries no digits,
/// in which case callers must not use it to exclude a candidate.
pub fn parse_money_range(text: &str) -> Option<MoneyRange> {
    let amounts = extract_amounts(text);
    if amounts.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    if lower.contains("under") || lower.contains("up to") {
        return Some(MoneyRange {
            min: 0.0,
            max: Some(amounts[0]),
        });
    }
    if lower.contains("over") || text.contains('+') {
        return Some(MoneyRange {
            min: amounts[0],
            max: None,
        });
    }

    if amounts.len() >= 2 {
        let (min, max) = if amounts[0] <= amounts[1] {
            (amounts[0], amounts[1])
        } else {
            (amounts[1], amounts[0])
        };
        Some(MoneyRange {
            min,
            max: Some(max),
        })
    } else {
        Some(MoneyRange {
            min: amounts[0],
            max: Some(amounts[0]),
        })
    }
}

/// Pull every numeric amount out of a string, tolerating currency symbols
/// and thousands separators
fn extract_amounts(text: &str) -> Vec<f64> {
    let mut amounts = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if (ch == ',' || ch == '.') && !current.is_empty() {
            // Keep decimal points, drop thousands separators
            if ch == '.' {
                current.push(ch);
            }
        } else if !current.is_empty() {
            if let Ok(value) = current.trim_end_matches('.').parse::<f64>() {
                amounts.push(value);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(value) = current.trim_end_matches('.').parse::<f64>() {
            amounts.push(value);
        }
    }

    amounts
}

/// Midpoint of a guest-count bucket string, used by the catering heuristics
pub fn guest_count_midpoint(bucket: &str) -> u32 {
    if bucket.contains("1-50") {
        25
    } else if bucket.contains("50-100") {
        75
    } else if bucket.contains("100-150") {
        125
    } else if bucket.contains("150-200") {
        175
    } else if bucket.contains("200+") {
        250
    } else {
        100
    }
}

/// Lower bound of a guest-count bucket string ("100-150" -> 100),
/// used by the recommendation routes
pub fn guest_count_lower_bound(bucket: &str) -> u32 {
    bucket
        .split('-')
        .next()
        .map(|part| part.trim_end_matches('+'))
        .and_then(|part| part.trim().parse().ok())
        .unwrap_or(50)
}

/// Map a numeric budget onto the bucket strings the search UI offers
pub fn budget_bucket(budget: f64) -> &'static str {
    if budget < 1_000.0 {
        "Under £1,000"
    } else if budget < 2_500.0 {
        "£1,000 - £2,500"
    } else if budget < 5_000.0 {
        "£2,500 - £5,000"
    } else if budget < 10_000.0 {
        "£5,000 - £10,000"
    } else {
        "Over £10,000"
    }
}

/// Render an amount with thousands separators ("8000" -> "8,000")
pub fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }

    if whole < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}
