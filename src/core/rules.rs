use crate::core::normalizer::format_amount;
use crate::models::{Priority, Recommendation, WeddingPreferences};
use chrono::{DateTime, Utc};

/// Hard cap on emitted recommendations, applied by truncation in emission
/// order (venue, photography, budget, urgency, traditions)
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Budget below which the budget-stretching tip fires. The threshold is
/// applied to the raw number regardless of the currency field.
const TIGHT_BUDGET_THRESHOLD: f64 = 10_000.0;

/// Months-until-wedding below which the urgency recommendation fires
const URGENT_MONTHS: i64 = 6;

/// State-free decision table producing rule-based planning recommendations
///
/// Used directly by the recommendations endpoint when the AI path is
/// unavailable, and as the degraded result when it fails.
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn generate(prefs: &WeddingPreferences, now: DateTime<Utc>) -> Vec<Recommendation> {
        let months = months_until_wedding(prefs.wedding_date, now);
        let budget = prefs.budget;
        let mut recommendations = Vec::new();

        recommendations.push(venue_recommendation(prefs, budget, months));
        recommendations.push(photography_recommendation(budget, months));

        if budget > 0.0 && budget < TIGHT_BUDGET_THRESHOLD {
            recommendations.push(budget_stretch_recommendation(budget));
        }

        if months < URGENT_MONTHS {
            recommendations.push(urgency_recommendation(months));
        }

        if !prefs.cultural_traditions.is_empty() || !prefs.religious_traditions.is_empty() {
            recommendations.push(traditions_recommendation());
        }

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

/// Whole months until the wedding, `ceil((date - now) / 30 days)`, clamped
/// at zero; twelve months when no date is set
pub fn months_until_wedding(wedding_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match wedding_date {
        Some(date) => {
            let seconds = (date - now).num_seconds();
            let months = (seconds as f64 / (30.0 * 24.0 * 3600.0)).ceil() as i64;
            months.max(0)
        }
        None => 12,
    }
}

fn cost_band(budget: f64, low_share: f64, high_share: f64, default: &str) -> String {
    if budget > 0.0 {
        format!(
            "£{} - £{}",
            format_amount(budget * low_share),
            format_amount(budget * high_share)
        )
    } else {
        default.to_string()
    }
}

fn venue_recommendation(prefs: &WeddingPreferences, budget: f64, months: i64) -> Recommendation {
    let guests = if prefs.guest_count.is_empty() {
        "your estimated".to_string()
    } else {
        prefs.guest_count.clone()
    };

    Recommendation {
        priority: Priority::High,
        category: "venue".to_string(),
        title: "Secure Your Wedding Venue".to_string(),
        description: format!(
            "Find and book your wedding venue in {}. With {} guests, you'll need a space that can comfortably accommodate everyone.",
            prefs.wedding_location, guests
        ),
        reasoning: "Venue is typically the largest expense and sets the tone for your entire wedding. Popular venues book up quickly, especially in desirable locations.".to_string(),
        actionable_steps: vec![
            "Research venues in your area that fit your budget and guest count".to_string(),
            "Schedule site visits for your top 3-5 choices".to_string(),
            "Ask about availability for your wedding date".to_string(),
            "Compare pricing packages and what's included".to_string(),
        ],
        estimated_cost: Some(cost_band(budget, 0.4, 0.5, "£3,000 - £15,000")),
        timeframe: Some(if months > 12 {
            "12-18 months before wedding".to_string()
        } else {
            "Book immediately".to_string()
        }),
    }
}

fn photography_recommendation(budget: f64, months: i64) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "photography".to_string(),
        title: "Book Your Wedding Photographer".to_string(),
        description: "Secure a professional photographer to capture your special moments. Quality wedding photography is an investment in memories that will last forever.".to_string(),
        reasoning: "The best photographers in your area book up quickly, and photography is one element you cannot recreate after the wedding.".to_string(),
        actionable_steps: vec![
            "Research photographers whose style matches your vision".to_string(),
            "Review full wedding galleries, not just highlight reels".to_string(),
            "Meet with photographers to ensure personality fit".to_string(),
            "Compare packages and understand what's included".to_string(),
        ],
        estimated_cost: Some(cost_band(budget, 0.1, 0.15, "£1,000 - £3,000")),
        timeframe: Some(if months > 9 {
            "9-12 months before wedding".to_string()
        } else {
            "Book as soon as possible".to_string()
        }),
    }
}

fn budget_stretch_recommendation(budget: f64) -> Recommendation {
    Recommendation {
        priority: Priority::Medium,
        category: "planning".to_string(),
        title: "Maximize Your Budget with Smart Choices".to_string(),
        description: format!(
            "With your budget of £{}, focus on the elements that matter most to you and find creative ways to save on others.",
            format_amount(budget)
        ),
        reasoning: "Strategic planning can help you achieve your dream wedding within your budget constraints.".to_string(),
        actionable_steps: vec![
            "Prioritize your top 3 most important wedding elements".to_string(),
            "Consider weekday or off-season dates for better pricing".to_string(),
            "Look into DIY options for decorations and favors".to_string(),
            "Research local vendors who offer package deals".to_string(),
        ],
        estimated_cost: Some("Stay within existing budget".to_string()),
        timeframe: Some("Start planning immediately".to_string()),
    }
}

fn urgency_recommendation(months: i64) -> Recommendation {
    Recommendation {
        priority: Priority::High,
        category: "planning".to_string(),
        title: "Accelerate Your Wedding Planning".to_string(),
        description: format!(
            "With only {} months until your wedding, you need to move quickly on key decisions and bookings.",
            months
        ),
        reasoning: "Many vendors require 6+ months lead time, so you'll need to be flexible and act fast.".to_string(),
        actionable_steps: vec![
            "Book venue and photographer immediately".to_string(),
            "Be flexible with vendor choices and dates".to_string(),
            "Consider simplified menu options".to_string(),
            "Focus on essential elements first".to_string(),
        ],
        estimated_cost: None,
        timeframe: Some("All actions are urgent".to_string()),
    }
}

fn traditions_recommendation() -> Recommendation {
    Recommendation {
        priority: Priority::Medium,
        category: "planning".to_string(),
        title: "Honor Your Cultural and Religious Traditions".to_string(),
        description: "Incorporate your cultural and religious traditions meaningfully into your wedding celebration.".to_string(),
        reasoning: "These elements add personal significance and ensure your wedding reflects your values and heritage.".to_string(),
        actionable_steps: vec![
            "Research vendors experienced with your traditions".to_string(),
            "Plan ceremony elements that honor your beliefs".to_string(),
            "Consider traditional music, food, or customs".to_string(),
            "Communicate requirements clearly to all vendors".to_string(),
        ],
        estimated_cost: None,
        timeframe: Some("Include in all vendor discussions".to_string()),
    }
}
