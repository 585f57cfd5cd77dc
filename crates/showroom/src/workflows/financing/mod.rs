use serde::{Deserialize, Serialize};

/// Fixed-rate amortization quote over a financed principal.
///
/// This calculator sits behind a live keystroke-driven form, so it never
/// rejects input: degenerate or malformed values collapse to a zero quote
/// instead of surfacing an error, and every field in the output is a finite
/// number. No rounding is applied; currency formatting belongs to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_to_pay: f64,
}

impl LoanQuote {
    pub const fn zero() -> Self {
        Self {
            monthly_payment: 0.0,
            total_interest: 0.0,
            total_to_pay: 0.0,
        }
    }

    /// Compute the quote for `principal` at `annual_rate_percent` over
    /// `term_months` monthly installments.
    ///
    /// A non-positive principal or a zero term yields a zero quote. A 0%
    /// rate collapses the amortization formula to 0/0, so that case falls
    /// back to straight-line `principal / term_months`.
    pub fn compute(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        if !principal.is_finite() || principal <= 0.0 || term_months == 0 {
            return Self::zero();
        }

        let monthly_rate = annual_rate_percent / 100.0 / 12.0;
        if !monthly_rate.is_finite() || monthly_rate < 0.0 {
            return Self::zero();
        }

        let term = f64::from(term_months);
        let growth = (1.0 + monthly_rate).powi(term_months as i32);
        let mut monthly_payment = principal * (monthly_rate * growth) / (growth - 1.0);
        if !monthly_payment.is_finite() {
            monthly_payment = principal / term;
        }

        let total_to_pay = monthly_payment * term;

        Self {
            monthly_payment,
            total_interest: total_to_pay - principal,
            total_to_pay,
        }
    }
}

/// A quote anchored to a vehicle price with the buyer's down payment folded
/// into the out-the-door total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingPlan {
    pub principal: f64,
    pub down_payment: f64,
    pub quote: LoanQuote,
    /// `quote.total_to_pay` plus the down payment.
    pub total_with_down_payment: f64,
}

impl FinancingPlan {
    pub fn for_vehicle(
        price: f64,
        down_payment: f64,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> Self {
        let down_payment = if down_payment.is_finite() && down_payment > 0.0 {
            down_payment.min(price)
        } else {
            0.0
        };
        let principal = (price - down_payment).max(0.0);
        let quote = LoanQuote::compute(principal, annual_rate_percent, term_months);

        Self {
            principal,
            down_payment,
            total_with_down_payment: quote.total_to_pay + down_payment,
            quote,
        }
    }
}
