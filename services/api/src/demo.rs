use crate::infra::sample_inventory;
use clap::Args;
use showroom::config::ComparisonLimits;
use showroom::error::AppError;
use showroom::workflows::comparison::{ComparisonEntry, ComparisonService};
use showroom::workflows::financing::FinancingPlan;

#[derive(Args, Debug)]
pub(crate) struct FinanceQuoteArgs {
    /// Vehicle price
    #[arg(long)]
    pub(crate) price: f64,
    /// Down payment (defaults to 0)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) down_payment: f64,
    /// Annual interest rate in percent, e.g. 8.5
    #[arg(long)]
    pub(crate) annual_rate_percent: f64,
    /// Term in months, e.g. 36
    #[arg(long)]
    pub(crate) term_months: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Down payment applied when financing the comparison winner
    #[arg(long, default_value_t = 3_000.0)]
    pub(crate) down_payment: f64,
    /// Annual interest rate in percent for the financing step
    #[arg(long, default_value_t = 8.5)]
    pub(crate) annual_rate_percent: f64,
    /// Term in months for the financing step
    #[arg(long, default_value_t = 36)]
    pub(crate) term_months: u32,
    /// Skip the financing portion of the demo
    #[arg(long)]
    pub(crate) skip_financing: bool,
}

pub(crate) fn run_finance_quote(args: FinanceQuoteArgs) -> Result<(), AppError> {
    let FinanceQuoteArgs {
        price,
        down_payment,
        annual_rate_percent,
        term_months,
    } = args;

    let plan = FinancingPlan::for_vehicle(price, down_payment, annual_rate_percent, term_months);
    render_plan(&plan, price, annual_rate_percent, term_months);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        down_payment,
        annual_rate_percent,
        term_months,
        skip_financing,
    } = args;

    println!("Storefront comparison demo");

    let service = ComparisonService::standard(ComparisonLimits::default());
    let inventory = sample_inventory();
    println!("Line-up ({} vehicles):", inventory.len());
    for vehicle in &inventory {
        println!(
            "- {} | ${:.0} | {:.0} mi | {} | {} | rated {:.1}",
            vehicle.label,
            vehicle.price,
            vehicle.mileage,
            vehicle.fuel_type.label(),
            vehicle.transmission.label(),
            vehicle.rating
        );
    }

    let report = match service.compare(inventory) {
        Ok(report) => report,
        Err(err) => {
            println!("Comparison rejected: {err}");
            return Ok(());
        }
    };

    println!("\nRankings:");
    for (index, entry) in report.entries.iter().enumerate() {
        render_entry(index + 1, entry);
    }

    if skip_financing {
        return Ok(());
    }

    if let Some(winner) = report.winner() {
        println!("\nFinancing the winner ({})", winner.vehicle.label);
        let plan = FinancingPlan::for_vehicle(
            winner.vehicle.price,
            down_payment,
            annual_rate_percent,
            term_months,
        );
        render_plan(&plan, winner.vehicle.price, annual_rate_percent, term_months);
    }

    Ok(())
}

fn render_entry(rank: usize, entry: &ComparisonEntry) {
    println!(
        "{rank}. {} | score {:.3}{}",
        entry.vehicle.label,
        entry.score,
        if rank == 1 { " | winner" } else { "" }
    );
    if !entry.best_categories.is_empty() {
        let labels: Vec<&str> = entry
            .best_categories
            .iter()
            .map(|category| category.label())
            .collect();
        println!("   best in: {}", labels.join(", "));
    }
    if !entry.highlights.pros.is_empty() {
        println!("   pros: {}", entry.highlights.pros.join(", "));
    }
    if !entry.highlights.cons.is_empty() {
        println!("   cons: {}", entry.highlights.cons.join(", "));
    }
}

fn render_plan(plan: &FinancingPlan, price: f64, annual_rate_percent: f64, term_months: u32) {
    println!(
        "- ${price:.2} with ${:.2} down at {annual_rate_percent}% over {term_months} months",
        plan.down_payment
    );
    println!("  financed principal: ${:.2}", plan.principal);
    println!("  monthly payment:    ${:.2}", plan.quote.monthly_payment);
    println!("  total interest:     ${:.2}", plan.quote.total_interest);
    println!("  out-the-door total: ${:.2}", plan.total_with_down_payment);
}
