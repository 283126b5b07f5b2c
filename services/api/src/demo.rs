use crate::infra::{assessment_service, parse_bedrooms, parse_unit_type};
use chrono::{Duration, Local};
use clap::Args;
use rera_smart::config::AppConfig;
use rera_smart::error::AppError;
use rera_smart::renewal::{
    format_aed, AssessmentView, Bedrooms, RenewalSubmission, UnitProfile, UnitType,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Current annual rent in AED
    #[arg(long)]
    pub(crate) current_rent: String,
    /// Average market rent for comparable units in AED
    #[arg(long, default_value = "")]
    pub(crate) market_rent: String,
    /// RERA valuation certificate amount in AED, if one exists
    #[arg(long)]
    pub(crate) valuation_amount: Option<String>,
    /// Declare a valuation certificate even without an amount on hand
    #[arg(long)]
    pub(crate) has_valuation: bool,
    /// Lease expiry date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub(crate) expiry_date: String,
    /// Date the renewal notice was served (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub(crate) notice_date: String,
    /// Community or area name, used for advisory prompts
    #[arg(long, default_value = "")]
    pub(crate) area: String,
    /// Unit type: apartment or villa
    #[arg(long, value_parser = parse_unit_type, default_value = "apartment")]
    pub(crate) unit_type: UnitType,
    /// Bedroom count: studio, 1, 2, 3 or 4+
    #[arg(long, value_parser = parse_bedrooms, default_value = "1")]
    pub(crate) bedrooms: Bedrooms,
    /// Flag that the tenant first declined renewal and then reversed course
    #[arg(long)]
    pub(crate) tenant_flip_flop: bool,
    /// Attach AI advisory output to the assessment
    #[arg(long)]
    pub(crate) include_advice: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Community or area name, e.g. "Jumeirah Village Circle"
    #[arg(long)]
    pub(crate) area: String,
    /// Unit type: apartment or villa
    #[arg(long, value_parser = parse_unit_type, default_value = "apartment")]
    pub(crate) unit_type: UnitType,
    /// Bedroom count: studio, 1, 2, 3 or 4+
    #[arg(long, value_parser = parse_bedrooms, default_value = "1")]
    pub(crate) bedrooms: Bedrooms,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the advisory call and print decisions only
    #[arg(long)]
    pub(crate) skip_advice: bool,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        current_rent,
        market_rent,
        valuation_amount,
        has_valuation,
        expiry_date,
        notice_date,
        area,
        unit_type,
        bedrooms,
        tenant_flip_flop,
        include_advice,
    } = args;

    let config = AppConfig::load()?;
    let service = assessment_service(&config)?;

    let submission = RenewalSubmission {
        current_rent,
        market_rent,
        area,
        unit_type,
        bedrooms,
        expiry_date,
        notice_date,
        has_valuation: has_valuation || valuation_amount.is_some(),
        valuation_amount: valuation_amount.unwrap_or_default(),
        tenant_flip_flop,
    };

    let view = service.assess(&submission, include_advice).await;
    render_assessment("Renewal assessment", &view);
    Ok(())
}

pub(crate) async fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        area,
        unit_type,
        bedrooms,
    } = args;

    let config = AppConfig::load()?;
    let service = assessment_service(&config)?;
    let unit = UnitProfile {
        area,
        unit_type,
        bedrooms,
    };

    match service.estimate_market_rent(&unit).await {
        Some(amount) => println!(
            "Estimated market rent for a {} {} in {}: {}",
            unit.bedrooms.label(),
            unit.unit_type.label(),
            unit.area,
            format_aed(amount)
        ),
        None => println!("No estimate available. Check the advisory API key and connectivity."),
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_advice } = args;

    let config = AppConfig::load()?;
    let service = assessment_service(&config)?;

    let today = Local::now().date_naive();
    let far_expiry = (today + Duration::days(180)).format("%Y-%m-%d").to_string();
    let near_expiry = (today + Duration::days(60)).format("%Y-%m-%d").to_string();
    let notice_today = today.format("%Y-%m-%d").to_string();

    println!("Rent renewal assessment demo");

    let index_backed = RenewalSubmission {
        current_rent: "80000".to_string(),
        market_rent: "120000".to_string(),
        area: "Business Bay".to_string(),
        expiry_date: far_expiry.clone(),
        notice_date: notice_today.clone(),
        ..RenewalSubmission::default()
    };
    let view = service.assess(&index_backed, !skip_advice).await;
    render_assessment("Scenario: rent well below the index", &view);

    let late_notice = RenewalSubmission {
        current_rent: "80000".to_string(),
        market_rent: "120000".to_string(),
        area: "Business Bay".to_string(),
        expiry_date: near_expiry,
        notice_date: notice_today.clone(),
        ..RenewalSubmission::default()
    };
    let view = service.assess(&late_notice, false).await;
    render_assessment("Scenario: notice served inside 90 days", &view);

    let valuation_backed = RenewalSubmission {
        current_rent: "70000".to_string(),
        market_rent: "72000".to_string(),
        area: "Dubai Marina".to_string(),
        expiry_date: far_expiry,
        notice_date: notice_today,
        has_valuation: true,
        valuation_amount: "100000".to_string(),
        ..RenewalSubmission::default()
    };
    let view = service.assess(&valuation_backed, false).await;
    render_assessment("Scenario: valuation certificate benchmark", &view);

    Ok(())
}

fn render_assessment(heading: &str, view: &AssessmentView) {
    let decision = &view.decision;
    let comparison = &view.comparison;

    println!("\n{heading}");
    println!(
        "Current {} vs {} benchmark {}",
        format_aed(comparison.current_rent),
        comparison.benchmark_label,
        format_aed(comparison.benchmark_rent)
    );

    if decision.is_eligible {
        println!(
            "- Allowed increase: {}% ({})",
            decision.increase_percentage,
            format_aed(decision.max_increase_amount)
        );
    } else {
        println!("- Allowed increase: none");
    }
    println!("- New maximum rent: {}", format_aed(decision.new_max_rent));
    println!("- Band: {}", decision.band_reason);
    println!("- Notice: {}", decision.notice_message);
    println!(
        "- Risk: {} ({})",
        decision.risk_level.label(),
        decision.risk_reason
    );
    println!("- Why: {}", decision.why_result);
    println!("- Summary: {}", decision.plain_english_summary);
    println!("- RDC outlook: {}", decision.rdc_expectation);
    if let Some(warning) = &decision.edge_case_warning {
        println!("- Warning: {}", warning);
    }

    if let Some(advice) = &view.advice {
        println!("Recommended next steps:");
        for step in &advice.next_steps {
            println!("  - {}", step);
        }
        println!("Market context: {}", advice.market_context);
    }
}
