use anyhow::Result;
use clap::Parser;
use client_core::{EditForm, HttpPricingGateway, PricingGateway};
use shared::domain::{Matrix, Plan, Term};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,
    /// Term of the cell to update: 36months, 24months, 12months or mtm.
    #[arg(long)]
    term: Option<Term>,
    /// Plan of the cell to update: lite, standard or unlimited.
    #[arg(long)]
    plan: Option<Plan>,
    /// New price for the cell. Lite prices cascade into standard/unlimited.
    #[arg(long)]
    price: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let gateway = HttpPricingGateway::new(args.server_url);
    let initial = gateway.fetch_pricing().await?;
    let mut form = EditForm::new(gateway, Some(initial));

    println!("Current pricing:");
    print_matrix(form.matrix());

    let (Some(term), Some(plan), Some(price)) = (args.term, args.plan, args.price) else {
        return Ok(());
    };

    form.edit();
    form.input_cell(term, plan, &price)?;
    form.save().await?;

    println!("Saved. New pricing:");
    print_matrix(form.matrix());
    Ok(())
}

fn print_matrix(matrix: &Matrix) {
    println!(
        "{:<12} {:>12} {:>12} {:>12}",
        "", "lite", "standard", "unlimited"
    );
    for term in Term::ALL {
        let row = matrix.row(term);
        println!(
            "{:<12} {:>12.2} {:>12.2} {:>12.2}",
            term.as_str(),
            row.lite,
            row.standard,
            row.unlimited
        );
    }
}
