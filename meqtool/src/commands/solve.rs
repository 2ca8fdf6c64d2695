use meq_solver::MarketAnalysis;
use std::io::Write;

/// Writes the human-readable report: equilibria, any advisory condition,
/// and the price table with equilibrium rows marked by `*`.
pub fn render_text(analysis: &MarketAnalysis, out: &mut impl Write) -> std::io::Result<()> {
    match &analysis.base {
        Some(eq) => writeln!(
            out,
            "Equilibrium: price {:.2}, quantity {:.2}",
            eq.price, eq.quantity
        )?,
        None => writeln!(out, "No equilibrium in the non-negative region.")?,
    }

    if let Some(eq) = analysis.display_shifted() {
        writeln!(
            out,
            "Shifted equilibrium: price {:.2}, quantity {:.2}",
            eq.price, eq.quantity
        )?;
    } else if analysis.shifts_active {
        writeln!(out, "No shifted equilibrium in the non-negative region.")?;
    }

    if let Some(condition) = &analysis.condition {
        writeln!(out, "Note: {condition}")?;
    }

    writeln!(out)?;
    if analysis.shifts_active {
        writeln!(
            out,
            " {:>10} {:>10} {:>10} {:>14} {:>14}",
            "quantity", "demand", "supply", "shifted demand", "shifted supply"
        )?;
    } else {
        writeln!(out, " {:>10} {:>10} {:>10}", "quantity", "demand", "supply")?;
    }

    for row in &analysis.table {
        let mark = if row.equilibrium { '*' } else { ' ' };
        if analysis.shifts_active {
            writeln!(
                out,
                "{mark}{:>10} {:>10} {:>10} {:>14} {:>14}",
                row.label,
                price_cell(row.demand),
                price_cell(row.supply),
                price_cell(row.shifted_demand),
                price_cell(row.shifted_supply),
            )?;
        } else {
            writeln!(
                out,
                "{mark}{:>10} {:>10} {:>10}",
                row.label,
                price_cell(row.demand),
                price_cell(row.supply),
            )?;
        }
    }

    Ok(())
}

// Absent prices print as a dash; a zero price is real data and prints as 0.00.
// Adding 0.0 folds IEEE negative zero into plain zero before formatting.
fn price_cell(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p + 0.0),
        None => "-".to_string(),
    }
}
