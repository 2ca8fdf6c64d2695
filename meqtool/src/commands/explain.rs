use meq_core::models::NarrativeRequest;
use meq_core::ports::Narrator;
use std::convert::Infallible;

/// A narrator that composes its explanation locally.
///
/// The production collaborator for this port is a remote generative text
/// service; this stand-in keeps the command usable offline and makes the
/// output deterministic.
pub struct LocalNarrator;

impl Narrator for LocalNarrator {
    type Error = Infallible;

    fn explain(
        &self,
        request: &NarrativeRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        std::future::ready(Ok(compose(request)))
    }
}

fn compose(request: &NarrativeRequest) -> String {
    let mut text = format!(
        "The market is described by demand {} and supply {}.",
        request.demand_equation.trim(),
        request.supply_equation.trim()
    );

    match request.base {
        Some(eq) => text.push_str(&format!(
            " The curves clear at a price of {:.2}, where {:.2} units change hands.",
            eq.price, eq.quantity
        )),
        None => text.push_str(
            " The curves do not clear at any non-negative price and quantity, so the market has no equilibrium.",
        ),
    }

    let shifts_active = request.demand_shift != 0.0 || request.supply_shift != 0.0;
    if shifts_active {
        text.push_str(&format!(
            " With the demand intercept shifted by {:+} and the supply intercept by {:+},",
            request.demand_shift, request.supply_shift
        ));
        match request.shifted {
            Some(eq) => text.push_str(&format!(
                " the new equilibrium moves to a price of {:.2} and a quantity of {:.2}.",
                eq.price, eq.quantity
            )),
            None => text.push_str(" the shifted market no longer clears in the valid region."),
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use meq_core::models::Equilibrium;

    fn request() -> NarrativeRequest {
        NarrativeRequest {
            demand_equation: "-P + 16".to_string(),
            supply_equation: "P + 4".to_string(),
            demand_shift: 4.0,
            supply_shift: 0.0,
            base: Some(Equilibrium {
                price: 6.0,
                quantity: 10.0,
            }),
            shifted: Some(Equilibrium {
                price: 8.0,
                quantity: 12.0,
            }),
        }
    }

    #[tokio::test]
    async fn test_narrates_both_equilibria() {
        let text = LocalNarrator.explain(&request()).await.unwrap();
        assert!(text.contains("price of 6.00"));
        assert!(text.contains("shifted by +4"));
        assert!(text.contains("price of 8.00"));
    }

    #[test]
    fn test_narrates_a_market_without_equilibrium() {
        let mut req = request();
        req.base = None;
        req.shifted = None;
        let text = compose(&req);
        assert!(text.contains("no equilibrium"));
        assert!(text.contains("no longer clears"));
    }
}
