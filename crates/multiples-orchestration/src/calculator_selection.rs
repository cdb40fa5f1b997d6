//! Calculator selection logic.

use std::sync::Arc;

use multiples_core::calculator::{Calculator, MultiplesError};
use multiples_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, MultiplesError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiples_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory).unwrap();
        assert_eq!(calcs.len(), 2);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("concurrent", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Concurrent");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        let result = get_calculators_to_run("unknown", &factory);
        assert!(result.is_err());
    }
}
